//! DTO to domain mapping.

use chrono::DateTime;

use crate::api::{BadgeCountsDto, UserDto};
use crate::model::{BadgeCounts, ReputationChanges, User};

const DATE_FORMAT: &str = "%b %d, %Y";

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.user_id,
            username: decode_entities(&dto.display_name),
            reputation: dto.reputation,
            profile_image: dto.profile_image,
            location: dto.location.as_deref().map(decode_entities),
            creation_date: dto.creation_date.and_then(format_unix_date),
            last_access_date: dto.last_access_date.and_then(format_unix_date),
            website_url: dto.website_url,
            badge_counts: dto.badge_counts.map(BadgeCounts::from),
            reputation_changes: ReputationChanges {
                day: dto.reputation_change_day,
                week: dto.reputation_change_week,
                month: dto.reputation_change_month,
                quarter: dto.reputation_change_quarter,
                year: dto.reputation_change_year,
            },
        }
    }
}

impl From<BadgeCountsDto> for BadgeCounts {
    fn from(dto: BadgeCountsDto) -> Self {
        Self {
            gold: dto.gold,
            silver: dto.silver,
            bronze: dto.bronze,
        }
    }
}

/// Unix seconds to `Jan 05, 2021` (UTC). `None` when out of range.
pub fn format_unix_date(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.format(DATE_FORMAT).to_string())
}

/// Decodes the HTML entities the API embeds in free-text fields
/// (`&amp;`, `&#39;`, `&#x27;`, ...). Unknown entities and references to NUL
/// or control characters are kept verbatim.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match candidate.find(';').and_then(|end| {
            decode_entity(&candidate[1..end]).map(|decoded| (decoded, end))
        }) {
            Some((decoded, end)) => {
                out.push(decoded);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value).filter(|c| value != 0 && !c.is_control())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> UserDto {
        UserDto {
            user_id: 42,
            display_name: "Alice".to_owned(),
            reputation: 1234,
            profile_image: Some("https://example.com/a.png".to_owned()),
            location: Some("New York".to_owned()),
            creation_date: Some(1_609_459_200),
            last_access_date: None,
            website_url: Some("https://alice.dev/".to_owned()),
            badge_counts: Some(BadgeCountsDto {
                gold: 1,
                silver: 2,
                bronze: 3,
            }),
            reputation_change_year: Some(500),
            reputation_change_quarter: None,
            reputation_change_month: Some(-5),
            reputation_change_week: None,
            reputation_change_day: Some(0),
        }
    }

    #[test]
    fn maps_every_field() {
        let user = User::from(dto());

        assert_eq!(user.id, 42);
        assert_eq!(user.username, "Alice");
        assert_eq!(user.reputation, 1234);
        assert_eq!(user.location.as_deref(), Some("New York"));
        assert_eq!(user.creation_date.as_deref(), Some("Jan 01, 2021"));
        assert!(user.last_access_date.is_none());
        assert_eq!(
            user.badge_counts,
            Some(BadgeCounts {
                gold: 1,
                silver: 2,
                bronze: 3
            })
        );
        assert_eq!(user.reputation_changes.year, Some(500));
        assert_eq!(user.reputation_changes.month, Some(-5));
        assert_eq!(user.reputation_changes.day, Some(0));
        assert_eq!(user.reputation_changes.week, None);
    }

    #[test]
    fn formats_dates_in_utc() {
        assert_eq!(format_unix_date(0).as_deref(), Some("Jan 01, 1970"));
        assert_eq!(format_unix_date(1_217_462_400).as_deref(), Some("Jul 31, 2008"));
        assert_eq!(format_unix_date(i64::MAX), None);
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("O&#39;Brien"), "O'Brien");
        assert_eq!(decode_entities("caf&#xE9;"), "café");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
    }

    #[test]
    fn keeps_unknown_or_unterminated_entities() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_entities("& &amp;"), "& &");
    }

    #[test]
    fn keeps_nul_and_control_character_references() {
        assert_eq!(decode_entities("a&#0;b"), "a&#0;b");
        assert_eq!(decode_entities("bell&#7;"), "bell&#7;");
        assert_eq!(decode_entities("&#x1b;[31m"), "&#x1b;[31m");
        assert_eq!(decode_entities("&#x41;&#10;"), "A&#10;");
    }

    #[test]
    fn entities_in_name_and_location_are_decoded() {
        let mut raw = dto();
        raw.display_name = "Jos&#233;".to_owned();
        raw.location = Some("S&#227;o Paulo".to_owned());

        let user = User::from(raw);
        assert_eq!(user.username, "José");
        assert_eq!(user.location.as_deref(), Some("São Paulo"));
    }
}
