//! Display rules shared by the desktop app and the CLI.

/// Reputation bands used to color list badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReputationTier {
    Gold,
    Green,
    Blue,
    Gray,
}

impl ReputationTier {
    pub fn of(reputation: i64) -> Self {
        match reputation {
            r if r >= 100_000 => Self::Gold,
            r if r >= 10_000 => Self::Green,
            r if r >= 1_000 => Self::Blue,
            _ => Self::Gray,
        }
    }
}

/// Short badge text: `999`, `1.5k`, `2.3M`.
pub fn compact_reputation(reputation: i64) -> String {
    if reputation >= 1_000_000 {
        format!("{:.1}M", reputation as f64 / 1_000_000.0)
    } else if reputation >= 1_000 {
        format!("{:.1}k", reputation as f64 / 1_000.0)
    } else {
        reputation.to_string()
    }
}

/// Details heading: `999 reputation`, `12,345 reputation`, `1.2M reputation`.
pub fn reputation_label(reputation: i64) -> String {
    if reputation >= 1_000_000 {
        format!("{:.1}M reputation", reputation as f64 / 1_000_000.0)
    } else if reputation >= 1_000 {
        format!("{} reputation", group_thousands(reputation))
    } else {
        format!("{reputation} reputation")
    }
}

/// `1234567` becomes `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `+5`, `+0`, `-3`.
pub fn signed_delta(value: i64) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Website without scheme or trailing slash.
pub fn website_display(url: &str) -> &str {
    let url = url.trim();
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.strip_suffix('/').unwrap_or(url)
}

/// Link target, assuming https when no scheme is given.
pub fn website_href(url: &str) -> String {
    let url = url.trim();
    if has_http_scheme(url) {
        url.to_owned()
    } else {
        format!("https://{url}")
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Uppercased first letter for avatar placeholders.
pub fn initial(username: &str) -> String {
    username
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}
