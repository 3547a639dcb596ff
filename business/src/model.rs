//! UI-facing user representation.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub reputation: i64,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    /// Formatted as `Jan 05, 2021`.
    pub creation_date: Option<String>,
    /// Formatted as `Jan 05, 2021`.
    pub last_access_date: Option<String>,
    pub website_url: Option<String>,
    pub badge_counts: Option<BadgeCounts>,
    pub reputation_changes: ReputationChanges,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, reputation: i64) -> Self {
        Self {
            id,
            username: username.into(),
            reputation,
            profile_image: None,
            location: None,
            creation_date: None,
            last_access_date: None,
            website_url: None,
            badge_counts: None,
            reputation_changes: ReputationChanges::default(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Website, unless missing or blank.
    pub fn website(&self) -> Option<&str> {
        self.website_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BadgeCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReputationChanges {
    pub day: Option<i64>,
    pub week: Option<i64>,
    pub month: Option<i64>,
    pub quarter: Option<i64>,
    pub year: Option<i64>,
}

impl ReputationChanges {
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Present deltas with their display label, shortest period first.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i64)> {
        [
            ("Today", self.day),
            ("Week", self.week),
            ("Month", self.month),
            ("Quarter", self.quarter),
            ("Year", self.year),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
    }
}
