//! Wire records for `GET /users`, mirroring the JSON response shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub items: Vec<UserDto>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub quota_max: u32,
    #[serde(default)]
    pub quota_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: u64,
    pub display_name: String,
    pub reputation: i64,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub creation_date: Option<i64>,
    /// Unix seconds.
    #[serde(default)]
    pub last_access_date: Option<i64>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub badge_counts: Option<BadgeCountsDto>,
    #[serde(default)]
    pub reputation_change_year: Option<i64>,
    #[serde(default)]
    pub reputation_change_quarter: Option<i64>,
    #[serde(default)]
    pub reputation_change_month: Option<i64>,
    #[serde(default)]
    pub reputation_change_week: Option<i64>,
    #[serde(default)]
    pub reputation_change_day: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeCountsDto {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

/// Error body returned by the API alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error_id: Option<u32>,
    pub error_message: Option<String>,
    pub error_name: Option<String>,
}
