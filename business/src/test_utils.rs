//! In-memory API stub for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiError, StackExchangeApi, UserDto, UsersQuery, UsersResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubCall {
    List { page: u32, page_size: u32 },
    Search { inname: String, page: u32, page_size: u32 },
}

/// Returns the same canned result for every call and records each call.
#[derive(Debug)]
pub struct StubApi {
    result: Result<UsersResponse, ApiError>,
    calls: Mutex<Vec<StubCall>>,
}

impl StubApi {
    pub fn ok(response: UsersResponse) -> Self {
        Self {
            result: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: StubCall) -> Result<UsersResponse, ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        self.result.clone()
    }
}

#[async_trait]
impl StackExchangeApi for StubApi {
    async fn get_users(&self, query: &UsersQuery) -> Result<UsersResponse, ApiError> {
        self.record(StubCall::List {
            page: query.page,
            page_size: query.page_size,
        })
    }

    async fn search_users(
        &self,
        inname: &str,
        query: &UsersQuery,
    ) -> Result<UsersResponse, ApiError> {
        self.record(StubCall::Search {
            inname: inname.to_owned(),
            page: query.page,
            page_size: query.page_size,
        })
    }
}

pub fn user_dto(id: u64, name: &str) -> UserDto {
    UserDto {
        user_id: id,
        display_name: name.to_owned(),
        reputation: 100 * i64::try_from(id).unwrap_or(1),
        profile_image: None,
        location: None,
        creation_date: None,
        last_access_date: None,
        website_url: None,
        badge_counts: None,
        reputation_change_year: None,
        reputation_change_quarter: None,
        reputation_change_month: None,
        reputation_change_week: None,
        reputation_change_day: None,
    }
}

/// Ids are assigned 1.. in the given order.
pub fn users_response(names: &[&str]) -> UsersResponse {
    UsersResponse {
        items: names
            .iter()
            .zip(1..)
            .map(|(name, id)| user_dto(id, name))
            .collect(),
        has_more: false,
        quota_max: 300,
        quota_remaining: 299,
    }
}
