//! Client for the StackExchange `/users` endpoint.

mod dto;

use std::fmt::Debug;

use async_trait::async_trait;
use log::{debug, error};
use thiserror::Error;
use ustr::Ustr;

pub use dto::{BadgeCountsDto, ErrorResponse, UserDto, UsersResponse};

use crate::BusinessConfig;
use crate::http::{Client, Response};

/// Failure talking to the API. `Display` is the underlying message only, so it
/// can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Decode(String),
}

/// The directory is always listed alphabetically.
const SORT_ORDER: &str = "asc";
const SORT_FIELD: &str = "name";

/// Query parameters shared by the list and filter variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersQuery {
    pub page: u32,
    pub page_size: u32,
    pub site: Ustr,
    pub key: Option<String>,
}

impl Default for UsersQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            site: Ustr::from(crate::config::DEFAULT_SITE),
            key: None,
        }
    }
}

impl UsersQuery {
    pub fn from_config(config: &BusinessConfig) -> Self {
        Self {
            page_size: config.page_size(),
            site: config.site,
            key: config.api_key.clone(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.clamp(1, crate::config::MAX_PAGE_SIZE);
        self
    }

    /// Wire parameters in request order. `inname` is appended when filtering.
    pub fn params(&self, inname: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pagesize", self.page_size.to_string()),
            ("order", SORT_ORDER.to_owned()),
            ("sort", SORT_FIELD.to_owned()),
            ("site", self.site.to_string()),
        ];
        if let Some(key) = &self.key {
            params.push(("key", key.clone()));
        }
        if let Some(inname) = inname {
            params.push(("inname", inname.to_owned()));
        }
        params
    }
}

/// The HTTP client interface of the directory.
#[async_trait]
pub trait StackExchangeApi: Send + Sync + Debug {
    /// Unfiltered listing.
    async fn get_users(&self, query: &UsersQuery) -> Result<UsersResponse, ApiError>;

    /// Users whose display name contains `inname`.
    async fn search_users(
        &self,
        inname: &str,
        query: &UsersQuery,
    ) -> Result<UsersResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpStackExchangeApi {
    client: Client,
    users_url: String,
}

impl HttpStackExchangeApi {
    pub fn new(config: &BusinessConfig) -> Result<Self, ApiError> {
        let client = Client::new().map_err(|e| ApiError::Transport(e.message))?;
        Ok(Self {
            client,
            users_url: config.users_url(),
        })
    }

    async fn fetch(
        &self,
        query: &UsersQuery,
        inname: Option<&str>,
    ) -> Result<UsersResponse, ApiError> {
        let mut request = self
            .client
            .get(&self.users_url)
            .header("accept", "application/json");
        for (name, value) in query.params(inname) {
            request = request.query(name, value);
        }

        let response = request.send().await.map_err(|e| {
            error!("GET {} failed: {}", self.users_url, e);
            ApiError::Transport(e.message)
        })?;

        if !response.is_success() {
            let err = status_error(&response);
            error!("GET {} returned {}: {}", self.users_url, response.status, err);
            return Err(err);
        }

        let users = response.json::<UsersResponse>().map_err(|e| {
            error!("Failed to decode users response: {e}");
            ApiError::Decode(e.to_string())
        })?;
        debug!(
            "Fetched {} users, quota {}/{}",
            users.items.len(),
            users.quota_remaining,
            users.quota_max
        );
        Ok(users)
    }
}

fn status_error(response: &Response) -> ApiError {
    let message = response
        .json::<ErrorResponse>()
        .ok()
        .and_then(|body| body.error_message)
        .unwrap_or_else(|| format!("API returned status: {}", response.status));
    ApiError::Status {
        status: response.status,
        message,
    }
}

#[async_trait]
impl StackExchangeApi for HttpStackExchangeApi {
    async fn get_users(&self, query: &UsersQuery) -> Result<UsersResponse, ApiError> {
        self.fetch(query, None).await
    }

    async fn search_users(
        &self,
        inname: &str,
        query: &UsersQuery,
    ) -> Result<UsersResponse, ApiError> {
        self.fetch(query, Some(inname)).await
    }
}
