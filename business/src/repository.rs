//! The user directory: routes list/filter queries and maps results.

use std::sync::Arc;

use log::{error, info};
use thiserror::Error;

use crate::api::{ApiError, StackExchangeApi, UsersQuery};
use crate::model::User;

/// Failure surfaced to the presentation layer. `Display` is the underlying
/// message without any prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct UserDirectoryClient {
    api: Arc<dyn StackExchangeApi>,
    base: UsersQuery,
}

impl UserDirectoryClient {
    /// `base` supplies site and key settings; page and page size are
    /// given per call.
    pub fn new(api: Arc<dyn StackExchangeApi>, base: UsersQuery) -> Self {
        Self { api, base }
    }

    /// Blank (or absent) `query` lists all users; anything else filters by
    /// display-name substring.
    pub async fn fetch(
        &self,
        query: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<User>, DirectoryError> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(name) => self.search_users(name, page, page_size).await,
            None => self.get_users(page, page_size).await,
        }
    }

    pub async fn get_users(&self, page: u32, page_size: u32) -> Result<Vec<User>, DirectoryError> {
        let query = self.base.clone().with_page(page, page_size);
        let response = self.api.get_users(&query).await.inspect_err(|e| {
            error!("Listing users failed: {e}");
        })?;

        info!("Listed {} users (page {page})", response.items.len());
        Ok(response.items.into_iter().map(User::from).collect())
    }

    /// Same as [`UserDirectoryClient::get_users`] when `name` is blank.
    pub async fn search_users(
        &self,
        name: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<User>, DirectoryError> {
        let name = name.trim();
        if name.is_empty() {
            return self.get_users(page, page_size).await;
        }

        let query = self.base.clone().with_page(page, page_size);
        let response = self.api.search_users(name, &query).await.inspect_err(|e| {
            error!("Searching users for {name:?} failed: {e}");
        })?;

        info!(
            "Found {} users matching {name:?} (page {page})",
            response.items.len()
        );
        Ok(response.items.into_iter().map(User::from).collect())
    }
}
