use std::sync::Arc;

use crate::model::User;
use crate::repository::{DirectoryError, UserDirectoryClient};

#[derive(Debug, Clone)]
pub struct GetUsersUseCase {
    directory: Arc<UserDirectoryClient>,
}

impl GetUsersUseCase {
    pub fn new(directory: Arc<UserDirectoryClient>) -> Self {
        Self { directory }
    }

    pub async fn call(&self, page: u32, page_size: u32) -> Result<Vec<User>, DirectoryError> {
        self.directory.get_users(page, page_size).await
    }
}

#[derive(Debug, Clone)]
pub struct SearchUsersUseCase {
    directory: Arc<UserDirectoryClient>,
}

impl SearchUsersUseCase {
    pub fn new(directory: Arc<UserDirectoryClient>) -> Self {
        Self { directory }
    }

    pub async fn call(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<User>, DirectoryError> {
        self.directory.search_users(query, page, page_size).await
    }
}
