use std::sync::Arc;

use sedir_states::State;

use crate::api::{StackExchangeApi, UsersQuery};
use crate::repository::UserDirectoryClient;
use crate::usecase::{GetUsersUseCase, SearchUsersUseCase};
use crate::BusinessConfig;

/// Makes the directory client reachable from command snapshots.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    inner: Arc<UserDirectoryClient>,
}

impl DirectoryState {
    pub fn new(api: Arc<dyn StackExchangeApi>, config: &BusinessConfig) -> Self {
        Self {
            inner: Arc::new(UserDirectoryClient::new(
                api,
                UsersQuery::from_config(config),
            )),
        }
    }

    pub fn client(&self) -> Arc<UserDirectoryClient> {
        self.inner.clone()
    }

    pub fn get_users(&self) -> GetUsersUseCase {
        GetUsersUseCase::new(self.client())
    }

    pub fn search_users(&self) -> SearchUsersUseCase {
        SearchUsersUseCase::new(self.client())
    }
}

impl State for DirectoryState {}
