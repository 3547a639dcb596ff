//! Data layer and screen logic for the StackExchange user directory.
//!
//! - [`api`]: wire DTOs and the HTTP client interface
//! - [`repository`]: [`UserDirectoryClient`], routing list/filter queries and
//!   mapping DTOs to [`User`]
//! - [`usecase`]: thin forwarding wrappers used by commands
//! - [`search`] / [`navigation`]: per-screen states and the commands that update them

pub mod api;
pub mod config;
pub mod directory_state;
pub mod format;
pub mod http;
pub mod mapper;
pub mod model;
pub mod navigation;
pub mod repository;
pub mod search;
pub mod setup;
pub mod usecase;

#[cfg(test)]
mod test_utils;

pub use api::{ApiError, HttpStackExchangeApi, StackExchangeApi, UsersQuery, UsersResponse};
pub use config::{BusinessConfig, ConfigError};
pub use directory_state::DirectoryState;
pub use model::{BadgeCounts, ReputationChanges, User};
pub use navigation::{Route, UserDetailsState};
pub use repository::{DirectoryError, UserDirectoryClient};
pub use search::{FetchAction, LoadUsersCommand, SearchState, SearchUsersCommand};
pub use setup::{build_state_ctx, build_state_ctx_with_api};
pub use usecase::{GetUsersUseCase, SearchUsersUseCase};
