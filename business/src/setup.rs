//! Builds a [`StateCtx`] holding every state the search and details screens use.

use std::sync::Arc;

use sedir_states::StateCtx;

use crate::api::{ApiError, HttpStackExchangeApi, StackExchangeApi};
use crate::directory_state::DirectoryState;
use crate::navigation::{Route, UserDetailsState};
use crate::search::SearchState;
use crate::BusinessConfig;

/// Context backed by the real HTTP API.
pub fn build_state_ctx(config: BusinessConfig) -> Result<StateCtx, ApiError> {
    let api = HttpStackExchangeApi::new(&config)?;
    Ok(build_state_ctx_with_api(config, Arc::new(api)))
}

pub fn build_state_ctx_with_api(
    config: BusinessConfig,
    api: Arc<dyn StackExchangeApi>,
) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(DirectoryState::new(api, &config));
    ctx.add_state(config);

    ctx.add_state(SearchState::default());
    ctx.add_state(Route::default());
    ctx.add_state(UserDetailsState::default());

    ctx
}
