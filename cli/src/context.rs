//! State context setup and the fetch-and-wait flow shared by commands.

use anyhow::{Context as _, Result, anyhow};
use sedir_business::search::{self, FetchAction};
use sedir_business::{BusinessConfig, SearchState, User};
use sedir_states::StateCtx;
use tracing::{debug, instrument};

/// Environment configuration with command line overrides applied on top.
pub fn resolve_config(
    site: Option<&str>,
    api_key: Option<String>,
    page_size: Option<u32>,
) -> Result<BusinessConfig> {
    let mut config = BusinessConfig::from_env().context("Failed to read configuration")?;
    if let Some(site) = site.filter(|s| !s.trim().is_empty()) {
        config = config.with_site(site.trim());
    }
    if api_key.is_some() {
        config = config.with_api_key(api_key);
    }
    if let Some(page_size) = page_size {
        config = config.with_page_size(page_size);
    }
    debug!(
        base_url = %config.api_base_url,
        site = %config.site,
        page_size = config.page_size(),
        "resolved configuration"
    );
    Ok(config)
}

pub fn build_state_ctx(config: BusinessConfig) -> Result<StateCtx> {
    sedir_business::build_state_ctx(config).context("Failed to create the HTTP client")
}

/// Dispatches one page fetch and waits for it. `None` lists all users.
#[instrument(skip(ctx), name = "fetch")]
pub async fn fetch_users(ctx: &mut StateCtx, query: Option<&str>, page: u32) -> Result<Vec<User>> {
    let action = match query {
        Some(query) => {
            search::set_query(ctx, query);
            FetchAction::Search
        }
        None => FetchAction::LoadInitial,
    };
    search::fetch_page(ctx, action, page);
    ctx.settle().await;

    let state = ctx
        .state::<SearchState>()
        .context("Search state is not registered")?;
    match &state.error_message {
        Some(message) => Err(anyhow!("{message}")),
        None => Ok(state.users.clone()),
    }
}
