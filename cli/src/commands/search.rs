use anyhow::Result;
use sedir_business::BusinessConfig;
use tracing::instrument;

use super::print_users;
use crate::context::{build_state_ctx, fetch_users};

/// A blank `query` behaves like `list`.
#[instrument(skip_all, name = "search", fields(query = %query, page = page, site = %config.site))]
pub async fn run_search(config: BusinessConfig, query: &str, page: u32, json: bool) -> Result<()> {
    let mut ctx = build_state_ctx(config)?;
    let users = fetch_users(&mut ctx, Some(query), page).await;
    ctx.shutdown().await;

    print_users(&users?, page, json)
}
