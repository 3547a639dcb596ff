use anyhow::Result;
use sedir_business::BusinessConfig;
use tracing::instrument;

use super::print_users;
use crate::context::{build_state_ctx, fetch_users};

#[instrument(skip_all, name = "list", fields(page = page, site = %config.site))]
pub async fn run_list(config: BusinessConfig, page: u32, json: bool) -> Result<()> {
    let mut ctx = build_state_ctx(config)?;
    let users = fetch_users(&mut ctx, None, page).await;
    ctx.shutdown().await;

    print_users(&users?, page, json)
}
