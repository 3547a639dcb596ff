//! Subcommand implementations.

pub mod completions;
pub mod list;
pub mod search;

pub use completions::generate_completions;
pub use list::run_list;
pub use search::run_search;

use anyhow::{Context as _, Result};
use sedir_business::User;

use crate::output::{Output, users_table};

/// Prints `users` as pretty JSON or as a table.
pub(crate) fn print_users(users: &[User], page: u32, json: bool) -> Result<()> {
    let out = Output::new();
    if json {
        let body = serde_json::to_string_pretty(users).context("Failed to encode users")?;
        out.print(body);
    } else if users.is_empty() {
        out.dim("No users found.");
    } else {
        out.print(users_table(users));
        out.total(users.len(), page);
    }
    Ok(())
}
