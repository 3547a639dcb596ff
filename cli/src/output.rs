//! Styled terminal output and the users table.

use std::fmt::Display;

use console::{Term, style};
use sedir_business::User;
use sedir_business::format::group_thousands;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Errors go to stderr so `--json` output stays parseable.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print a total summary line.
    pub fn total(&self, count: usize, page: u32) {
        drop(self.term.write_line(&format!(
            "\n{}: {} (page {page})",
            style("Total").bold(),
            style(format!("{count} user(s)")).cyan()
        )));
    }
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Reputation")]
    reputation: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Member since")]
    member_since: String,
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}

/// Rounded table of users in server order.
pub fn users_table(users: &[User]) -> String {
    let rows: Vec<UserRow> = users
        .iter()
        .map(|user| UserRow {
            id: user.id,
            name: truncate_str(&user.username, 28),
            reputation: group_thousands(user.reputation),
            location: user
                .location
                .as_deref()
                .map(|l| truncate_str(l, 24))
                .unwrap_or_default(),
            member_since: user.creation_date.clone().unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}
