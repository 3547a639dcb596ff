//! Pages rendered by route:
//! - `search_page`: search bar and user list
//! - `details_page`: the selected user's profile

mod details_page;
mod search_page;

pub use details_page::details_page;
pub use search_page::search_page;
