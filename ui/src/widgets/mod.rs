mod avatar;
mod error_banner;
mod reputation_badge;
mod user_row;
mod version_label;

pub use avatar::avatar;
pub use error_banner::{BannerAction, error_banner};
pub use reputation_badge::reputation_badge;
pub use user_row::user_row;
pub use version_label::version_label;
