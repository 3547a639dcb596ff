//! Version information populated at build time.

/// Build timestamp in RFC3339 format.
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a git checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// `{version}+{commit}`, e.g. `0.1.0+1a2b3c4`.
pub fn format_version() -> String {
    format!("{}+{}", build_version(), build_commit())
}

/// The date part (`YYYY-MM-DD`) of the build timestamp.
pub fn build_day() -> &'static str {
    let date = build_date();
    if date.len() >= 10 && date.is_ascii() {
        &date[..10]
    } else {
        date
    }
}
