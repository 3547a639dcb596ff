//! Shared utilities for the sedir workspace.
//!
//! Holds build metadata used by both the desktop app and the CLI.

pub mod version_info;
