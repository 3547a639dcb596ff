//! Command line client for the StackExchange user directory.

pub mod cli;
pub mod commands;
pub mod context;
pub mod output;
pub mod timing;
