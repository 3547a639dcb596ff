use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sedir_business::config::MAX_PAGE_SIZE;

#[derive(Debug, Parser)]
#[command(name = "sedir")]
#[command(about = "Browse and search StackExchange users", long_about = None)]
#[command(version = sedir_utils::version_info::build_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// StackExchange site to query (e.g. stackoverflow, superuser)
    #[arg(long, global = true, env = "SEDIR_SITE")]
    pub site: Option<String>,

    /// API key for a higher request quota
    #[arg(long, global = true, env = "SEDIR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, short = 'p', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Users per page (1-100)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)))]
    pub page_size: Option<u32>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List users sorted by name
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Search users whose display name contains QUERY
    Search {
        /// Name fragment; blank lists everyone
        query: String,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
