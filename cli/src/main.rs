#![allow(clippy::exit)]

use anyhow::Result;
use clap::Parser as _;
use sedir_cli::cli::{Cli, Commands};
use sedir_cli::commands::{generate_completions, run_list, run_search};
use sedir_cli::context::resolve_config;
use sedir_cli::output::Output;
use sedir_cli::timing;

#[tokio::main]
async fn main() {
    // `.env` first so clap's `env` fallbacks see it.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    if let Err(err) = run(cli).await {
        Output::stderr().error(format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        site,
        api_key,
        ..
    } = cli;

    match command {
        Commands::List { page } => {
            let config = resolve_config(site.as_deref(), api_key, page.page_size)?;
            run_list(config, page.page, page.json).await
        }
        Commands::Search { query, page } => {
            let config = resolve_config(site.as_deref(), api_key, page.page_size)?;
            run_search(config, &query, page.page, page.json).await
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}
