#![allow(clippy::exit)]

use anyhow::Result;
use clap::Parser as _;
use tradedesk_cli::cli::{Cli, Commands};
use tradedesk_cli::commands::{
    CommandStatus, generate_completions, print_resources, run_config, run_create, run_delete,
    run_edit, run_list, run_reports, run_shell, run_show, run_status,
};
use tradedesk_cli::config::Config;
use tradedesk_cli::timing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);

    let file_config = Config::load_or_default();
    let api_url = cli.api_url.as_deref();
    let config = file_config.business_config(api_url);
    tracing::debug!(api_url = config.api_url(), "resolved API base URL");

    let status = match cli.command {
        Commands::Resources => {
            print_resources();
            CommandStatus::Success
        }
        Commands::List { resource, filter } => run_list(config, resource, filter).await?,
        Commands::Show { resource, id } => run_show(config, resource, id).await?,
        Commands::Create { resource, set } => run_create(config, resource, &set).await?,
        Commands::Edit { resource, id, set } => run_edit(config, resource, id, &set).await?,
        Commands::Delete { resource, id, yes } => run_delete(config, resource, id, yes).await?,
        Commands::Shell { resource } => run_shell(config, resource).await?,
        Commands::Reports { limit, year } => run_reports(config, limit, year).await?,
        Commands::Status => run_status(config).await?,
        Commands::Config { action } => run_config(action, file_config, api_url)?,
        Commands::Completions { shell } => {
            generate_completions(shell);
            CommandStatus::Success
        }
    };

    if !status.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
