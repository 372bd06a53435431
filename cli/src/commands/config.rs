//! `tradedesk config`

use anyhow::Result;

use super::CommandStatus;
use crate::cli::ConfigAction;
use crate::config::Config;
use crate::output::Output;

pub fn run_config(
    action: ConfigAction,
    config: Config,
    flag: Option<&str>,
) -> Result<CommandStatus> {
    let out = Output::new();
    match action {
        ConfigAction::Show => {
            let (url, source) = config.resolve_base_url(flag);
            out.labeled_indent("Config file", Config::config_path()?.display(), 0);
            out.labeled_indent("API URL", url, 0);
            out.labeled_indent("Source", source, 0);
        }
        ConfigAction::SetUrl { url } => {
            let mut config = config;
            config.set_base_url(&url);
            let path = config.save()?;
            out.success(format!("API URL saved to {}", path.display()));
        }
    }
    Ok(CommandStatus::Success)
}
