//! `tradedesk status`

use anyhow::Result;
use tracing::instrument;
use tradedesk_business::{ApiAvailability, BusinessConfig, check_api_status};

use super::CommandStatus;
use crate::output::Output;

#[instrument(skip_all, name = "status")]
pub async fn run_status(config: BusinessConfig) -> Result<CommandStatus> {
    let out = Output::new();
    let status = check_api_status(&config).await;
    let checked_at = status.checked_at().format("%Y-%m-%d %H:%M:%S UTC");

    match status.api_availability() {
        ApiAvailability::Available { message } => {
            out.success(format!("API available at {}", config.api_url()));
            if let Some(message) = message {
                out.labeled_indent("Message", message, 2);
            }
            out.labeled_indent("Checked", checked_at, 2);
            Ok(CommandStatus::Success)
        }
        ApiAvailability::Unavailable(reason) => {
            out.error(format!("API unavailable at {}: {reason}", config.api_url()));
            out.labeled_indent("Checked", checked_at, 2);
            Ok(CommandStatus::Failure)
        }
    }
}
