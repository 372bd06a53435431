//! `tradedesk reports`

use anyhow::Result;
use tracing::{instrument, warn};
use tradedesk_business::{BusinessConfig, ReportKind, ReportParams, fetch_report};

use super::CommandStatus;
use crate::output::{Output, bar_chart, format_report};

const CHART_WIDTH: usize = 40;

#[instrument(skip_all, name = "reports", fields(limit, year = ?year))]
pub async fn run_reports(
    config: BusinessConfig,
    limit: u32,
    year: Option<i32>,
) -> Result<CommandStatus> {
    let out = Output::new();
    let defaults = ReportParams::default();
    let params = ReportParams {
        limit,
        year: year.unwrap_or(defaults.year),
    };

    let mut status = CommandStatus::Success;
    for kind in ReportKind::ALL {
        out.newline();
        match kind {
            ReportKind::Revenue => out.header(format!("{} ({})", kind.title(), params.year)),
            _ => out.header(kind.title()),
        }

        match fetch_report(&config, kind, params).await {
            Ok(report) => {
                out.print(format_report(&report));
                if !report.is_empty() {
                    for line in bar_chart(&report.series, CHART_WIDTH) {
                        out.print(line);
                    }
                }
            }
            Err(err) => {
                warn!("Loading report {:?} failed: {err}", kind);
                out.error(format!("Could not load the report: {err}"));
                status = CommandStatus::Failure;
            }
        }
    }
    Ok(status)
}
