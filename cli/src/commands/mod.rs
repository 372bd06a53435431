//! Command implementations for the Tradedesk CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod completions;
pub mod config;
pub mod records;
pub mod reports;
pub mod resources;
pub mod shell;
pub mod status;

pub use completions::generate_completions;
pub use config::run_config;
pub use records::{run_create, run_delete, run_edit, run_list, run_show};
pub use reports::run_reports;
pub use resources::print_resources;
pub use shell::run_shell;
pub use status::run_status;

use tradedesk_business::{ActionOutcome, BusinessConfig, ResourceConfig, ResourceController};

use crate::output::{TablePrinter, TerminalNotifier};
use crate::prompt::TerminalConfirm;

pub type CliController = ResourceController<TerminalNotifier, TerminalConfirm, TablePrinter>;

pub fn build_controller(
    config: BusinessConfig,
    resource: &'static ResourceConfig,
    confirm: TerminalConfirm,
    view: TablePrinter,
) -> CliController {
    ResourceController::new(config, resource, TerminalNotifier::default(), confirm, view)
}

/// How the process should exit after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

impl CommandStatus {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<ActionOutcome> for CommandStatus {
    /// A declined delete is the user's choice, not an error.
    fn from(outcome: ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::Done | ActionOutcome::Declined => Self::Success,
            ActionOutcome::Invalid | ActionOutcome::Failed => Self::Failure,
        }
    }
}
