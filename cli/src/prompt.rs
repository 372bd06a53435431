//! Yes/no confirmation on the terminal.

use std::io::IsTerminal as _;

use inquire::Confirm;
use tracing::warn;
use tradedesk_business::ConfirmPrompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Ask with an inquire prompt; decline when stdin is not a terminal.
    Ask,
    /// `--yes`: accept without asking.
    AssumeYes,
}

#[derive(Debug)]
pub struct TerminalConfirm {
    mode: ConfirmMode,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            mode: if assume_yes {
                ConfirmMode::AssumeYes
            } else {
                ConfirmMode::Ask
            },
        }
    }
}

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        if self.mode == ConfirmMode::AssumeYes {
            return true;
        }
        if !std::io::stdin().is_terminal() {
            warn!("stdin is not a terminal; declining \"{question}\" (pass --yes to confirm)");
            return false;
        }
        match Confirm::new(question).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(err) => {
                warn!("Confirmation prompt failed: {err}");
                false
            }
        }
    }
}
