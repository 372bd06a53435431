//! Capabilities the controller needs from whatever hosts it.

use crate::render::RenderedTable;

/// Shows a message to the user. Used for both confirmations and failures.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Asks a yes/no question and waits for the answer.
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Displays a rendered table, replacing whatever was shown before.
pub trait TableView {
    fn show(&mut self, table: &RenderedTable);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

impl<T: ConfirmPrompt + ?Sized> ConfirmPrompt for &mut T {
    fn confirm(&mut self, question: &str) -> bool {
        (**self).confirm(question)
    }
}

impl<T: TableView + ?Sized> TableView for &mut T {
    fn show(&mut self, table: &RenderedTable) {
        (**self).show(table);
    }
}

/// Answers every confirmation with the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}
