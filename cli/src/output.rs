//! Terminal output: styled messages, tables and text bar charts.
//!
//! [`TerminalNotifier`] and [`TablePrinter`] are the terminal side of the
//! controller's notification and table collaborators.

use console::{Term, style};
use std::fmt::Display;
use tabled::builder::Builder;
use tabled::settings::Style;
use tradedesk_business::{Notifier, RenderedTable, ReportTable, TableView};

const BAR: &str = "█";

/// Terminal output helper for consistent styled output.
#[derive(Debug, Clone)]
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn success(&self, message: impl Display) {
        self.line(format!("{} {}", style("✓").green().bold(), message));
    }

    pub fn error(&self, message: impl Display) {
        self.line(format!("{} {}", style("✗").red().bold(), message));
    }

    pub fn info(&self, message: impl Display) {
        self.line(format!("{} {}", style("ℹ").blue().bold(), message));
    }

    pub fn print(&self, message: impl Display) {
        self.line(message.to_string());
    }

    pub fn newline(&self) {
        self.line(String::new());
    }

    pub fn header(&self, message: impl Display) {
        self.line(style(message).bold().cyan().to_string());
    }

    pub fn dim(&self, message: impl Display) {
        self.line(style(message).dim().to_string());
    }

    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        self.line(format!("{spaces}{}: {}", style(label).dim(), value));
    }

    pub fn count(&self, label: impl Display, count: usize) {
        self.line(format!(
            "{}: {}",
            style(label).dim(),
            style(count).cyan().bold()
        ));
    }

    fn line(&self, text: String) {
        drop(self.term.write_line(&text));
    }
}

/// Shows controller notifications on the terminal.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    out: Output,
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        self.out.info(message);
    }
}

/// Prints rendered tables, either as soon as they are shown or on demand.
#[derive(Debug, Default)]
pub struct TablePrinter {
    out: Output,
    deferred: bool,
    last: Option<RenderedTable>,
}

impl TablePrinter {
    /// Prints every table as soon as the controller shows it.
    pub fn immediate() -> Self {
        Self::default()
    }

    /// Keeps only the last table until [`Self::print_last`].
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    pub fn print_last(&self) {
        if let Some(table) = &self.last {
            self.print(table);
        }
    }

    fn print(&self, table: &RenderedTable) {
        self.out.print(format_table(table));
        if !table.is_empty() {
            self.out.count("Rows", table.rows.len());
        }
    }
}

impl TableView for TablePrinter {
    fn show(&mut self, table: &RenderedTable) {
        if !self.deferred {
            self.print(table);
        }
        self.last = Some(table.clone());
    }
}

fn styled_table(headers: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| (*h).to_owned()));
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// A rounded table; an empty one carries its explanatory message in the first column.
pub fn format_table(table: &RenderedTable) -> String {
    match table.empty_message {
        Some(message) if table.is_empty() => {
            styled_table(&table.headers, [explanatory_row(message, table.headers.len())])
        }
        _ => styled_table(&table.headers, table.rows.iter().map(|r| r.cells.clone())),
    }
}

pub fn format_report(report: &ReportTable) -> String {
    match report.empty_message {
        Some(message) if report.is_empty() => {
            styled_table(&report.headers, [explanatory_row(message, report.headers.len())])
        }
        _ => styled_table(&report.headers, report.rows.iter().cloned()),
    }
}

fn explanatory_row(message: &str, width: usize) -> Vec<String> {
    let mut row = vec![String::new(); width.max(1)];
    row[0] = message.to_owned();
    row
}

/// Horizontal bars scaled to the largest value; one line per entry.
pub fn bar_chart(series: &[(String, f64)], width: usize) -> Vec<String> {
    let label_width = series
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    series
        .iter()
        .map(|(label, value)| {
            let len = if max > 0.0 && *value > 0.0 {
                ((value / max) * width as f64).round().max(1.0) as usize
            } else {
                0
            };
            format!(
                "{label:<label_width$} │ {} {}",
                BAR.repeat(len),
                format_number(*value)
            )
        })
        .collect()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradedesk_business::render::render;
    use tradedesk_business::resources::COUNTRIES;
    use tradedesk_business::Record;

    #[test]
    fn test_format_table_contains_headers_and_cells() {
        let records: Vec<Record> = serde_json::from_value(serde_json::json!([
            { "id": 1, "nombre": "Chile", "codigo_iso": "CL" }
        ]))
        .expect("records");
        let text = format_table(&render(&COUNTRIES, &records));
        assert!(text.contains("ISO code"));
        assert!(text.contains("Chile"));
        assert!(text.contains("╭"));
    }

    #[test]
    fn test_format_empty_table_shows_message() {
        let text = format_table(&render(&COUNTRIES, &[]));
        assert!(text.contains(COUNTRIES.empty_message));
    }

    #[test]
    fn test_deferred_printer_keeps_only_last_table() {
        let records: Vec<Record> = serde_json::from_value(serde_json::json!([
            { "id": 1, "nombre": "Chile" },
            { "id": 2, "nombre": "Peru" }
        ]))
        .expect("records");
        let full = render(&COUNTRIES, &records);
        let filtered = render(&COUNTRIES, &records[1..]);

        let mut printer = TablePrinter::deferred();
        assert!(printer.last.is_none());
        printer.show(&full);
        printer.show(&filtered);

        assert_eq!(printer.last, Some(filtered));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let lines = bar_chart(
            &[("pendiente".to_owned(), 2.0), ("completada".to_owned(), 4.0)],
            10,
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches(BAR).count(), 5);
        assert_eq!(lines[1].matches(BAR).count(), 10);
        assert!(lines[0].starts_with("pendiente  │"));
        assert!(lines[1].ends_with(" 4"));
    }

    #[test]
    fn test_bar_chart_zero_values_have_no_bar() {
        let lines = bar_chart(&[("03".to_owned(), 0.0)], 10);
        assert_eq!(lines, vec!["03 │  0".to_owned()]);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(1200.5), "1200.50");
    }
}
