//! `tradedesk resources`

use tabled::settings::Style;
use tabled::{Table, Tabled};
use tradedesk_business::resources;

use crate::output::Output;

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "Resource")]
    key: &'static str,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Fields (* = required)")]
    fields: String,
}

pub fn print_resources() {
    let out = Output::new();
    let rows: Vec<ResourceRow> = resources::all()
        .iter()
        .map(|r| ResourceRow {
            key: r.key,
            path: format!("/{}/", r.path),
            fields: r
                .fields
                .iter()
                .map(|f| {
                    if f.required {
                        format!("{}*", f.name)
                    } else {
                        f.name.to_owned()
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    out.print(table.to_string());
}
