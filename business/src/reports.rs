//! Aggregate reports served under `/reportes/`.
//!
//! Each report is a flat JSON array. Rows are turned into a table plus one
//! numeric series for charting.

use serde_json::{Map, Value};

use crate::BusinessConfig;
use crate::api;
use crate::error::ApiResult;
use crate::record::scalar_text;

pub const DEFAULT_TOP_LIMIT: u32 = 5;
pub const NO_DATA: &str = "No data available.";
const LABEL_FALLBACK: &str = "N/D";
const VALUE_PLACEHOLDER: &str = "-";

type Row = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ByStatus,
    TopProducts,
    Revenue,
}

impl ReportKind {
    pub const ALL: [Self; 3] = [Self::ByStatus, Self::TopProducts, Self::Revenue];

    pub fn title(self) -> &'static str {
        match self {
            Self::ByStatus => "Operations by status",
            Self::TopProducts => "Top exported products",
            Self::Revenue => "Revenue by month",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::ByStatus => "reportes/operaciones-por-estado",
            Self::TopProducts => "reportes/top-productos-exportados",
            Self::Revenue => "reportes/ingresos-por-mes",
        }
    }

    fn label_header(self) -> &'static str {
        match self {
            Self::ByStatus => "Status",
            Self::TopProducts => "Product",
            Self::Revenue => "Month",
        }
    }

    /// Keys tried in order for the row label.
    fn label_keys(self) -> &'static [&'static str] {
        match self {
            Self::ByStatus => &["estado"],
            Self::TopProducts => &["producto", "nombre_producto"],
            Self::Revenue => &["mes", "periodo"],
        }
    }

    /// `(header, key)` for every value column.
    fn value_columns(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::ByStatus => &[
                ("Operations", "cantidad_operaciones"),
                ("Total cost", "costo_total"),
            ],
            Self::TopProducts => &[("Exported quantity", "cantidad_exportada")],
            Self::Revenue => &[("Revenue", "ingresos")],
        }
    }

    fn series_key(self) -> &'static str {
        match self {
            Self::ByStatus => "cantidad_operaciones",
            Self::TopProducts => "cantidad_exportada",
            Self::Revenue => "ingresos",
        }
    }
}

/// Query parameters shared by the reports; each report reads what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportParams {
    pub limit: u32,
    pub year: i32,
}

impl ReportParams {
    fn query(self, kind: ReportKind) -> Vec<(&'static str, String)> {
        match kind {
            ReportKind::ByStatus => Vec::new(),
            ReportKind::TopProducts => vec![("limit", self.limit.to_string())],
            ReportKind::Revenue => vec![("anio", self.year.to_string())],
        }
    }
}

impl Default for ReportParams {
    fn default() -> Self {
        use chrono::Datelike as _;
        Self {
            limit: DEFAULT_TOP_LIMIT,
            year: chrono::Local::now().year(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// `(label, value)` pairs for the chart, in row order.
    pub series: Vec<(String, f64)>,
    pub empty_message: Option<&'static str>,
}

impl ReportTable {
    pub fn from_rows(kind: ReportKind, data: &[Row]) -> Self {
        let headers = std::iter::once(kind.label_header())
            .chain(kind.value_columns().iter().map(|(header, _)| *header))
            .collect();

        let rows = data
            .iter()
            .map(|row| {
                std::iter::once(label(kind, row))
                    .chain(kind.value_columns().iter().map(|(_, key)| value_text(row, key)))
                    .collect()
            })
            .collect();

        let series = data
            .iter()
            .map(|row| {
                let value = row.get(kind.series_key()).and_then(Value::as_f64).unwrap_or(0.0);
                (label(kind, row), value)
            })
            .collect();

        Self {
            title: kind.title(),
            headers,
            rows,
            series,
            empty_message: data.is_empty().then_some(NO_DATA),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// First present, non-empty label key, else `N/D`.
fn label(kind: ReportKind, row: &Row) -> String {
    kind.label_keys()
        .iter()
        .filter_map(|key| row.get(*key))
        .map(scalar_text)
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| LABEL_FALLBACK.to_owned())
}

fn value_text(row: &Row, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => VALUE_PLACEHOLDER.to_owned(),
        Some(value) => scalar_text(value),
    }
}

pub async fn fetch_report(
    config: &BusinessConfig,
    kind: ReportKind,
    params: ReportParams,
) -> ApiResult<ReportTable> {
    let data: Vec<Row> = api::get_json(config, kind.endpoint(), &params.query(kind)).await?;
    Ok(ReportTable::from_rows(kind, &data))
}
