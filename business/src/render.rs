//! View-independent table rendering and the live filter.

use crate::record::{Record, RecordId};
use crate::resource::ResourceConfig;

/// Action a view can bind to a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(RecordId),
    Delete(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: RecordId,
    pub cells: Vec<String>,
}

impl RenderedRow {
    /// The actions available on this row, parameterized by its id.
    pub fn actions(&self) -> [RowAction; 2] {
        [RowAction::Edit(self.id), RowAction::Delete(self.id)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RenderedRow>,
    /// Set instead of rows when there is nothing to show.
    pub empty_message: Option<&'static str>,
}

impl RenderedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.id).collect()
    }
}

/// One row per record, in input order. Missing values use each column's placeholder.
pub fn render(config: &ResourceConfig, records: &[Record]) -> RenderedTable {
    let rows: Vec<RenderedRow> = records
        .iter()
        .map(|record| RenderedRow {
            id: record.id(),
            cells: config.columns.iter().map(|c| c.cell(record)).collect(),
        })
        .collect();

    RenderedTable {
        headers: config.headers(),
        empty_message: rows.is_empty().then_some(config.empty_message),
        rows,
    }
}

/// Records whose searchable fields contain `query`, ignoring case.
/// An empty query keeps everything.
pub fn filter_records(config: &ResourceConfig, records: &[Record], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_uppercase();
    records
        .iter()
        .filter(|record| config.matches(record, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::COUNTRIES;
    use serde_json::json;

    fn countries() -> Vec<Record> {
        serde_json::from_value(json!([
            { "id": 1, "nombre": "Chile", "codigo_iso": "CL", "region": null },
            { "id": 2, "nombre": "Peru", "codigo_iso": "PE", "region": "Andes" },
        ]))
        .unwrap()
    }

    #[test]
    fn test_render_one_row_per_record_in_order() {
        let records = countries();
        let table = render(&COUNTRIES, &records);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.ids(), vec![RecordId(1), RecordId(2)]);
        assert_eq!(table.rows[0].cells[1], "Chile");
        assert_eq!(table.empty_message, None);
    }

    #[test]
    fn test_render_empty_has_explanatory_row() {
        let table = render(&COUNTRIES, &[]);
        assert!(table.is_empty());
        assert_eq!(table.empty_message, Some(COUNTRIES.empty_message));
        assert_eq!(table.headers, COUNTRIES.headers());
    }

    #[test]
    fn test_row_actions_carry_the_row_id() {
        let table = render(&COUNTRIES, &countries());
        assert_eq!(
            table.rows[1].actions(),
            [RowAction::Edit(RecordId(2)), RowAction::Delete(RecordId(2))]
        );
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let records = countries();
        assert_eq!(filter_records(&COUNTRIES, &records, ""), records);
    }

    #[test]
    fn test_filter_substring_scenario() {
        let filtered = filter_records(&COUNTRIES, &countries(), "per");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), RecordId(2));
        assert_eq!(filtered[0].text("nombre").as_deref(), Some("Peru"));
    }

    #[test]
    fn test_filter_ignores_case() {
        let records = countries();
        for query in ["cl", "CL", "Cl", "chILE"] {
            let filtered = filter_records(&COUNTRIES, &records, query);
            assert_eq!(
                filtered.iter().map(Record::id).collect::<Vec<_>>(),
                vec![RecordId(1)],
                "query {query:?}"
            );
        }
    }

    #[test]
    fn test_filter_folds_length_changing_case() {
        let records: Vec<Record> = serde_json::from_value(json!([
            { "id": 7, "nombre": "Straße", "codigo_iso": null },
            { "id": 8, "nombre": "Peru", "codigo_iso": "PE" },
        ]))
        .unwrap();

        for query in ["ß", "ss", "SS", "STRASSE", "straße"] {
            let filtered = filter_records(&COUNTRIES, &records, query);
            assert_eq!(
                filtered.iter().map(Record::id).collect::<Vec<_>>(),
                vec![RecordId(7)],
                "query {query:?}"
            );
        }
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_records(&COUNTRIES, &countries(), "zz").is_empty());
    }
}
