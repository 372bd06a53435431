use crate::resource::{Coercion, ColumnSpec, FieldSpec, ResourceConfig};

pub static COUNTRIES: ResourceConfig = ResourceConfig {
    key: "countries",
    path: "paises",
    singular: "country",
    plural: "countries",
    fields: &[
        FieldSpec::new("nombre", "Name", Coercion::Text).required(),
        FieldSpec::new("codigo_iso", "ISO code", Coercion::Upper),
        FieldSpec::new("region", "Region", Coercion::Text),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Name", "nombre"),
        ColumnSpec::field("ISO code", "codigo_iso"),
        ColumnSpec::field("Region", "region"),
    ],
    searchable: &["nombre", "codigo_iso"],
    rules: &[],
    empty_message: "No countries registered.",
    delete_prompt: "Delete this country?",
    save_failure_hint: None,
};

pub static PORTS: ResourceConfig = ResourceConfig {
    key: "ports",
    path: "puertos",
    singular: "port",
    plural: "ports",
    fields: &[
        FieldSpec::new("nombre", "Name", Coercion::Text).required(),
        FieldSpec::new("tipo", "Type", Coercion::Text),
        FieldSpec::new("pais_id", "Country ID", Coercion::Integer).required(),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Name", "nombre"),
        ColumnSpec::field("Type", "tipo"),
        ColumnSpec::field("Country", "pais_id").or("-"),
    ],
    searchable: &["nombre", "tipo", "pais_id"],
    rules: &[],
    empty_message: "No ports registered.",
    delete_prompt: "Are you sure you want to delete this port?",
    save_failure_hint: None,
};
