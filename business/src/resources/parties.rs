use crate::resource::{Coercion, ColumnSpec, FieldSpec, ResourceConfig};

const PARTY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("nombre", "Name", Coercion::Text).required(),
    FieldSpec::new("tipo", "Type", Coercion::Text),
    FieldSpec::new("email", "Email", Coercion::Text),
    FieldSpec::new("telefono", "Phone", Coercion::Text),
    FieldSpec::new("pais_id", "Country ID", Coercion::Integer),
];

const PARTY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::id(),
    ColumnSpec::field("Name", "nombre"),
    ColumnSpec::field("Type", "tipo"),
    ColumnSpec::field("Email", "email"),
    ColumnSpec::field("Phone", "telefono"),
    ColumnSpec::field("Country", "pais_id").or("-"),
];

pub static CLIENTS: ResourceConfig = ResourceConfig {
    key: "clients",
    path: "clientes",
    singular: "client",
    plural: "clients",
    fields: PARTY_FIELDS,
    columns: PARTY_COLUMNS,
    searchable: &["nombre", "email"],
    rules: &[],
    empty_message: "No clients registered.",
    delete_prompt: "Are you sure you want to delete this client?",
    save_failure_hint: None,
};

pub static SUPPLIERS: ResourceConfig = ResourceConfig {
    key: "suppliers",
    path: "proveedores",
    singular: "supplier",
    plural: "suppliers",
    fields: PARTY_FIELDS,
    columns: PARTY_COLUMNS,
    searchable: &["nombre", "email"],
    rules: &[],
    empty_message: "No suppliers registered.",
    delete_prompt: "Are you sure you want to delete this supplier?",
    save_failure_hint: None,
};
