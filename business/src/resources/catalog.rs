use crate::record::Payload;
use crate::resource::{Coercion, ColumnSpec, FieldSpec, ResourceConfig, payload_number};

pub static CATEGORIES: ResourceConfig = ResourceConfig {
    key: "categories",
    path: "categorias-producto",
    singular: "category",
    plural: "categories",
    fields: &[
        FieldSpec::new("nombre", "Name", Coercion::Text).required(),
        FieldSpec::new("descripcion", "Description", Coercion::Text),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Name", "nombre"),
        ColumnSpec::field("Description", "descripcion"),
    ],
    searchable: &["nombre"],
    rules: &[],
    empty_message: "No categories registered.",
    delete_prompt: "Are you sure you want to delete this category?",
    save_failure_hint: None,
};

fn positive_price(payload: &Payload) -> Result<(), String> {
    match payload_number(payload, "precio_referencia") {
        Some(price) if price <= 0.0 => Err("Reference price must be greater than 0.".to_owned()),
        _ => Ok(()),
    }
}

fn non_negative_stock(payload: &Payload) -> Result<(), String> {
    match payload_number(payload, "stock_disponible") {
        Some(stock) if stock < 0.0 => Err("Available stock cannot be negative.".to_owned()),
        _ => Ok(()),
    }
}

pub static PRODUCTS: ResourceConfig = ResourceConfig {
    key: "products",
    path: "productos",
    singular: "product",
    plural: "products",
    fields: &[
        FieldSpec::new("nombre", "Name", Coercion::Text).required(),
        FieldSpec::new("tipo", "Type", Coercion::Text).required(),
        FieldSpec::new("unidad_medida", "Unit", Coercion::Text).default_value("kg"),
        FieldSpec::new("precio_referencia", "Reference price", Coercion::Number).required(),
        FieldSpec::new("stock_disponible", "Available stock", Coercion::Number).default_value("0"),
        FieldSpec::new("categoria_id", "Category ID", Coercion::Integer),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Name", "nombre"),
        ColumnSpec::field("Type", "tipo"),
        ColumnSpec::field("Unit", "unidad_medida"),
        ColumnSpec::field("Reference price", "precio_referencia"),
        ColumnSpec::field("Stock", "stock_disponible"),
        ColumnSpec::field("Category", "categoria_id").or("-"),
    ],
    searchable: &["nombre"],
    rules: &[positive_price, non_negative_stock],
    empty_message: "No products registered.",
    delete_prompt: "Are you sure you want to delete this product?",
    save_failure_hint: None,
};

pub static TRANSPORT: ResourceConfig = ResourceConfig {
    key: "transport",
    path: "medios-transporte",
    singular: "transport mean",
    plural: "transport means",
    fields: &[
        FieldSpec::new("tipo", "Type", Coercion::Text).required(),
        FieldSpec::new("empresa", "Company", Coercion::Text),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Type", "tipo"),
        ColumnSpec::field("Company", "empresa"),
    ],
    searchable: &["tipo", "empresa"],
    rules: &[],
    empty_message: "No transport means registered.",
    delete_prompt: "Are you sure you want to delete this transport mean?",
    save_failure_hint: None,
};
