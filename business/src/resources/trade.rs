use crate::record::{Payload, Record};
use crate::resource::{
    Coercion, ColumnSpec, FieldSpec, ResourceConfig, payload_has, payload_number, payload_str,
};

pub const OPERATION_TYPES: &[&str] = &["importacion", "exportacion"];

fn party_matches_direction(payload: &Payload) -> Result<(), String> {
    match payload_str(payload, "tipo") {
        Some("exportacion") if !payload_has(payload, "cliente_id") => {
            Err("An export needs a client.".to_owned())
        }
        Some("importacion") if !payload_has(payload, "proveedor_id") => {
            Err("An import needs a supplier.".to_owned())
        }
        _ => Ok(()),
    }
}

fn port_has_country(payload: &Payload) -> Result<(), String> {
    for (port, country, message) in [
        ("puerto_origen_id", "pais_origen_id", "An origin port needs its origin country."),
        (
            "puerto_destino_id",
            "pais_destino_id",
            "A destination port needs its destination country.",
        ),
    ] {
        if payload_has(payload, port) && !payload_has(payload, country) {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

pub static OPERATIONS: ResourceConfig = ResourceConfig {
    key: "operations",
    path: "operaciones",
    singular: "operation",
    plural: "operations",
    fields: &[
        FieldSpec::new("tipo", "Type", Coercion::Choice(OPERATION_TYPES)).required(),
        FieldSpec::new("fecha", "Date", Coercion::Date).required(),
        FieldSpec::new("estado", "Status", Coercion::Text).default_value("pendiente"),
        FieldSpec::new("observaciones", "Notes", Coercion::Text),
        FieldSpec::new("cliente_id", "Client ID", Coercion::Integer),
        FieldSpec::new("proveedor_id", "Supplier ID", Coercion::Integer),
        FieldSpec::new("pais_origen_id", "Origin country ID", Coercion::Integer),
        FieldSpec::new("pais_destino_id", "Destination country ID", Coercion::Integer),
        FieldSpec::new("puerto_origen_id", "Origin port ID", Coercion::Integer),
        FieldSpec::new("puerto_destino_id", "Destination port ID", Coercion::Integer),
        FieldSpec::new("medio_transporte_id", "Transport mean ID", Coercion::Integer),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Type", "tipo"),
        ColumnSpec::field("Date", "fecha"),
        ColumnSpec::field("Status", "estado"),
        ColumnSpec::field("Client", "cliente_id").or("-"),
        ColumnSpec::field("Supplier", "proveedor_id").or("-"),
        ColumnSpec::pair("Origin", "pais_origen_id", "puerto_origen_id"),
        ColumnSpec::pair("Destination", "pais_destino_id", "puerto_destino_id"),
        ColumnSpec::field("Transport", "medio_transporte_id").or("-"),
        ColumnSpec::field("Total cost", "costo_total").or("0"),
    ],
    searchable: &["id", "tipo", "estado"],
    rules: &[party_matches_direction, port_has_country],
    empty_message: "No operations registered.",
    delete_prompt: "Are you sure you want to delete this operation?",
    save_failure_hint: None,
};

fn positive_amounts(payload: &Payload) -> Result<(), String> {
    let positive = |name| payload_number(payload, name).is_none_or(|v| v > 0.0);
    if positive("cantidad") && positive("precio_unitario") {
        Ok(())
    } else {
        Err("Quantity and unit price must be greater than 0.".to_owned())
    }
}

fn subtotal(record: &Record) -> Option<String> {
    let amount =
        record.number("cantidad").unwrap_or(0.0) * record.number("precio_unitario").unwrap_or(0.0);
    Some(format!("{amount:.2}"))
}

pub static DETAILS: ResourceConfig = ResourceConfig {
    key: "details",
    path: "detalles-operacion",
    singular: "operation detail",
    plural: "operation details",
    fields: &[
        FieldSpec::new("operacion_id", "Operation ID", Coercion::Integer).required(),
        FieldSpec::new("producto_id", "Product ID", Coercion::Integer).required(),
        FieldSpec::new("cantidad", "Quantity", Coercion::Number).required(),
        FieldSpec::new("precio_unitario", "Unit price", Coercion::Number).required(),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Operation", "operacion_id"),
        ColumnSpec::field("Product", "producto_id"),
        ColumnSpec::field("Quantity", "cantidad"),
        ColumnSpec::field("Unit price", "precio_unitario"),
        ColumnSpec::derived("Subtotal", subtotal),
    ],
    searchable: &["id", "operacion_id", "producto_id"],
    rules: &[positive_amounts],
    empty_message: "No operation details registered.",
    delete_prompt: "Delete this detail? The operation's total cost will be adjusted.",
    save_failure_hint: Some(
        "Could not save the operation detail. Check the operation, the product and the available stock.",
    ),
};

pub static INSPECTIONS: ResourceConfig = ResourceConfig {
    key: "inspections",
    path: "inspecciones-calidad",
    singular: "inspection",
    plural: "inspections",
    fields: &[
        FieldSpec::new("fecha", "Date", Coercion::Date).required(),
        FieldSpec::new("resultado", "Result", Coercion::Text).required(),
        FieldSpec::new("observaciones", "Notes", Coercion::Text),
        FieldSpec::new("operacion_id", "Operation ID", Coercion::Integer).required(),
        FieldSpec::new("producto_id", "Product ID", Coercion::Integer),
    ],
    columns: &[
        ColumnSpec::id(),
        ColumnSpec::field("Date", "fecha"),
        ColumnSpec::field("Result", "resultado"),
        ColumnSpec::field("Operation", "operacion_id"),
        ColumnSpec::field("Product", "producto_id").or("-"),
        ColumnSpec::field("Notes", "observaciones"),
    ],
    searchable: &["id", "resultado", "operacion_id"],
    rules: &[],
    empty_message: "No inspections registered.",
    delete_prompt: "Delete this inspection?",
    save_failure_hint: None,
};
