//! Reports and the API status probe against a mock REST service.

mod common;

use common::TestCtx;
use serde_json::json;
use tradedesk_business::{
    ApiAvailability, ApiError, ReportKind, ReportParams, check_api_status, fetch_report,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const PARAMS: ReportParams = ReportParams {
    limit: 3,
    year: 2024,
};

#[tokio::test]
async fn test_operations_by_status_report() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/reportes/operaciones-por-estado"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "estado": "pendiente", "cantidad_operaciones": 2, "costo_total": 300.0 },
            { "estado": "completada", "cantidad_operaciones": 5, "costo_total": 1200.5 },
        ])))
        .mount(&ctx.mock_server)
        .await;

    let table = fetch_report(&ctx.config(), ReportKind::ByStatus, PARAMS)
        .await
        .unwrap();

    assert_eq!(table.title, "Operations by status");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["completada", "5", "1200.5"]);
    assert_eq!(table.series[1], ("completada".to_owned(), 5.0));
}

#[tokio::test]
async fn test_top_products_sends_limit() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/reportes/top-productos-exportados"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "producto": "Palta", "cantidad_exportada": 120.0 },
        ])))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let table = fetch_report(&ctx.config(), ReportKind::TopProducts, PARAMS)
        .await
        .unwrap();

    assert_eq!(table.rows, vec![vec!["Palta".to_owned(), "120.0".to_owned()]]);
}

#[tokio::test]
async fn test_revenue_sends_year_and_handles_empty() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/reportes/ingresos-por-mes"))
        .and(query_param("anio", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let table = fetch_report(&ctx.config(), ReportKind::Revenue, PARAMS)
        .await
        .unwrap();

    assert!(table.is_empty());
    assert_eq!(table.empty_message, Some("No data available."));
}

#[tokio::test]
async fn test_report_status_error() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/reportes/ingresos-por-mes"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["query", "anio"], "msg": "field required" }]
        })))
        .mount(&ctx.mock_server)
        .await;

    let err = fetch_report(&ctx.config(), ReportKind::Revenue, PARAMS)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 422,
            detail: Some("anio: field required".to_owned()),
        }
    );
}

#[tokio::test]
async fn test_report_decode_error() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/reportes/operaciones-por-estado"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&ctx.mock_server)
        .await;

    let err = fetch_report(&ctx.config(), ReportKind::ByStatus, PARAMS)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_status_available_with_message() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensaje": "API de Gestion de Importacion y Exportacion",
            "docs": "/docs",
        })))
        .mount(&ctx.mock_server)
        .await;

    let status = check_api_status(&ctx.config()).await;

    assert!(status.is_available());
    assert_eq!(
        status.api_availability(),
        &ApiAvailability::Available {
            message: Some("API de Gestion de Importacion y Exportacion".to_owned()),
        }
    );
}

#[tokio::test]
async fn test_status_unavailable_on_error_status() {
    let ctx = TestCtx::new().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ctx.mock_server)
        .await;

    let status = check_api_status(&ctx.config()).await;

    assert_eq!(
        status.api_availability(),
        &ApiAvailability::Unavailable("status 503".to_owned())
    );
}
