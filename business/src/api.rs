//! REST helpers for `/{resource}/` collections.
//!
//! Every resource exposes the same five endpoints; these functions perform
//! the network IO and map the response into typed results. They know
//! nothing about forms, tables or notifications; the controller maps their
//! errors into user-visible messages.

use serde::de::DeserializeOwned;

use crate::BusinessConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{Client, RequestBuilder, Response};
use crate::record::{Payload, Record, RecordId};

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    if !response.is_success() {
        return Err(ApiError::from_response(&response));
    }
    Ok(response)
}

fn parse<T: DeserializeOwned>(response: &Response, what: &str) -> ApiResult<T> {
    response
        .json()
        .map_err(|e| ApiError::Decode(format!("{what}: {e}")))
}

fn with_json(request: RequestBuilder, payload: &Payload) -> ApiResult<RequestBuilder> {
    request
        .json(payload)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// GET `/{path}/`
pub async fn list_records(config: &BusinessConfig, path: &str) -> ApiResult<Vec<Record>> {
    let response = send(Client::get(config.resource_url(path))).await?;
    parse(&response, "record list")
}

/// GET `/{path}/{id}`
pub async fn get_record(config: &BusinessConfig, path: &str, id: RecordId) -> ApiResult<Record> {
    let response = send(Client::get(config.record_url(path, id))).await?;
    parse(&response, "record")
}

/// POST `/{path}/`
///
/// Returns the created record, including its server-assigned id.
pub async fn create_record(
    config: &BusinessConfig,
    path: &str,
    payload: &Payload,
) -> ApiResult<Record> {
    let request = with_json(Client::post(config.resource_url(path)), payload)?;
    let response = send(request).await?;
    parse(&response, "created record")
}

/// PUT `/{path}/{id}`
pub async fn update_record(
    config: &BusinessConfig,
    path: &str,
    id: RecordId,
    payload: &Payload,
) -> ApiResult<Record> {
    let request = with_json(Client::put(config.record_url(path, id)), payload)?;
    let response = send(request).await?;
    parse(&response, "updated record")
}

/// DELETE `/{path}/{id}`
///
/// The response body is not required; any 2xx counts as success.
pub async fn delete_record(config: &BusinessConfig, path: &str, id: RecordId) -> ApiResult<()> {
    send(Client::delete(config.record_url(path, id))).await?;
    Ok(())
}

/// GET an arbitrary endpoint below the base URL and decode its JSON body.
pub async fn get_json<T: DeserializeOwned>(
    config: &BusinessConfig,
    endpoint: &str,
    query: &[(&str, String)],
) -> ApiResult<T> {
    let mut request = Client::get(config.endpoint(endpoint));
    for (name, value) in query {
        request = request.query(*name, value);
    }
    let response = send(request).await?;
    parse(&response, endpoint)
}
