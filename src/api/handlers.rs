// GraphQL endpoint handlers
// One handler per dispatcher outcome; failures are rendered by GatewayError

use axum::{
    extract::{BodyStream, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::info;

use super::{
    body::read_body,
    decoder::{decode_request, is_json_content_type},
    GatewayState,
};
use crate::{config::CorsConfig, GatewayError, Result};

/// A successful execution result, written as JSON plus a trailing newline
#[derive(Debug)]
pub struct GraphQLResponseBody(pub Value);

impl IntoResponse for GraphQLResponseBody {
    fn into_response(self) -> Response {
        match serde_json::to_string(&self.0) {
            Ok(mut json) => {
                json.push('\n');
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json;charset=UTF-8")],
                    json,
                )
                    .into_response()
            }
            Err(e) => GatewayError::Internal(e.into()).into_response(),
        }
    }
}

/// POST on the endpoint: read, decode, execute
pub async fn graphql_handler(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: BodyStream,
) -> Result<GraphQLResponseBody> {
    let pipeline = execute_pipeline(&state, &headers, body);

    let result = match state.config.request_timeout() {
        Some(deadline) => tokio::time::timeout(deadline, pipeline)
            .await
            .map_err(|_| GatewayError::RequestTimeout)??,
        None => pipeline.await?,
    };

    Ok(GraphQLResponseBody(result))
}

async fn execute_pipeline(
    state: &GatewayState,
    headers: &HeaderMap,
    body: BodyStream,
) -> Result<Value> {
    // Reject before buffering anything
    if !is_json_content_type(headers) {
        return Err(GatewayError::bad_request("Invalid content-type"));
    }

    let text = read_body(body, state.config.max_body_bytes).await?;
    let request = decode_request(headers, &text)?;
    info!(
        query = %request.query,
        variables = ?request.variables,
        operation_name = ?request.operation_name,
        "GraphQL request"
    );
    state.executor.execute(request).await
}

/// OPTIONS on the endpoint: answer the CORS preflight with no body
pub async fn preflight(State(state): State<GatewayState>) -> Result<Response> {
    let headers = preflight_headers(&state.config.cors)?;
    Ok((StatusCode::NO_CONTENT, headers).into_response())
}

fn preflight_headers(cors: &CorsConfig) -> Result<HeaderMap> {
    let entries: [(HeaderName, String); 4] = [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, cors.allow_origin.clone()),
        (header::ACCESS_CONTROL_ALLOW_METHODS, cors.allow_methods.clone()),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, cors.allow_headers.clone()),
        (header::ACCESS_CONTROL_MAX_AGE, cors.max_age_secs.to_string()),
    ];

    let mut headers = HeaderMap::with_capacity(entries.len());
    for (name, value) in entries {
        let value = HeaderValue::from_str(&value)
            .map_err(|e| anyhow::anyhow!("invalid CORS value for {}: {}", name, e))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Any other method on the endpoint
pub async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}

/// Any other path
pub async fn not_found() -> GatewayError {
    GatewayError::NotFound
}
