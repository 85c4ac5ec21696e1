// GraphQL request decoding
// Turns headers + raw body text into a GraphQLRequestBody or a BadRequest

use axum::http::{header, HeaderMap};
use serde_json::Value;

use super::types::GraphQLRequestBody;
use crate::{GatewayError, Result};

pub const JSON_MEDIA_TYPE: &str = "application/json";

const QUERY_REQUIRED: &str = "field 'query' is required";

/// Does the `content-type` header start with `application/json`?
///
/// Matching is case-insensitive, so parameters such as `; charset=utf-8`
/// are accepted.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.get(..JSON_MEDIA_TYPE.len()))
        .map(|prefix| prefix.eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Validate and decode a GraphQL POST body.
///
/// Steps run in order and the first failure wins:
/// 1. content-type must be JSON
/// 2. body must parse as a JSON object
/// 3. `query` must be a non-empty string
pub fn decode_request(headers: &HeaderMap, body: &str) -> Result<GraphQLRequestBody> {
    if !is_json_content_type(headers) {
        return Err(GatewayError::bad_request("Invalid content-type"));
    }

    let document: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::bad_request(format!("Invalid request body: {}", e)))?;

    let Value::Object(mut fields) = document else {
        return Err(GatewayError::bad_request(
            "Invalid request body: expected a JSON object",
        ));
    };

    let query = match fields.remove("query") {
        Some(Value::String(query)) if !query.is_empty() => query,
        _ => return Err(GatewayError::bad_request(QUERY_REQUIRED)),
    };

    let variables = match fields.remove("variables") {
        None | Some(Value::Null) => None,
        Some(variables) => Some(variables),
    };

    let operation_name = match fields.remove("operationName") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name),
        Some(_) => {
            return Err(GatewayError::bad_request(
                "field 'operationName' must be a string",
            ))
        }
    };

    Ok(GraphQLRequestBody {
        query,
        variables,
        operation_name,
    })
}
