//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use hypershop_hypermedia::ExpandError;

/// Link construction failed. With the static route registry this means a
/// registry/arity bug, so it surfaces as a 500.
pub fn expand_error_to_response(err: ExpandError) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "link_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
