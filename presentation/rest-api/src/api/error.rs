use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Uniform error envelope: `{"error": "<code>"}`.
///
/// The wire contract does not distinguish failure kinds; the precise kind
/// is kept in logs.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
