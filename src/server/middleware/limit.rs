use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rejects a request whose header names and values add up to more than
/// `max_header_bytes`.
///
/// Installed with `axum::middleware::from_fn_with_state`, the limit being the state.
///
/// # Returns
/// - `431 Request Header Fields Too Large` - Headers exceed the limit
/// - Response of the inner service otherwise
pub async fn limit_header_size(
    State(max_header_bytes): State<usize>,
    request: Request,
    next: Next,
) -> Response {
    let size: usize = request
        .headers()
        .iter()
        .map(|(name, value)| name.as_str().len() + value.len())
        .sum();

    if size > max_header_bytes {
        tracing::warn!(size, max_header_bytes, "Request headers exceed the limit");
        return StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE.into_response();
    }

    next.run(request).await
}
