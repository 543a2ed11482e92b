use super::*;

fn limited(max_header_bytes: usize) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(
            max_header_bytes,
            limit_header_size,
        ))
}

fn request_with_header(value: &str) -> Request<Body> {
    Request::builder()
        .uri("/")
        .header("x-note", value)
        .body(Body::empty())
        .unwrap()
}

/// Tests a request whose headers fit the limit.
///
/// Expected: the inner handler answers with 200
#[tokio::test]
async fn passes_small_headers() {
    let response = limited(64)
        .oneshot(request_with_header("short"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests a request whose headers add up to more than the limit.
///
/// Expected: 431 without reaching the handler
#[tokio::test]
async fn rejects_oversized_headers() {
    let response = limited(64)
        .oneshot(request_with_header(&"a".repeat(64)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_HEADER_FIELDS_TOO_LARGE);
}

/// Tests headers exactly at the limit.
///
/// Expected: 200, the limit is inclusive
#[tokio::test]
async fn accepts_headers_at_limit() {
    // "x-note" is 6 bytes, the value fills the rest.
    let response = limited(16)
        .oneshot(request_with_header("0123456789"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
