use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.endpoint("/api/briefs"), "http://localhost:8000/api/briefs");
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(client.endpoint("api/health"), "http://localhost:8000/api/health");
}

#[test]
fn brief_path_formats_expected_path() {
    assert_eq!(brief_path(42), "/api/briefs/42");
}

#[test]
fn paths_match_backend_contract() {
    assert_eq!(BRIEFS_PATH, "/api/briefs");
    assert_eq!(HEALTH_PATH, "/api/health");
}

#[test]
fn from_env_uses_configured_base_url() {
    assert_eq!(ApiClient::from_env().base_url(), crate::config::api_base_url());
}

// =============================================================
// Error extraction
// =============================================================

#[test]
fn from_response_prefers_string_detail() {
    let err = ApiError::from_response(404, r#"{"detail":"Brief not found"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            detail: Some("Brief not found".to_owned())
        }
    );
    assert_eq!(err.user_message(), "Brief not found");
}

#[test]
fn from_response_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","urls"],"msg":"Value error, At least one URL is required."},{"msg":"second"}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(err.user_message(), "Value error, At least one URL is required.; second");
}

#[test]
fn from_response_falls_back_to_generic_message() {
    assert_eq!(
        ApiError::from_response(502, "<html>Bad Gateway</html>").user_message(),
        "Request failed with status code 502"
    );
    assert_eq!(
        ApiError::from_response(500, r#"{"detail":"   "}"#).user_message(),
        "Request failed with status code 500"
    );
    assert_eq!(
        ApiError::from_response(500, r#"{"error":"boom"}"#).user_message(),
        "Request failed with status code 500"
    );
}

#[test]
fn is_not_found_only_for_404_status() {
    assert!(ApiError::from_response(404, "").is_not_found());
    assert!(!ApiError::from_response(500, "").is_not_found());
    assert!(!ApiError::Transport("Failed to fetch".to_owned()).is_not_found());
}

#[test]
fn transport_and_unavailable_messages() {
    assert_eq!(ApiError::Transport("Failed to fetch".to_owned()).user_message(), "Failed to fetch");
    assert_eq!(ApiError::Unavailable.user_message(), "not available on server");
    assert_eq!(
        ApiError::Decode("missing field `id`".to_owned()).user_message(),
        "unexpected response body: missing field `id`"
    );
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(block_on(client.get_health()), Err(ApiError::Unavailable));
    assert_eq!(block_on(client.get_brief(1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(client.list_briefs()), Err(ApiError::Unavailable));
    assert_eq!(block_on(client.create_brief(&["https://a.test".to_owned()])), Err(ApiError::Unavailable));
}
