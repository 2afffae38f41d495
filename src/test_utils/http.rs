use axum::http::StatusCode;
use axum_test::TestResponse;

use crate::response::ApiResponse;

/// Assert that `response` is a failure envelope with `status` and `message`.
#[track_caller]
pub(crate) fn assert_failure(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);

    let body = response.json::<ApiResponse<()>>();
    assert!(!body.success, "want success to be false, got {body:?}");
    assert_eq!(body.message, message);
    assert_eq!(body.data, None);
}

/// Assert that `response` is a 400 failure envelope whose message starts with `prefix`.
///
/// For rejections whose full text comes from axum or serde.
#[track_caller]
pub(crate) fn assert_bad_request_starting_with(response: &TestResponse, prefix: &str) {
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<ApiResponse<()>>();
    assert!(!body.success, "want success to be false, got {body:?}");
    assert!(
        body.message.starts_with(prefix),
        "want message starting with {prefix:?}, got {:?}",
        body.message
    );
    assert_eq!(body.data, None);
}
