//! The JSON envelope shared by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body of every response sent by the API.
///
/// `data` is left out of the JSON when there is nothing to return, e.g. for
/// errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// A human readable description of the outcome.
    pub message: String,
    /// The payload, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A failed response with no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Build a successful JSON response with the given status code.
pub fn respond<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    (status, ApiResponse::success(message, data)).into_response()
}

#[cfg(test)]
mod api_response_tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::ApiResponse;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        id: u32,
    }

    #[test]
    fn failure_omits_data() {
        let response = ApiResponse::<()>::failure("User not found");

        let got = serde_json::to_value(&response).unwrap();

        assert_eq!(got, json!({"success": false, "message": "User not found"}));
    }

    #[test]
    fn success_includes_data() {
        let response = ApiResponse::success("ok", vec![1, 2, 3]);

        let got = serde_json::to_value(&response).unwrap();

        assert_eq!(
            got,
            json!({"success": true, "message": "ok", "data": [1, 2, 3]})
        );
    }

    #[test]
    fn missing_data_reads_as_none_for_any_payload() {
        let body = json!({"success": false, "message": "Blog not found"});

        let got: ApiResponse<Payload> = serde_json::from_value(body).unwrap();

        assert_eq!(got, ApiResponse::failure("Blog not found"));
    }

    #[test]
    fn data_reads_back_as_payload() {
        let body = json!({"success": true, "message": "ok", "data": {"id": 7}});

        let got: ApiResponse<Payload> = serde_json::from_value(body).unwrap();

        assert_eq!(got, ApiResponse::success("ok", Payload { id: 7 }));
    }
}
