//! Response decoding.
//!
//! These functions turn a raw [`DetailedResponse`] into the result of an
//! operation. A non-2xx status is always a [`RequestError`]; a 2xx body that
//! does not match the expected shape is a [`ResponseProcessingError`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{DetailedResponse, RequestError, ResponseProcessingError};
use crate::rest::response::ResourceResponse;

/// Returns the response unchanged if its status is 2xx.
///
/// # Errors
///
/// Returns [`RequestError`] for any other status, carrying the message
/// extracted from the body, the decoded JSON body when there is one, and the
/// raw response.
pub fn check_status(response: DetailedResponse) -> Result<DetailedResponse, RequestError> {
    if response.is_success() {
        return Ok(response);
    }

    let error_body: Option<Value> = if response.body.is_empty() {
        None
    } else {
        response.json().ok()
    };
    let message = error_body
        .as_ref()
        .and_then(extract_error_message)
        .unwrap_or_else(|| status_reason(response.status));

    Err(RequestError {
        status: response.status,
        message,
        error_body,
        response: Box::new(response),
    })
}

/// Decodes a 2xx JSON response into `T`.
///
/// # Errors
///
/// Returns [`RequestError`] for a non-2xx status and
/// [`ResponseProcessingError`] if the body does not decode into `T`.
pub fn decode_json<T: DeserializeOwned>(
    response: DetailedResponse,
) -> Result<ResourceResponse<T>, crate::clients::CatalogError> {
    let response = check_status(response)?;
    match response.json::<T>() {
        Ok(data) => Ok(ResourceResponse::new(data, response)),
        Err(source) => Err(ResponseProcessingError {
            source,
            response: Box::new(response),
        }
        .into()),
    }
}

/// Returns the body of a 2xx response as opaque bytes.
///
/// The body is moved into the data; the attached raw response keeps status
/// and headers.
///
/// # Errors
///
/// Returns [`RequestError`] for a non-2xx status.
pub fn decode_binary(response: DetailedResponse) -> Result<ResourceResponse<Vec<u8>>, RequestError> {
    let mut response = check_status(response)?;
    let data = std::mem::take(&mut response.body);
    Ok(ResourceResponse::new(data, response))
}

/// Returns a 2xx response whose body carries no result.
///
/// # Errors
///
/// Returns [`RequestError`] for a non-2xx status.
pub fn decode_no_content(response: DetailedResponse) -> Result<DetailedResponse, RequestError> {
    check_status(response)
}

/// Looks for a human-readable message in common error body shapes.
fn extract_error_message(body: &Value) -> Option<String> {
    let as_message = |value: &Value| value.as_str().map(ToString::to_string);

    if let Some(message) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message"))
        .and_then(as_message)
    {
        return Some(message);
    }

    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(as_message))
}

fn status_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CatalogError;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
    }

    fn response(status: u16, body: &str) -> DetailedResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        DetailedResponse::new(status, headers, body.as_bytes().to_vec())
    }

    #[test]
    fn test_success_decodes_json() {
        let result: ResourceResponse<Thing> = decode_json(response(200, r#"{"id":"x"}"#)).unwrap();
        assert_eq!(result.id, "x");
        assert_eq!(result.status(), 200);
    }

    #[test]
    fn test_error_message_from_errors_array() {
        let body = r#"{"errors":[{"code":"not_found","message":"Entry not found"}],"trace":"t"}"#;
        let error = check_status(response(404, body)).unwrap_err();

        assert_eq!(error.status, 404);
        assert_eq!(error.message, "Entry not found");
        assert_eq!(error.error_body.unwrap()["trace"], json!("t"));
        assert_eq!(error.response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_error_message_from_flat_keys() {
        let error = check_status(response(400, r#"{"message":"bad q"}"#)).unwrap_err();
        assert_eq!(error.message, "bad q");

        let error = check_status(response(403, r#"{"errorMessage":"denied"}"#)).unwrap_err();
        assert_eq!(error.message, "denied");
    }

    #[test]
    fn test_error_message_falls_back_to_status_reason() {
        let error = check_status(response(500, "<html>oops</html>")).unwrap_err();
        assert_eq!(error.message, "Internal Server Error");
        assert!(error.error_body.is_none());
        assert_eq!(error.response.text(), "<html>oops</html>");
    }

    #[test]
    fn test_non_success_never_decodes() {
        let result = decode_json::<Thing>(response(404, r#"{"id":"x"}"#));
        assert!(matches!(result, Err(CatalogError::Request(e)) if e.status == 404));
    }

    #[test]
    fn test_unparseable_success_body() {
        let result = decode_json::<Thing>(response(200, "this is not json"));

        match result {
            Err(CatalogError::ResponseProcessing(e)) => {
                assert_eq!(e.response.status, 200);
                assert_eq!(e.response.text(), "this is not json");
            }
            other => panic!("expected processing error, got {other:?}"),
        }
    }

    #[test]
    fn test_binary_body_is_returned_as_is() {
        let result = decode_binary(response(200, "\u{1}raw")).unwrap();
        assert_eq!(result.data(), &b"\x01raw".to_vec());
        assert!(result.response().body.is_empty());
    }

    #[test]
    fn test_no_content_returns_response() {
        let result = decode_no_content(response(204, "")).unwrap();
        assert_eq!(result.status, 204);

        assert!(decode_no_content(response(409, "")).is_err());
    }
}
