//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn internal_error_case() -> DomainError {
    DomainError::internal("connection pool exhausted on host db-1")
        .with_details(json!({"host": "db-1"}))
}

#[fixture]
fn invalid_request_case() -> DomainError {
    DomainError::invalid_request("destination must not be empty")
        .with_details(json!({"field": "destination"}))
}

#[rstest]
#[case(DomainError::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(DomainError::unauthorized("no session"), StatusCode::UNAUTHORIZED)]
#[case(DomainError::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(DomainError::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: DomainError, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn response_payload(error: DomainError, expected_status: StatusCode) -> DomainError {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialises")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(
    #[from(internal_error_case)] internal_error: DomainError,
) {
    let payload = response_payload(internal_error, StatusCode::INTERNAL_SERVER_ERROR).await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(
    #[from(invalid_request_case)] invalid_request: DomainError,
) {
    let payload = response_payload(invalid_request, StatusCode::BAD_REQUEST).await;

    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "destination must not be empty");
    assert_eq!(payload.details(), Some(&json!({"field": "destination"})));
}

#[rstest]
fn actix_errors_become_internal_errors() {
    let actix = actix_web::error::ErrorBadGateway("upstream exploded");
    let error = DomainError::from(actix);

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(!error.message().contains("upstream"));
}
