//! Maps store errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fabrica_store::{ErrorResponse, MasterDataError};

/// Wrapper giving `MasterDataError` an HTTP rendering. Handlers return
/// `Result<_, ApiError>` and use `?` on store calls.
#[derive(Debug)]
pub struct ApiError(pub MasterDataError);

impl From<MasterDataError> for ApiError {
    fn from(error: MasterDataError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self.0))).into_response()
    }
}
