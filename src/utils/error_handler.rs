use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{models::GenericResponse, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid mobile number or OTP")]
    InvalidCredentials,
    #[error("OTP has expired")]
    ExpiredOtp,
    #[error("Device not recognized. Please verify your device.")]
    DeviceMismatch,
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::ExpiredOtp | Self::DeviceMismatch => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) | Self::InvalidCredentials => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Persistence(StoreError::Conflict(msg)) => {
                tracing::debug!("Conflict: {}", msg);
                msg.to_owned()
            }
            Self::Persistence(StoreError::Backend(err)) => {
                tracing::error!("Store failure: {:?}", err);
                "Something went wrong: internal server error".to_owned()
            }
            _ => {
                tracing::debug!("{}: {}", status, self);
                self.to_string()
            }
        };
        let response = GenericResponse {
            success: false,
            message,
        };
        (status, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("none".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidCredentials, StatusCode::NOT_FOUND),
            (AppError::ExpiredOtp, StatusCode::BAD_REQUEST),
            (AppError::DeviceMismatch, StatusCode::BAD_REQUEST),
            (
                AppError::Persistence(StoreError::Conflict("dup".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[tokio::test]
    async fn test_backend_error_is_not_leaked() {
        let err = StoreError::Backend(anyhow::anyhow!("connection refused at 10.0.0.3"));
        let res = AppError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
        let body: GenericResponse = serde_json::from_slice(&body).unwrap();
        assert!(!body.success);
        assert!(!body.message.contains("10.0.0.3"));
    }
}
