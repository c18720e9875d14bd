use axum::http::Uri;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::GenericResponse;

pub async fn global_404_handler(uri: Uri) -> impl IntoResponse {
    let message = format!("Route `{}` does not exist", uri);
    tracing::debug!("{}", message);
    let response = GenericResponse {
        success: false,
        message,
    };
    (StatusCode::NOT_FOUND, Json(response))
}
