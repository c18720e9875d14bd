use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    app::AppState,
    constants::*,
    models::{GenericResponse, OtpQuery, OtpRecord, OtpResponse},
    store::AuthStore,
    utils::{generate_otp, get_epoch_ms, AppError},
};

/// Generate otp for a registered mobile
///
/// Any otp generated earlier for the same mobile is replaced.
#[utoipa::path(
    get,
    path = "/otp",
    params(OtpQuery),
    responses(
        (status = 200, description = "Otp generated", body = OtpResponse),
        (status = 400, description = "Missing 'number' query parameter", body = GenericResponse),
        (status = 404, description = "User doesn't exist", body = GenericResponse),
        (status = 500, description = "Store failure", body = GenericResponse)
    ),
    tag = "App User API"
)]
pub async fn get_otp_handler(
    State(state): State<AppState>,
    Query(params): Query<OtpQuery>,
) -> Result<Json<OtpResponse>, AppError> {
    let mobile = params
        .number
        .filter(|number| !number.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing 'number' query parameter".to_owned()))?;
    let otp = issue_otp(state.store.as_ref(), &mobile, get_epoch_ms()).await?;
    Ok(Json(OtpResponse { success: true, otp }))
}

/// Generate a fresh otp for the mobile and store it, overwriting code and
/// timestamp of any previous one. The mobile must belong to a registered user.
pub async fn issue_otp(store: &dyn AuthStore, mobile: &str, now: u64) -> Result<String, AppError> {
    store
        .find_user_by_mobile(mobile)
        .await?
        .ok_or_else(|| AppError::NotFound("User doesn't exist".to_owned()))?;
    let otp = generate_otp(OTP_LENGTH);
    let record = OtpRecord::new(mobile, &otp, now);
    store.upsert_otp(&record).await?;
    tracing::debug!("Otp generated for mobile {}", mobile);
    Ok(otp)
}
