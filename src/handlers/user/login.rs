use axum::{extract::State, Json};

use crate::{
    app::AppState,
    models::{GenericResponse, LoginReq, LoginResponse, OtpPolicy, PublicUser},
    store::AuthStore,
    utils::{get_epoch_ms, AppError, ValidatedBody},
};

/// Login with otp
///
/// Check the otp for the mobile and the device fingerprint of the registered user.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "OTP verified successfully", body = LoginResponse),
        (status = 400, description = "Invalid input, expired otp or unrecognized device", body = GenericResponse),
        (status = 404, description = "Invalid mobile number or OTP, or user not found", body = GenericResponse),
        (status = 500, description = "Store failure", body = GenericResponse)
    ),
    tag = "App User API"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedBody(body): ValidatedBody<LoginReq>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = verify_login(
        state.store.as_ref(),
        &body,
        get_epoch_ms(),
        state.otp_policy,
    )
    .await?;
    let response = LoginResponse {
        success: true,
        message: "OTP verified successfully".to_owned(),
        user,
    };
    Ok(Json(response))
}

/// Verify the submitted mobile, otp and fingerprint.
///
/// Checks run in order and the first failure wins: the (mobile, otp) pair must
/// exist, it must not be older than the validity window, the user must exist and
/// the stored fingerprint must match byte for byte. Unless `policy.single_use`
/// is set the otp stays usable until it expires or is replaced.
pub async fn verify_login(
    store: &dyn AuthStore,
    body: &LoginReq,
    now: u64,
    policy: OtpPolicy,
) -> Result<PublicUser, AppError> {
    let record = store
        .find_otp(&body.mobile, &body.otp)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if record.is_expired(now, policy.validity_ms) {
        return Err(AppError::ExpiredOtp);
    }
    // the otp exists, so a missing user means the store is inconsistent
    let user = store
        .find_user_by_mobile(&body.mobile)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;
    if user.fingerprint.as_bytes() != body.fingerprint.as_bytes() {
        tracing::debug!("Fingerprint mismatch for mobile {}", user.mobile);
        return Err(AppError::DeviceMismatch);
    }
    if policy.single_use && !store.delete_otp(&body.mobile, &body.otp).await? {
        // consumed by a concurrent login
        return Err(AppError::InvalidCredentials);
    }
    tracing::info!("User {} logged in", user.id);
    Ok(user.into())
}
