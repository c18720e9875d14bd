use axum::{async_trait, extract::FromRequest, http::Request, Json, RequestExt};
use validator::{Validate, ValidationError};

use super::AppError;

/// Custom validator function to check mobile number
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    // mobile must be 10 to 15 digits long
    if !(10..=15).contains(&mobile.len()) {
        let mut err = ValidationError::new("mobile");
        err.message = Some(
            format!("Mobile must be 10 to 15 digits. Invalid mobile received: {mobile}").into(),
        );
        return Err(err);
    }
    // mobile must be all numeric chars
    if !mobile.chars().all(|ch| ch.is_ascii_digit()) {
        let mut err = ValidationError::new("mobile");
        err.message =
            Some(format!("Mobile must be all digits. Invalid mobile received: {mobile}").into());
        return Err(err);
    }

    Ok(())
}

/// JSON body extractor that also runs `validator` rules on the body
pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedBody<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: Validate + 'static,
    Json<T>: FromRequest<(), B>,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = req
            .extract::<Json<T>, _>()
            .await
            .map_err(|_| AppError::Validation("Invalid input".to_owned()))?;
        data.validate()
            .map_err(|err| AppError::Validation(format!("Invalid input: {err}")))?;
        Ok(Self(data))
    }
}
