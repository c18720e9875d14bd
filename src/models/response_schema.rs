use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PublicUser;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

/// response schema for user registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: PublicUser,
}

/// response schema for otp generation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OtpResponse {
    pub success: bool,
    #[schema(example = "048213")]
    pub otp: String,
}

/// response schema for otp login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: PublicUser,
}
