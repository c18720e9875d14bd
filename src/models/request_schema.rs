use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::utils::validate_mobile;

use super::NewUser;

/// request body schema for user registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserReq {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "John Doe")]
    pub name: String,

    #[validate(custom(function = "validate_mobile"))]
    #[schema(example = "9999999999")]
    pub mobile: String,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "221B Baker Street")]
    pub address: String,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "F1")]
    pub fingerprint: String,
}

impl From<RegisterUserReq> for NewUser {
    fn from(req: RegisterUserReq) -> Self {
        Self {
            name: req.name,
            mobile: req.mobile,
            address: req.address,
            fingerprint: req.fingerprint,
        }
    }
}

/// query params for requesting an otp
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OtpQuery {
    /// Registered mobile number
    pub number: Option<String>,
}

/// request body schema for otp login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginReq {
    // mobile and otp are left to the credential check, which answers 404
    #[schema(example = "9999999999")]
    pub mobile: String,

    #[schema(example = "048213")]
    pub otp: String,

    #[validate(length(min = 1))]
    #[schema(example = "F1")]
    pub fingerprint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_req(mobile: &str) -> RegisterUserReq {
        RegisterUserReq {
            name: "abcd".to_owned(),
            mobile: mobile.to_owned(),
            address: "somewhere".to_owned(),
            fingerprint: "F1".to_owned(),
        }
    }

    #[test]
    fn test_register_req_validation() {
        assert!(register_req("9999999999").validate().is_ok());
        assert!(register_req("12345").validate().is_err());
        assert!(register_req("99999A9999").validate().is_err());

        let mut req = register_req("9999999999");
        req.name = String::new();
        assert!(req.validate().is_err());

        let mut req = register_req("9999999999");
        req.fingerprint = String::new();
        assert!(req.validate().is_err());

        let mut req = register_req("9999999999");
        req.address = "a".repeat(256);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_req_requires_all_fields() {
        let req: LoginReq =
            serde_json::from_str(r#"{"mobile": "9999999999", "otp": "", "fingerprint": "F1"}"#)
                .unwrap();
        assert!(req.validate().is_ok());
        let req: LoginReq =
            serde_json::from_str(r#"{"mobile": "9999999999", "otp": "1", "fingerprint": ""}"#)
                .unwrap();
        assert!(req.validate().is_err());
        let missing = serde_json::from_str::<LoginReq>(r#"{"mobile": "9999999999"}"#);
        assert!(missing.is_err());
    }
}
