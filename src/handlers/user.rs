pub mod login;
pub mod otp;
pub mod register;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::User;

    pub fn sample_user(mobile: &str, fingerprint: &str) -> User {
        User {
            id: 1,
            name: "abcd".to_owned(),
            mobile: mobile.to_owned(),
            address: "somewhere".to_owned(),
            fingerprint: fingerprint.to_owned(),
        }
    }
}
