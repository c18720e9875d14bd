pub mod otp;
pub mod request_schema;
pub mod response_schema;
pub mod user;

pub use otp::*;
pub use request_schema::*;
pub use response_schema::*;
pub use user::*;
