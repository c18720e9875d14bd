#![allow(dead_code, unused_imports)]

pub mod helper;
pub mod user;

pub use helper::build_get_request;
pub use helper::build_post_request;
pub use helper::get_app;
pub use helper::read_body;
pub use helper::read_json;

pub use user::login;
pub use user::register_user;
pub use user::request_otp;
