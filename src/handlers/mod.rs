pub mod default;
pub mod global_404;
pub mod ping;
pub mod user;

pub use default::default_route_handler;

pub use global_404::global_404_handler;

pub use ping::ping_handler;

pub use user::login::login_handler;
pub use user::otp::get_otp_handler;
pub use user::register::register_user_handler;
