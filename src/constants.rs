pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 8080;
pub const MONGO_MIN_POOL_SIZE: u32 = 5;
pub const MONGO_MAX_POOL_SIZE: u32 = 10;
pub const MONGO_CONN_TIMEOUT: u64 = 10;
pub const MONGO_DUPLICATE_KEY_CODE: i32 = 11000;
pub const OTP_LENGTH: u32 = 6;
pub const OTP_VALIDITY_MINS: u64 = 5;

pub const DB_NAME: &str = "wecredit";

pub const COLL_SEQUENCES: &str = "sequences";
pub const COLL_USERS: &str = "users";
pub const COLL_OTP: &str = "otps";

// default name mongodb gives the unique index on `mobile`
pub const MOBILE_INDEX: &str = "mobile_1";

pub const USER_ID_SEQ: &str = "USER_ID_SEQ";
