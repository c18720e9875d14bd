pub mod error_handler;
pub mod misc;
pub(crate) mod sequence_generator;
pub mod validation;

pub use error_handler::AppError;
pub use misc::*;
pub(crate) use sequence_generator::get_seq_nxt_val;
pub use validation::validate_mobile;
pub use validation::ValidatedBody;
