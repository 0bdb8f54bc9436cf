//! Custom extractors that report rejections as `AppError`.

mod json_body;
mod user_id;

pub use json_body::JsonBody;
pub use user_id::{parse_user_id, UserId};
