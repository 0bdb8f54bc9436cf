//! Shared response types.

mod response;

pub use response::{Created, JsonResponse, MessageResponse, NoContent};
