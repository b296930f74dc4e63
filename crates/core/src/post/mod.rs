mod error;
mod operations;
mod types;

pub use error::PostError;
pub use operations::validate_post_input;
pub use types::{Post, PostId, PostInput};
