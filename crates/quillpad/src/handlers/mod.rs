pub mod error;
pub mod pages;
pub mod posts;
pub mod templates;

pub use error::AppError;
