//! Core types for the quillpad blog.
//!
//! Pure domain code: the `Post` entity, form input validation, and the
//! repository trait that storage backends implement. Nothing in this crate
//! performs I/O.

pub mod post;
pub mod storage;
