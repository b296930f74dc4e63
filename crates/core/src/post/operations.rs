use super::{PostError, PostInput};

/// Validates post input before it reaches storage.
///
/// Both fields are required. A value made only of whitespace counts as
/// missing, matching what a browser's `required` attribute lets through.
pub fn validate_post_input(input: &PostInput) -> Result<(), PostError> {
    if input.title.trim().is_empty() {
        return Err(PostError::MissingField("title"));
    }
    if input.content.trim().is_empty() {
        return Err(PostError::MissingField("content"));
    }

    Ok(())
}
