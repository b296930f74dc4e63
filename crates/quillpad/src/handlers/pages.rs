//! HTML page handlers: the post list and the create/edit forms.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use quillpad_core::post::PostId;
use quillpad_core::storage::RepositoryError;

use super::{
    templates::{CreateTemplate, EditTemplate, HtmlTemplate, IndexTemplate},
    AppError,
};
use crate::state::AppState;

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = state.post_repo.list_posts().await?;

    Ok(HtmlTemplate(IndexTemplate { posts }))
}

/// Handler for the new post form (GET /create).
pub async fn create_form() -> impl IntoResponse {
    HtmlTemplate(CreateTemplate)
}

/// Handler for the edit form (GET /edit/{id}).
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .post_repo
        .get_post(id)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        })?;

    Ok(HtmlTemplate(EditTemplate { post }))
}
