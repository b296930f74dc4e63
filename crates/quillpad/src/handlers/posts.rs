//! Post mutation handlers.
//!
//! Create and edit answer with a `302 Found` back to the list page. Delete is
//! called from script and answers with a JSON confirmation. Updating or
//! deleting an ID that does not exist is not an error; it is logged and the
//! usual response is sent.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;

use quillpad_core::post::{validate_post_input, PostId, PostInput};

use super::AppError;
use crate::state::AppState;

/// Confirmation returned by the delete route.
pub const DELETE_MESSAGE: &str = "Post deleted successfully!";

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// `302 Found` to the post list.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Create a new post (POST /create).
pub async fn create_post(
    State(state): State<AppState>,
    Form(payload): Form<PostInput>,
) -> Result<Response, AppError> {
    validate_post_input(&payload)?;

    let post = state.post_repo.create_post(&payload).await?;

    tracing::info!(post_id = post.id, title = %post.title, "Created new post");

    Ok(redirect_to_index())
}

/// Update a post (POST /edit/{id}).
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Form(payload): Form<PostInput>,
) -> Result<Response, AppError> {
    validate_post_input(&payload)?;

    if state.post_repo.update_post(id, &payload).await? {
        tracing::info!(post_id = id, "Updated post");
    } else {
        tracing::warn!(post_id = id, "Update for unknown post ignored");
    }

    Ok(redirect_to_index())
}

/// Delete a post (DELETE /delete/{id}).
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<DeleteResponse>, AppError> {
    if state.post_repo.delete_post(id).await? {
        tracing::info!(post_id = id, "Deleted post");
    } else {
        tracing::warn!(post_id = id, "Delete for unknown post ignored");
    }

    Ok(Json(DeleteResponse {
        message: DELETE_MESSAGE,
    }))
}
