//! Askama templates and the wrapper that turns them into responses.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use quillpad_core::post::Post;

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Post list page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<Post>,
}

/// Empty form for a new post.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate;

/// Form pre-filled with an existing post.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub post: Post,
}
