use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{
        pages::{create_form, edit_form, index},
        posts::{create_post, delete_post, update_post},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/create", get(create_form).post(create_post))
        .route("/edit/{id}", get(edit_form).post(update_post))
        .route("/delete/{id}", delete(delete_post))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
