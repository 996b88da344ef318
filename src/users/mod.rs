pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(handlers::register))
}
