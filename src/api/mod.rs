use axum::{routing::get, Router};

pub mod clubs;

pub fn app() -> Router {
    Router::new()
        .route("/v1/clubs", get(clubs::list))
        .route("/v1/clubs/:id", get(clubs::show))
}
