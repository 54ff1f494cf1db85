use crate::error::AppError;
use axum::{http::StatusCode, routing::get_service, Router};
use std::{io, path::Path};
use tower_http::services::{ServeDir, ServeFile};

/// Paths the single-page client routes itself.
const CLIENT_ROUTES: [&str; 3] = ["/", "/clubs", "/clubs/:id"];

/// Serves the client bundle: `index.html` for every client route and the
/// bundle's `assets/` directory under `/assets`.
pub fn app(client_dir: impl AsRef<Path>) -> Router {
    let client_dir = client_dir.as_ref();
    let index = ServeFile::new(client_dir.join("index.html"));

    let mut router = Router::new();
    for path in CLIENT_ROUTES {
        let service = get_service(index.clone()).handle_error(handle_error);
        router = router.route(path, service);
    }

    let assets = get_service(ServeDir::new(client_dir.join("assets")));
    router.nest("/assets", assets.handle_error(handle_error))
}

async fn handle_error(err: io::Error) -> AppError {
    tracing::error!("failed to serve client file: {err}");
    AppError::from(StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch asset")
}
