use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::borrow::Cow;

/// Failures raised by a [`ClubStore`](crate::store::ClubStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: String },
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> Self {
        StoreError::Storage(e.into())
    }
}

pub enum AppError {
    InternalServerError(anyhow::Error),
    ResponseStatusError(StatusCode, Cow<'static, str>),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct AppErrorResponse {
            errors: Cow<'static, str>,
        }

        match self {
            AppError::InternalServerError(err) => {
                tracing::error!("request failed: {err:#}");
                AppError::from(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                    .into_response()
            }
            AppError::ResponseStatusError(code, s) => {
                (code, Json(AppErrorResponse { errors: s })).into_response()
            }
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(e: E) -> AppError {
        AppError::InternalServerError(e.into())
    }
}

impl AppError {
    pub fn from(code: StatusCode, s: impl Into<Cow<'static, str>>) -> AppError {
        AppError::ResponseStatusError(code, s.into())
    }
}
