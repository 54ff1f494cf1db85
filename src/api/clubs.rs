use crate::{
    error::{AppResult, StoreError},
    models::{Club, Student},
    store::SharedStore,
};
use axum::{extract::Path, Extension, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ClubListResponse {
    clubs: Vec<Club>,
}

#[derive(Serialize)]
pub struct ClubWithStudents {
    id: i32,
    name: String,
    students: Vec<Student>,
}

#[derive(Serialize)]
pub struct ClubShowResponse {
    club: ClubWithStudents,
}

pub async fn list(
    Extension(store): Extension<SharedStore>,
) -> AppResult<Json<ClubListResponse>> {
    let clubs = store.find_all_clubs().await?;

    Ok(Json(ClubListResponse { clubs }))
}

/// Any failure here, a missing club included, is answered with a 500.
pub async fn show(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<String>,
) -> AppResult<Json<ClubShowResponse>> {
    let club = match id.parse::<i32>() {
        Ok(club_id) => store.find_club_by_id(club_id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| StoreError::not_found("club", &id))?;

    let students = store.find_students_of_club(&club).await?;
    tracing::debug!(club_id = club.id, students = students.len(), "loaded club");

    Ok(Json(ClubShowResponse {
        club: ClubWithStudents {
            id: club.id,
            name: club.name,
            students,
        },
    }))
}
