use crate::{
    error::{StoreError, StoreResult},
    models::{Club, NewClub, NewSignup, NewStudent, Signup, Student},
};
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

pub type SharedStore = Arc<dyn ClubStore>;

/// Queries over clubs, students and the signups joining them.
///
/// Each relation of the schema is exposed as an explicit query rather than
/// relation metadata on the records.
#[async_trait]
pub trait ClubStore: Send + Sync + 'static {
    /// All clubs in storage order, without related rows.
    async fn find_all_clubs(&self) -> StoreResult<Vec<Club>>;
    async fn find_club_by_id(&self, id: i32) -> StoreResult<Option<Club>>;
    async fn find_student_by_id(&self, id: i32) -> StoreResult<Option<Student>>;

    /// Students reachable through the club's signups, in signup order.
    async fn list_students_for_club(&self, club_id: i32) -> StoreResult<Vec<Student>>;
    async fn list_clubs_for_student(&self, student_id: i32) -> StoreResult<Vec<Club>>;
    async fn list_signups_for_club(&self, club_id: i32) -> StoreResult<Vec<Signup>>;
    async fn list_signups_for_student(&self, student_id: i32) -> StoreResult<Vec<Signup>>;

    async fn insert_club(&self, club: NewClub) -> StoreResult<Club>;
    async fn insert_student(&self, student: NewStudent) -> StoreResult<Student>;
    /// Fails with a storage error when either side of the edge is missing.
    async fn insert_signup(&self, signup: NewSignup) -> StoreResult<Signup>;

    async fn find_students_of_club(&self, club: &Club) -> StoreResult<Vec<Student>> {
        self.list_students_for_club(club.id).await
    }

    async fn club_of_signup(&self, signup: &Signup) -> StoreResult<Club> {
        self.find_club_by_id(signup.club_id)
            .await?
            .ok_or_else(|| dangling(signup, "club", signup.club_id))
    }

    async fn student_of_signup(&self, signup: &Signup) -> StoreResult<Student> {
        self.find_student_by_id(signup.student_id)
            .await?
            .ok_or_else(|| dangling(signup, "student", signup.student_id))
    }

    /// Creates a student and signs them up for `club`.
    async fn enroll_new_student(
        &self,
        club: &Club,
        student: NewStudent,
    ) -> StoreResult<(Student, Signup)> {
        let student = self.insert_student(student).await?;
        let signup = self
            .insert_signup(NewSignup {
                club_id: club.id,
                student_id: student.id,
            })
            .await?;
        Ok((student, signup))
    }
}

fn dangling(signup: &Signup, entity: &str, id: i32) -> StoreError {
    StoreError::Storage(anyhow::anyhow!(
        "signup {} references missing {entity} {id}",
        signup.id
    ))
}
