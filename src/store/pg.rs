use super::ClubStore;
use crate::{
    error::{StoreError, StoreResult},
    models::{Club, NewClub, NewSignup, NewStudent, Signup, Student},
    schema::*,
    DbPool,
};
use async_trait::async_trait;
use deadpool::managed::Object;
use diesel::prelude::*;
use diesel_async::{
    pooled_connection::AsyncDieselConnectionManager, AsyncPgConnection, RunQueryDsl,
};

type PooledConnection = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// [`ClubStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> StoreResult<PooledConnection> {
        self.pool
            .get()
            .await
            .map_err(|e| anyhow::anyhow!("failed to get a connection: {e}").into())
    }
}

#[async_trait]
impl ClubStore for PgStore {
    async fn find_all_clubs(&self) -> StoreResult<Vec<Club>> {
        let conn = &mut self.conn().await?;

        Ok(clubs::table.order(clubs::id).load::<Club>(conn).await?)
    }

    async fn find_club_by_id(&self, id: i32) -> StoreResult<Option<Club>> {
        let conn = &mut self.conn().await?;

        Ok(clubs::table
            .find(id)
            .first::<Club>(conn)
            .await
            .optional()?)
    }

    async fn find_student_by_id(&self, id: i32) -> StoreResult<Option<Student>> {
        let conn = &mut self.conn().await?;

        Ok(students::table
            .find(id)
            .first::<Student>(conn)
            .await
            .optional()?)
    }

    async fn list_students_for_club(&self, club_id: i32) -> StoreResult<Vec<Student>> {
        let conn = &mut self.conn().await?;

        Ok(signups::table
            .inner_join(students::table)
            .filter(signups::club_id.eq(club_id))
            .order(signups::id)
            .select(students::all_columns)
            .load::<Student>(conn)
            .await?)
    }

    async fn list_clubs_for_student(&self, student_id: i32) -> StoreResult<Vec<Club>> {
        let conn = &mut self.conn().await?;

        Ok(signups::table
            .inner_join(clubs::table)
            .filter(signups::student_id.eq(student_id))
            .order(signups::id)
            .select(clubs::all_columns)
            .load::<Club>(conn)
            .await?)
    }

    async fn list_signups_for_club(&self, club_id: i32) -> StoreResult<Vec<Signup>> {
        let conn = &mut self.conn().await?;

        Ok(signups::table
            .filter(signups::club_id.eq(club_id))
            .order(signups::id)
            .load::<Signup>(conn)
            .await?)
    }

    async fn list_signups_for_student(&self, student_id: i32) -> StoreResult<Vec<Signup>> {
        let conn = &mut self.conn().await?;

        Ok(signups::table
            .filter(signups::student_id.eq(student_id))
            .order(signups::id)
            .load::<Signup>(conn)
            .await?)
    }

    async fn insert_club(&self, club: NewClub) -> StoreResult<Club> {
        let conn = &mut self.conn().await?;

        Ok(diesel::insert_into(clubs::table)
            .values(club)
            .get_result::<Club>(conn)
            .await?)
    }

    async fn insert_student(&self, student: NewStudent) -> StoreResult<Student> {
        let conn = &mut self.conn().await?;

        Ok(diesel::insert_into(students::table)
            .values(student)
            .get_result::<Student>(conn)
            .await?)
    }

    async fn insert_signup(&self, signup: NewSignup) -> StoreResult<Signup> {
        let conn = &mut self.conn().await?;

        Ok(diesel::insert_into(signups::table)
            .values(signup)
            .get_result::<Signup>(conn)
            .await?)
    }
}
