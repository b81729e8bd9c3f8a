//! Enrollments repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Enrollment};

#[derive(Clone)]
pub struct EnrollmentsRepository {
    pool: Pool<Postgres>,
}

impl EnrollmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the enrollment of a user, if any
    pub async fn find_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT id, user_id, name, created_at, updated_at FROM enrollments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(enrollment)
    }
}
