use crate::db::{errors::Result, models::enrollments::EnrollmentDBResponse};
use crate::types::UserId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Enrollments<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Enrollments<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_user_id(&mut self, user_id: UserId) -> Result<Option<EnrollmentDBResponse>> {
        let enrollment = sqlx::query_as::<_, EnrollmentDBResponse>(
            "SELECT id, user_id, name, created_at, updated_at FROM enrollments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(enrollment)
    }
}
