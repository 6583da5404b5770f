use crate::db::{errors::Result, models::sessions::SessionDBResponse};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Sessions<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Sessions<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Find the session a bearer token was issued for
    #[instrument(skip(self, token), err)]
    pub async fn get_by_token(&mut self, token: &str) -> Result<Option<SessionDBResponse>> {
        let session = sqlx::query_as::<_, SessionDBResponse>(
            r#"
            SELECT id, user_id, token, created_at
            FROM sessions
            WHERE token = $1
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(session)
    }
}
