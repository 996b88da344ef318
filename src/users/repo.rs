use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: String,
    // The token travels in the cookie, never in a response body.
    #[serde(skip_serializing)]
    pub session_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn create(
        db: &PgPool,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        photo_url: &str,
        session_id: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, first_name, last_name, photo_url, session_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, photo_url, session_id, created_at
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(photo_url)
        .bind(session_id)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
