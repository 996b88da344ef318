use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::meals::dto::NewMeal;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub date: Date,
    pub time: String,
    pub on_diet: bool,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Meal {
    pub async fn create(
        db: &PgPool,
        id: Uuid,
        new_meal: &NewMeal,
        user_id: Uuid,
    ) -> anyhow::Result<Meal> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, name, description, date, time, on_diet, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, description, date, time, on_diet, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_meal.name)
        .bind(&new_meal.description)
        .bind(new_meal.date)
        .bind(&new_meal.time)
        .bind(new_meal.on_diet)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(meal)
    }

    /// All meals for a user in update order, the ordering the streak scan
    /// is defined over. `id` breaks ties between equal timestamps.
    pub async fn list_in_update_order(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, name, description, date, time, on_diet, user_id,
                   created_at, updated_at
            FROM meals
            WHERE user_id = $1
            ORDER BY updated_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
