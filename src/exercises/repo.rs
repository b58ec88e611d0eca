use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::exercises::repo_types::{Exercise, LogFilter};
use crate::store::StoreError;

impl Exercise {
    /// Insert an exercise; a missing `date` takes the database's current time.
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        description: &str,
        duration: i32,
        date: Option<OffsetDateTime>,
    ) -> Result<Exercise, StoreError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, COALESCE($4, now()))
            RETURNING id, user_id, description, duration, date
            "#,
        )
        .bind(user_id)
        .bind(description)
        .bind(duration)
        .bind(date)
        .fetch_one(db)
        .await?;
        Ok(exercise)
    }

    /// No ORDER BY: rows come back in the table's natural order. `LIMIT NULL` means no cap.
    pub async fn find_matching(db: &PgPool, filter: &LogFilter) -> Result<Vec<Exercise>, StoreError> {
        let rows = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, user_id, description, duration, date
            FROM exercises
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR date >= $2)
              AND ($3::timestamptz IS NULL OR date <= $3)
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
