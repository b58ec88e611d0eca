use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: OffsetDateTime,
}

/// An exercise about to be written. `duration` is `None` when the input was not a number;
/// `date` is `None` when the client omitted it and the store should use the current time.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: Option<i32>,
    pub date: Option<OffsetDateTime>,
}

impl NewExercise {
    /// Checks the field constraints and returns the duration to store.
    pub fn validate(&self) -> Result<i32, StoreError> {
        if self.description.is_empty() {
            return Err(StoreError::Invalid("description is required"));
        }
        self.duration
            .ok_or(StoreError::Invalid("duration must be a number"))
    }
}

/// Selection of a user's exercises for the log endpoint. Both date bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub user_id: Uuid,
    pub from: Option<OffsetDateTime>,
    pub to: Option<OffsetDateTime>,
    pub limit: Option<i64>,
}

impl LogFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }
}
