//! Persistence seam between the handlers and the database.

use async_trait::async_trait;
use uuid::Uuid;

use crate::exercises::repo_types::{Exercise, LogFilter, NewExercise};
use crate::users::repo_types::{NewUser, User};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate value violates unique constraint {0}")]
    Duplicate(String),

    #[error("validation failed: {0}")]
    Invalid(&'static str),

    #[error("database error")]
    Backend(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                StoreError::Duplicate(db.constraint().unwrap_or("unknown").to_owned())
            }
            _ => StoreError::Backend(e),
        }
    }
}

/// Operations the API needs from the database. Field constraints are checked at write time.
#[async_trait]
pub trait TrackerStore: Send + Sync {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>;

    /// All users in the store's natural order.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Inserts an exercise. `user_id` is not checked against existing users here.
    async fn create_exercise(&self, new: NewExercise) -> Result<Exercise, StoreError>;

    async fn find_exercises(&self, filter: &LogFilter) -> Result<Vec<Exercise>, StoreError>;
}
