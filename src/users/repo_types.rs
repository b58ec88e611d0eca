use sqlx::FromRow;
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.username.is_empty() {
            return Err(StoreError::Invalid("username is required"));
        }
        Ok(())
    }
}
