use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo_types::User;

/// Form body for user registration.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserForm {
    pub username: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
