//! PostgreSQL implementation of the store.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::exercises::repo_types::{Exercise, LogFilter, NewExercise};
use crate::store::{StoreError, TrackerStore};
use crate::users::repo_types::{NewUser, User};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        info!("database connection successful");
        Ok(Self::from_pool(db))
    }

    pub fn from_pool(db: PgPool) -> Self {
        Self { db }
    }

    /// Applies `migrations/`. A failure is logged and startup continues.
    pub async fn migrate(&self) {
        if let Err(e) = sqlx::migrate!("./migrations").run(&self.db).await {
            warn!(error = %e, "migration failed; continuing");
        }
    }
}

#[async_trait]
impl TrackerStore for PgStore {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        new.validate()?;
        User::create(&self.db, &new.username).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        User::list(&self.db).await
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        User::find_by_id(&self.db, id).await
    }

    async fn create_exercise(&self, new: NewExercise) -> Result<Exercise, StoreError> {
        let duration = new.validate()?;
        Exercise::insert(&self.db, new.user_id, &new.description, duration, new.date).await
    }

    async fn find_exercises(&self, filter: &LogFilter) -> Result<Vec<Exercise>, StoreError> {
        Exercise::find_matching(&self.db, filter).await
    }
}
