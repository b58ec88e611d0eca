//! In-memory store used to exercise the HTTP layer without a database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::exercises::repo_types::{Exercise, LogFilter, NewExercise};
use crate::store::{StoreError, TrackerStore};
use crate::users::repo_types::{NewUser, User};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<Exercise>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Makes every subsequent operation fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn in_filter(filter: &LogFilter, exercise: &Exercise) -> bool {
    exercise.user_id == filter.user_id
        && filter.from.map_or(true, |from| exercise.date >= from)
        && filter.to.map_or(true, |to| exercise.date <= to)
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        self.check_available()?;
        new.validate()?;
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == new.username) {
            return Err(StoreError::Duplicate("users_username_key".into()));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: new.username,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.check_available()?;
        Ok(self.users.read().await.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.check_available()?;
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn create_exercise(&self, new: NewExercise) -> Result<Exercise, StoreError> {
        self.check_available()?;
        let duration = new.validate()?;
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            description: new.description,
            duration,
            date: new.date.unwrap_or_else(OffsetDateTime::now_utc),
        };
        self.exercises.write().await.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_exercises(&self, filter: &LogFilter) -> Result<Vec<Exercise>, StoreError> {
        self.check_available()?;
        let cap = filter
            .limit
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);
        Ok(self
            .exercises
            .read()
            .await
            .iter()
            .filter(|e| in_filter(filter, e))
            .take(cap)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = MemoryStore::default();
        store.create_user(NewUser { username: "ana".into() }).await.unwrap();
        let err = store.create_user(NewUser { username: "ana".into() }).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        assert_eq!(1, store.list_users().await.unwrap().len());
    }

    #[tokio::test]
    async fn empty_username_fails_validation() {
        let store = MemoryStore::default();
        let err = store.create_user(NewUser { username: String::new() }).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn find_exercises_applies_filter_and_cap_in_insertion_order() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();
        for (description, date) in [
            ("a", datetime!(2023-01-20 00:00 UTC)),
            ("b", datetime!(2023-01-10 00:00 UTC)),
            ("c", datetime!(2023-01-15 00:00 UTC)),
        ] {
            store
                .create_exercise(NewExercise {
                    user_id,
                    description: description.into(),
                    duration: Some(1),
                    date: Some(date),
                })
                .await
                .unwrap();
        }

        let mut filter = LogFilter::for_user(user_id);
        filter.from = Some(datetime!(2023-01-12 00:00 UTC));
        let found = store.find_exercises(&filter).await.unwrap();
        let descriptions: Vec<_> = found.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(vec!["a", "c"], descriptions);

        filter.limit = Some(1);
        assert_eq!(1, store.find_exercises(&filter).await.unwrap().len());
    }

    #[test]
    fn bounds_are_inclusive_and_independent() {
        let user_id = Uuid::new_v4();
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id,
            description: "run".into(),
            duration: 30,
            date: datetime!(2023-01-15 00:00 UTC),
        };

        let mut filter = LogFilter::for_user(user_id);
        assert!(in_filter(&filter, &exercise));

        filter.from = Some(datetime!(2023-01-15 00:00 UTC));
        filter.to = Some(datetime!(2023-01-15 00:00 UTC));
        assert!(in_filter(&filter, &exercise));

        filter.from = Some(datetime!(2023-01-20 00:00 UTC));
        filter.to = Some(datetime!(2023-01-10 00:00 UTC));
        assert!(!in_filter(&filter, &exercise));

        assert!(!in_filter(&LogFilter::for_user(Uuid::new_v4()), &exercise));
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = MemoryStore::default();
        store.set_unavailable(true);
        assert!(matches!(store.list_users().await, Err(StoreError::Backend(_))));
        assert!(matches!(store.find_user(Uuid::new_v4()).await, Err(StoreError::Backend(_))));
    }
}
