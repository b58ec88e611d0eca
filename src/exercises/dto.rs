use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Form body for logging an exercise. Everything arrives as text and is parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct AddExerciseForm {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Default)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    /// Collects the known parameters from raw query pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// The owning user flattened together with the new exercise.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct LogResponse {
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}
