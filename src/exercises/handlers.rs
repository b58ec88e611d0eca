use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Form, Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    error::ApiError,
    exercises::{
        dto::{AddExerciseForm, ExerciseResponse, LogQuery, LogResponse},
        services,
    },
    state::AppState,
};

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/:id/exercises", post(add_exercise))
        .route("/api/users/:id/logs", get(get_log))
}

#[instrument(skip(state, form))]
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<AddExerciseForm>, FormRejection>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    // An unreadable body carries no fields; the user lookup still decides the outcome.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(%rejection, "exercise form not readable, treating it as empty");
            AddExerciseForm::default()
        }
    };
    let exercise = services::add_exercise(state.store.as_ref(), &id, form).await?;
    Ok(Json(exercise))
}

#[instrument(skip(state, query))]
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LogResponse>, ApiError> {
    let query = match query {
        Ok(Query(pairs)) => LogQuery::from_pairs(pairs),
        Err(rejection) => {
            warn!(%rejection, "log query not readable, ignoring it");
            LogQuery::default()
        }
    };
    let log = services::exercise_log(state.store.as_ref(), &id, query).await?;
    Ok(Json(log))
}
