use axum::{
    extract::{rejection::FormRejection, State},
    routing::post,
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{CreateUserForm, PublicUser},
        repo_types::NewUser,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/users", post(create_user).get(list_users))
}

#[instrument(skip(state, form))]
pub async fn create_user(
    State(state): State<AppState>,
    form: Result<Form<CreateUserForm>, FormRejection>,
) -> Result<Json<PublicUser>, ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(%rejection, "registration form not readable, treating it as empty");
            CreateUserForm::default()
        }
    };
    let username = form.username.unwrap_or_default();
    let user = state
        .store
        .create_user(NewUser { username })
        .await
        .map_err(ApiError::internal("Error creating user"))?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = state
        .store
        .list_users()
        .await
        .map_err(ApiError::internal("Error fetching users"))?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}
