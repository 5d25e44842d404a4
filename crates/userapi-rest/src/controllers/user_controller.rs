//! Users resource controller.
//!
//! Each handler is one repository call; for Update and Delete the
//! existence of the target row is inferred from the rows-affected
//! count after the mutation, never from a preceding read.

use crate::{
    dto::{CreatedUserResponse, UpdatedUserResponse, UserListResponse, UserPayload},
    responses::{ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;
use userapi_core::{User, UserApiError};

/// Creates the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users.
async fn list_users(State(state): State<AppState>) -> ApiResult<UserListResponse> {
    debug!("List users request");

    let users = state.users.find_all().await?;
    Ok(Json(UserListResponse { users }))
}

/// Get a user by id.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    debug!("Get user request: {}", id);

    match state.users.find_by_id(&id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError(UserApiError::NotFound)),
    }
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<UserPayload>>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), AppError> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    debug!("Create user request: {:?}", payload.name);

    let id = state
        .users
        .insert(payload.name.as_deref(), payload.email.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            id,
            name: payload.name,
            email: payload.email,
        }),
    ))
}

/// Update an existing user.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<UserPayload>>,
) -> ApiResult<UpdatedUserResponse> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    debug!("Update user request: {}", id);

    let affected = state
        .users
        .update(&id, payload.name.as_deref(), payload.email.as_deref())
        .await?;

    if affected == 0 {
        return Err(AppError(UserApiError::NotFound));
    }

    Ok(Json(UpdatedUserResponse {
        id,
        name: payload.name,
        email: payload.email,
    }))
}

/// Delete a user.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let affected = state.users.delete(&id).await?;

    if affected == 0 {
        return Err(AppError(UserApiError::NotFound));
    }

    Ok(StatusCode::NO_CONTENT)
}
