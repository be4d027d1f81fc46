use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiResult;
use crate::io::rest::mappers::UserMapper;
use crate::AppState;
use shared::{CreateUserRequest, UpdateUserRequest, User};

/// Create a router for user related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(request) = payload?;
    info!("POST /api/users - email: {}", request.email);

    let user = state.user_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(UserMapper::to_dto(user))))
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    info!("GET /api/users");

    let users = state.user_service.find_all().await?;
    Ok(Json(users.into_iter().map(UserMapper::to_dto).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    info!("GET /api/users/{}", id);

    let user = state.user_service.find_by_id(&id).await?;
    Ok(Json(UserMapper::to_dto(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(request) = payload?;
    info!("PUT /api/users/{} - request: {:?}", id, request);

    let user = state.user_service.update(&id, request).await?;
    Ok(Json(UserMapper::to_dto(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/users/{}", id);

    state.user_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
