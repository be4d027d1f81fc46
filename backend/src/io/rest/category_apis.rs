use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiResult;
use crate::io::rest::mappers::CategoryMapper;
use crate::AppState;
use shared::{Category, CreateCategoryRequest, UpdateCategoryRequest};

/// Create a router for category related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(remove_category),
        )
}

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let Json(request) = payload?;
    info!("POST /api/categories - request: {:?}", request);

    let category = state.category_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(CategoryMapper::to_dto(category))))
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    info!("GET /api/categories");

    let categories = state.category_service.find_all().await?;
    Ok(Json(categories.into_iter().map(CategoryMapper::to_dto).collect()))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Category>> {
    info!("GET /api/categories/{}", id);

    let category = state.category_service.find_one(&id).await?;
    Ok(Json(CategoryMapper::to_dto(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> ApiResult<Json<Category>> {
    let Json(request) = payload?;
    info!("PUT /api/categories/{} - request: {:?}", id, request);

    let category = state.category_service.update(&id, request).await?;
    Ok(Json(CategoryMapper::to_dto(category)))
}

pub async fn remove_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/categories/{}", id);

    state.category_service.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
