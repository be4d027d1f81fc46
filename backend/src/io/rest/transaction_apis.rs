//! # REST API for Transactions
//!
//! CRUD endpoints under `/api/transactions`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiResult;
use crate::io::rest::mappers::TransactionMapper;
use crate::AppState;
use shared::{CreateTransactionRequest, Transaction, UpdateTransactionRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route(
            "/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let Json(request) = payload?;
    info!("POST /api/transactions - request: {:?}", request);

    let transaction = state.transaction_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(TransactionMapper::to_dto(transaction))))
}

pub async fn list_transactions(State(state): State<AppState>) -> ApiResult<Json<Vec<Transaction>>> {
    info!("GET /api/transactions");

    let transactions = state.transaction_service.find_all().await?;
    Ok(Json(TransactionMapper::to_dtos(transactions)))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Transaction>> {
    info!("GET /api/transactions/{}", id);

    let transaction = state.transaction_service.find_by_id(&id).await?;
    Ok(Json(TransactionMapper::to_dto(transaction)))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> ApiResult<Json<Transaction>> {
    let Json(request) = payload?;
    info!("PUT /api/transactions/{} - request: {:?}", id, request);

    let transaction = state.transaction_service.update(&id, request).await?;
    Ok(Json(TransactionMapper::to_dto(transaction)))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("DELETE /api/transactions/{}", id);

    state.transaction_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
