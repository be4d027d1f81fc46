//! # REST API for Balance Reports
//!
//! Read-only endpoints over the balance aggregator. Query parameters are
//! validated here; the aggregator assumes well-formed input.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use crate::domain::validation::{require_date, require_uuid_v4};
use crate::io::rest::error::ApiResult;
use crate::io::rest::mappers::BalanceMapper;
use crate::AppState;
use shared::{BalanceByCategory, BalanceByPeriod, TotalBalanceResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/total", get(get_total_balance))
        .route("/by-period", get(get_balance_by_period))
        .route("/by-category", get(get_balance_by_category))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    pub user_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/balance/total?userId=
pub async fn get_total_balance(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Json<TotalBalanceResponse>> {
    let Query(query) = query?;
    info!("GET /api/balance/total - userId: {:?}", query.user_id);

    let user_id = require_uuid_v4("userId", query.user_id.as_deref())?;
    let total = state.balance_service.total_balance(&user_id).await?;

    Ok(Json(BalanceMapper::to_total_response(total)))
}

/// GET /api/balance/by-period?userId=&startDate=&endDate=
pub async fn get_balance_by_period(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<BalanceByPeriod>>> {
    let Query(query) = query?;
    info!("GET /api/balance/by-period - query: {:?}", query);

    let user_id = require_uuid_v4("userId", query.user_id.as_deref())?;
    let start_date = require_date("startDate", query.start_date.as_deref())?;
    let end_date = require_date("endDate", query.end_date.as_deref())?;

    let periods = state
        .balance_service
        .balance_by_period(&user_id, start_date, end_date)
        .await?;

    Ok(Json(periods.into_iter().map(BalanceMapper::to_period_dto).collect()))
}

/// GET /api/balance/by-category?userId=
pub async fn get_balance_by_category(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<BalanceByCategory>>> {
    let Query(query) = query?;
    info!("GET /api/balance/by-category - userId: {:?}", query.user_id);

    let user_id = require_uuid_v4("userId", query.user_id.as_deref())?;
    let groups = state.balance_service.balance_by_category(&user_id).await?;

    Ok(Json(groups.into_iter().map(BalanceMapper::to_category_dto).collect()))
}
