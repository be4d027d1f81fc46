//! # Finances Backend
//!
//! REST backend for a personal finance tracker: users, categories and
//! income/expense transactions, plus balance reports computed on request.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum routers, DTO mapping)
//!     ↓
//! Domain Layer (services, validation, balance aggregation)
//!     ↓
//! Storage Layer (SQLite or in-memory repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Config, StorageBackend};
use crate::domain::{BalanceService, CategoryService, TransactionService, UserService};
use crate::io::rest::{balance_apis, category_apis, transaction_apis, user_apis};
use crate::storage::{Connection, DbConnection, MemoryConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
    pub category_service: CategoryService,
    pub user_service: UserService,
    pub balance_service: BalanceService,
}

impl AppState {
    /// Wires every service to repositories from the same connection.
    pub fn from_connection(connection: &dyn Connection) -> Self {
        Self {
            transaction_service: TransactionService::new(connection),
            category_service: CategoryService::new(connection),
            user_service: UserService::new(connection),
            balance_service: BalanceService::new(connection),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up {} storage", config.storage());
    let app_state = match config.storage() {
        StorageBackend::Sqlite => {
            let db = DbConnection::new(config.database_url())
                .await
                .with_context(|| format!("Failed to open database {}", config.database_url()))?;
            AppState::from_connection(&db)
        }
        StorageBackend::Memory => AppState::from_connection(&MemoryConnection::new()),
    };

    info!("Application state ready");
    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/balance", balance_apis::router())
        .nest("/transactions", transaction_apis::router())
        .nest("/categories", category_apis::router())
        .nest("/users", user_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::send;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    const USER: &str = "8a4f3c2e-6b1d-4f7a-9c3e-2d5b7a1e9f04";

    fn app() -> Router {
        let state = AppState::from_connection(&MemoryConnection::new());
        create_router(state, "http://localhost:8080").unwrap()
    }

    #[test]
    fn test_invalid_cors_origin_is_an_error() {
        let state = AppState::from_connection(&MemoryConnection::new());
        assert!(create_router(state, "http://bad\norigin").is_err());
    }

    #[tokio::test]
    async fn test_balance_reflects_created_transactions() {
        let app = app();

        let (status, category) = send(
            app.clone(),
            Method::POST,
            "/api/categories",
            Some(json!({ "name": "Salary" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let salary_id = category["id"].as_str().unwrap().to_string();

        for body in [
            json!({ "userId": USER, "title": "Pay", "amount": 200, "type": "income",
                    "categoryId": salary_id.as_str(), "date": "2024-02-10" }),
            json!({ "userId": USER, "title": "Food", "amount": 50, "type": "expense",
                    "categoryId": "c2", "date": "2024-02-20" }),
        ] {
            let (status, _) = send(app.clone(), Method::POST, "/api/transactions", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(
            app.clone(),
            Method::GET,
            &format!("/api/balance/total?userId={}", USER),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "total": 150.0 }));

        let (_, body) = send(
            app.clone(),
            Method::GET,
            &format!("/api/balance/by-category?userId={}", USER),
            None,
        )
        .await;
        assert_eq!(body[0]["categoryName"], "Salary");
        assert_eq!(body[1]["categoryName"], "uncategorized");

        // Removing the category leaves its transactions under the sentinel name
        let (status, _) = send(
            app.clone(),
            Method::DELETE,
            &format!("/api/categories/{}", salary_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(
            app,
            Method::GET,
            &format!("/api/balance/by-category?userId={}", USER),
            None,
        )
        .await;
        assert_eq!(body[0]["categoryId"], salary_id.as_str());
        assert_eq!(body[0]["categoryName"], "uncategorized");
        assert_eq!(body[0]["total"], 200.0);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = send(app(), Method::GET, "/api/nothing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
