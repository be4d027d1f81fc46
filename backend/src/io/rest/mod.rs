//! # REST API Interface Layer
//!
//! HTTP endpoints for the finances backend. Each resource module exposes a
//! `router()` that is nested under `/api` by [`crate::create_router`].
//!
//! Handlers only parse and validate the request, call one service method and
//! map the result. Every failure is answered with an
//! [`ErrorResponse`](shared::ErrorResponse) body via [`error::ApiError`].

pub mod balance_apis;
pub mod category_apis;
pub mod error;
pub mod mappers;
pub mod transaction_apis;
pub mod user_apis;

pub use error::{ApiError, ApiResult};
