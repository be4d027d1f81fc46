//! Fixtures shared by the unit tests.
use crate::domain::models::{Category, Transaction, TransactionType, User};
use crate::domain::timestamps::parse_iso8601;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A transaction dated `date`; created/updated timestamps match the date so
/// values survive a storage round trip unchanged.
pub fn transaction_on(
    user_id: &str,
    date: &str,
    transaction_type: TransactionType,
    amount: f64,
    category_id: &str,
) -> Transaction {
    let date = parse_iso8601(date).expect("test date must parse");
    Transaction {
        id: Transaction::generate_id(),
        user_id: user_id.to_string(),
        title: format!("{} {}", transaction_type, amount),
        description: None,
        amount,
        transaction_type,
        category_id: category_id.to_string(),
        date,
        created_at: date,
        updated_at: date,
    }
}

pub fn category_named(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

pub fn user_with_email(email: &str) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    User {
        id: User::generate_id(),
        email: email.to_string(),
        name,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

/// Sends one request through `app` and returns the status with the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
