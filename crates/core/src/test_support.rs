use crate::domain::ApplicantProfile;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Spawns a local provider stand-in. `respond` sees the decoded request body
/// and decides the status and JSON answer. Returns the endpoint URL.
pub(crate) async fn spawn_provider<F>(respond: F) -> String
where
    F: Fn(Value) -> (StatusCode, Value) + Clone + Send + Sync + 'static,
{
    let app = Router::new().route(
        "/cards",
        post(move |Json(body): Json<Value>| {
            let respond = respond.clone();
            async move {
                let (status, answer) = respond(body);
                (status, Json(answer))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/cards")
}

/// An endpoint on a port nothing listens on.
pub(crate) async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/cards")
}

pub(crate) fn john_smith() -> ApplicantProfile {
    ApplicantProfile {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        dob: Some("1991/04/18".to_string()),
        credit_score: 500,
        employment_status: Some("FULL_TIME".to_string()),
        salary: 30000,
    }
}

pub(crate) fn cscards_records() -> Value {
    json!([
        {
            "apr": 21.4,
            "cardName": "SuperSaver Card",
            "eligibility": 6.3,
            "url": "http://www.example.com/apply"
        },
        {
            "apr": 19.2,
            "cardName": "SuperSpender Card",
            "eligibility": 5.0,
            "features": ["Interest free purchases for 6 months"],
            "url": "http://www.example.com/apply"
        }
    ])
}

pub(crate) fn scoredcards_records() -> Value {
    json!([
        {
            "annual-percentage-rate": 19.4,
            "apply-url": "http://www.example.com/apply",
            "approval-rating": 0.8,
            "attributes": ["Supports ApplePay"],
            "card": "ScoredCard Builder",
            "introductory-offers": ["Interest free purchases for 1 month"]
        }
    ])
}

/// Mimics CSCards: rejects requests without a date of birth.
pub(crate) fn cscards_behaviour(body: Value) -> (StatusCode, Value) {
    if body.get("dateOfBirth").map_or(true, Value::is_null) {
        return (
            StatusCode::BAD_REQUEST,
            json!({"message": "dateOfBirth is required"}),
        );
    }
    (StatusCode::OK, cscards_records())
}

/// Mimics ScoredCards: rejects requests without an employment status.
pub(crate) fn scoredcards_behaviour(body: Value) -> (StatusCode, Value) {
    if body.get("employment-status").map_or(true, Value::is_null) {
        return (
            StatusCode::BAD_REQUEST,
            json!({"message": "employment-status is required"}),
        );
    }
    (StatusCode::OK, scoredcards_records())
}
