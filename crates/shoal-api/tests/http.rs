use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shoal_ai::Assistant;
use shoal_api::router::router;
use shoal_api::state::AppStateInner;
use shoal_store::Store;

/// App with an empty store and no upstream language-model service, so
/// every assistant call takes the fallback branch.
fn test_app() -> Router {
    app_with_store(Store::new())
}

fn seeded_app() -> Router {
    app_with_store(Store::with_seed_data())
}

fn app_with_store(store: Store) -> Router {
    router(Arc::new(AppStateInner {
        store,
        assistant: Assistant::disabled(),
    }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_donation_returns_pending_record() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/donations",
        Some(json!({
            "userId": 1,
            "type": "donation",
            "fishType": "Tuna",
            "quantity": 10,
            "location": "Port X",
            "urgency": "high"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["matchedWith"], Value::Null);
    assert_eq!(body["urgency"], "high");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn create_donation_rejects_bad_enum_value() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/donations",
        Some(json!({
            "userId": 1,
            "type": "banana",
            "fishType": "Tuna",
            "quantity": 10,
            "location": "Port X"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_donation_rejects_missing_required_field() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/donations",
        Some(json!({ "userId": 1, "type": "donation" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_missing_donation_is_404() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/api/donations/99",
        Some(json!({ "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "donation 99 not found");
}

#[tokio::test]
async fn update_donation_merges_partial_fields() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/api/donations/1",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");
    // Untouched fields survive the merge.
    assert_eq!(body["fishType"], "Fresh Tuna");
    assert_eq!(body["quantity"], 50);
}

#[tokio::test]
async fn delete_donation_confirms_and_is_idempotent() {
    let app = seeded_app();
    let (status, body) = send(&app, "DELETE", "/api/donations/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Donation deleted successfully");

    let (status, _) = send(&app, "DELETE", "/api/donations/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/api/donations", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn donations_filter_by_user() {
    let app = seeded_app();
    let (status, list) = send(&app, "GET", "/api/donations?userId=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["userId"], 2);
}

#[tokio::test]
async fn match_finds_opposite_kind_in_same_location() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/donations/match",
        Some(json!({ "donationId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["id"], 2);
    assert_eq!(matches[0]["type"], "request");
    assert_eq!(matches[0]["location"], "Mumbai Port, India");
}

#[tokio::test]
async fn match_unknown_donation_is_404() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/donations/match",
        Some(json!({ "donationId": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn get_user_found_and_missing() {
    let app = seeded_app();
    let (status, body) = send(&app, "GET", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "John Fisher");

    let (status, _) = send(&app, "GET", "/api/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Query-string spelling of the same lookup.
    let (status, body) = send(&app, "GET", "/api/users?id=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maria Santos");

    let (status, _) = send(&app, "GET", "/api/users?id=99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_user_defaults_role() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "name": "New Fisher", "email": "new@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "user");
    assert_eq!(body["avatar"], Value::Null);
}

#[tokio::test]
async fn alerts_active_filter_and_route() {
    let app = seeded_app();

    // Deactivate one alert, then both active views should shrink.
    let (status, _) = send(&app, "PUT", "/api/alerts/1", Some(json!({ "active": false }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = send(&app, "GET", "/api/alerts", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, filtered) = send(&app, "GET", "/api/alerts?active=true", None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 2);

    let (_, route) = send(&app, "GET", "/api/alerts/active", None).await;
    assert_eq!(route.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn demo_alerts_stay_within_fixed_templates() {
    let app = test_app();
    let locations = ["Bay of Bengal", "Mumbai Fish Market", "Arabian Sea"];
    let kinds = ["weather", "info", "disaster"];

    for _ in 0..100 {
        let (status, body) = send(&app, "POST", "/api/alerts/demo", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(kinds.contains(&body["type"].as_str().unwrap()));
        assert!(locations.contains(&body["location"].as_str().unwrap()));
        assert_eq!(body["active"], true);
    }
}

#[tokio::test]
async fn generate_weather_alert_uses_fallback_when_service_is_down() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/alerts/generate-weather",
        Some(json!({ "location": "Mumbai Coast", "condition": "high winds" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "weather");
    assert_eq!(body["severity"], "medium");
    assert_eq!(body["location"], "Mumbai Coast");
    assert_eq!(body["active"], true);
    assert_eq!(body["message"], "Weather alert for Mumbai Coast: high winds");
}

#[tokio::test]
async fn chat_send_survives_assistant_failure_and_persists_both_sides() {
    let app = test_app();
    let (status, reply) = send(
        &app,
        "POST",
        "/api/chat/send",
        Some(json!({ "message": "Is it safe to fish today?", "userId": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["intent"], "error");
    assert_eq!(reply["language"], "en");
    assert!(reply["message"].as_str().unwrap().contains("technical difficulties"));

    let (_, messages) = send(&app, "GET", "/api/chat/messages?userId=7", None).await;
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["isUser"], true);
    assert_eq!(messages[0]["message"], "Is it safe to fish today?");
    assert_eq!(messages[1]["isUser"], false);
    assert_eq!(messages[1]["message"], reply["message"]);
}

#[tokio::test]
async fn chat_messages_come_back_oldest_first() {
    let app = seeded_app();
    let (status, messages) = send(&app, "GET", "/api/chat/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0]["createdAt"].as_str() <= messages[1]["createdAt"].as_str());
}

#[tokio::test]
async fn export_snapshot_carries_statistics() {
    let app = seeded_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/export/json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("attachment")
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    let stats = &body["statistics"];
    assert_eq!(stats["totalUsers"], 3);
    assert_eq!(stats["totalDonations"], 3);
    assert_eq!(stats["totalAlerts"], 3);
    assert_eq!(stats["totalMessages"], 2);
    assert_eq!(stats["totalFishDonated"], 105);
    assert_eq!(stats["activeDonations"], 2);
    assert_eq!(stats["activeAlerts"], 3);
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn wrong_method_is_405_with_json_body() {
    let app = test_app();
    let (status, body) = send(&app, "DELETE", "/api/chat/send", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method Not Allowed");
}

#[tokio::test]
async fn unknown_route_is_404_with_json_body() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}
