mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

async fn create_member(app: &TestApp, payload: Value) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/members")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await
}

/// Seeds one member per display state, with end dates relative to today:
/// GYM-A active (far future), GYM-B expiring soon (+3 days), GYM-C expired
/// (stored active, past end date), GYM-D suspended (future end date).
async fn seed_roster(app: &TestApp) {
    let today = Utc::now().date_naive();
    let fmt = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();

    create_member(app, json!({
        "fullName": "Far Future",
        "memberId": "GYM-A",
        "membershipType": "annual",
        "startDate": fmt(today - Duration::days(30)),
        "endDate": fmt(today + Duration::days(200))
    })).await;

    create_member(app, json!({
        "fullName": "Expiring Soon",
        "memberId": "GYM-B",
        "membershipType": "monthly",
        "startDate": fmt(today - Duration::days(27)),
        "endDate": fmt(today + Duration::days(3))
    })).await;

    create_member(app, json!({
        "fullName": "Quietly Lapsed",
        "memberId": "GYM-C",
        "membershipType": "monthly",
        "status": "active",
        "startDate": fmt(today - Duration::days(40)),
        "endDate": fmt(today - Duration::days(10))
    })).await;

    create_member(app, json!({
        "fullName": "On Hold",
        "memberId": "GYM-D",
        "membershipType": "quarterly",
        "status": "suspended",
        "startDate": fmt(today - Duration::days(10)),
        "endDate": fmt(today + Duration::days(80))
    })).await;
}

#[tokio::test]
async fn test_display_status_is_computed_on_read() {
    let app = TestApp::new().await;
    seed_roster(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/members")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let members = parse_body(res).await;

    let status_of = |code: &str| {
        members.as_array().unwrap().iter()
            .find(|m| m["memberId"] == code)
            .unwrap_or_else(|| panic!("member {} missing", code))
            ["displayStatus"].as_str().unwrap().to_string()
    };

    assert_eq!(status_of("GYM-A"), "Active");
    assert_eq!(status_of("GYM-B"), "Expiring Soon");
    // past end date overrides the stored "active" for display only
    assert_eq!(status_of("GYM-C"), "Expired");
    assert_eq!(status_of("GYM-D"), "Suspended");

    // the stored status is untouched by the date math
    let lapsed = members.as_array().unwrap().iter()
        .find(|m| m["memberId"] == "GYM-C").unwrap();
    assert_eq!(lapsed["status"], "active");
}

#[tokio::test]
async fn test_list_filter_uses_display_status() {
    let app = TestApp::new().await;
    seed_roster(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/members?status=expired")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let members = parse_body(res).await;
    let arr = members.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["memberId"], "GYM-C");

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/members?status=expiring-soon")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let members = parse_body(res).await;
    let arr = members.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["memberId"], "GYM-B");
}

#[tokio::test]
async fn test_stats_summarizes_the_roster() {
    let app = TestApp::new().await;
    seed_roster(&app).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/stats")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stats = parse_body(res).await;

    assert_eq!(stats["totalMembers"], 4);
    assert_eq!(stats["activeMembers"], 1);
    assert_eq!(stats["expiringSoon"], 1);
    assert_eq!(stats["expiredMembers"], 1);
    assert_eq!(stats["suspendedMembers"], 1);
    // everything was created just now
    assert_eq!(stats["newThisMonth"], 4);
    assert_eq!(stats["membersByType"]["monthly"], 2);
    assert_eq!(stats["membersByType"]["annual"], 1);
    assert_eq!(stats["membersByType"]["quarterly"], 1);
}

#[tokio::test]
async fn test_stats_on_empty_roster() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/stats")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let stats = parse_body(res).await;
    assert_eq!(stats["totalMembers"], 0);
    assert_eq!(stats["activeMembers"], 0);
}
