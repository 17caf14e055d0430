//! # Intelligence API Tests

mod common;

use anyhow::Result;
use common::{
    gemini_body, mount_gemini, mount_gemini_failure, mount_serper_failure, TestApp, GEMINI_PATH,
};
use serde_json::{json, Value};

#[tokio::test]
async fn test_notifications_endpoint_assigns_ids() -> Result<()> {
    // --- Arrange ---
    let app = TestApp::spawn().await?;
    let answer = json!([
        { "title": "Metro line closure", "message": "Blue line shut Sunday", "category": "Transport",
          "urgency": "medium", "source": "DMRC", "timestamp": "2026-10-18T06:00:00Z" }
    ]);
    mount_gemini(&app.mock_server, gemini_body(&answer.to_string(), &[])).await;

    // --- Act ---
    let response = app
        .client
        .get(app.url("/notifications?state=Delhi&leaders=Leader%20One,%20Leader%20Two"))
        .send()
        .await?;

    // --- Assert ---
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    let notifications = body["result"].as_array().cloned().unwrap_or_default();
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0]["id"].as_str().unwrap_or_default().is_empty());
    assert_eq!(notifications[0]["read"], false);

    let prompt = app.backend_bodies(GEMINI_PATH).await[0]["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(prompt.contains("notifications for Delhi."));
    assert!(prompt.contains("Leader One, Leader Two"));
    Ok(())
}

#[tokio::test]
async fn test_place_search_degrades_to_placeholder() -> Result<()> {
    // No maps mock is mounted, so the backend answers 404.
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/maps/search"))
        .json(&json!({ "query": "Ward 12 office", "latitude": 28.6, "longitude": 77.2 }))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["result"]["text"], "Location lookup limited.");
    assert_eq!(body["result"]["links"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_assistant_apologizes_when_backend_fails() -> Result<()> {
    let app = TestApp::spawn().await?;
    mount_gemini_failure(&app.mock_server, 500).await;

    let response = app
        .client
        .post(app.url("/assistant"))
        .json(&json!({ "user": "Asha", "message": "How do I report a pothole?" }))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert!(body["result"]["reply"]
        .as_str()
        .unwrap_or_default()
        .starts_with("I encountered an error."));

    let sent = &app.backend_bodies(GEMINI_PATH).await[0];
    let system = sent["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    assert!(system.contains("Respond in English."));
    Ok(())
}

#[tokio::test]
async fn test_dashboard_survives_backend_outage() -> Result<()> {
    let app = TestApp::spawn().await?;
    mount_gemini_failure(&app.mock_server, 500).await;
    mount_serper_failure(&app.mock_server).await;

    let response = app
        .client
        .get(app.url("/intel/dashboard?user=Asha&state=Kerala"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["result"]["insights"], json!([]));
    assert!(body["result"]["national"].is_null());
    assert!(body["result"]["state"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_state_intel_with_unusable_answer_has_null_data() -> Result<()> {
    let app = TestApp::spawn().await?;
    mount_gemini(
        &app.mock_server,
        gemini_body("No updates today.", &[("Kerala Govt", "https://kerala.gov.in")]),
    )
    .await;

    let response = app
        .client
        .get(app.url("/intel/states/Kerala?debug=true"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert!(body["result"]["data"].is_null());
    assert_eq!(body["result"]["sources"][0]["title"], "Kerala Govt");
    assert_eq!(body["debug"]["engine"], "Gemini");
    Ok(())
}

#[tokio::test]
async fn test_legal_standing_requires_constituency() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .get(app.url("/leaders/Some%20Leader/legal"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 400);
    assert!(app
        .mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .is_empty());
    Ok(())
}
