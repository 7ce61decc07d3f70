mod common;

use chrono::{Duration, Utc};
use serde_json::Value;

#[tokio::test]
async fn test_stats_returns_history_newest_first() {
    let ctx = common::test_context();
    let now = Utc::now();

    common::seed_link(&ctx, "ex1", "https://example.com", None).await;
    common::seed_click(&ctx, "ex1", "10.0.0.1", now - Duration::minutes(2)).await;
    common::seed_click(&ctx, "ex1", "10.0.0.2", now - Duration::minutes(1)).await;

    let server = common::test_server(&ctx);

    let response = server.get("/stats/ex1").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    let url = &json["data"]["url"];
    assert_eq!(url["originalUrl"], "https://example.com");
    assert_eq!(url["shortCode"], "ex1");
    assert!(url["createdAt"].is_string());

    let statistics = json["data"]["statistics"].as_array().unwrap();
    assert_eq!(statistics.len(), 2);
    assert_eq!(statistics[0]["ipAddress"], "10.0.0.2");
    assert_eq!(statistics[1]["ipAddress"], "10.0.0.1");
    assert_eq!(statistics[0]["userAgent"], "test-agent");
    assert!(statistics[0]["clickedAt"].is_string());
}

#[tokio::test]
async fn test_stats_after_redirect() {
    let ctx = common::test_context();
    common::seed_link(&ctx, "ex1", "https://example.com", None).await;
    let server = common::test_server(&ctx);

    server.get("/ex1").await;

    let json = server.get("/stats/ex1").await.json::<Value>();
    assert_eq!(json["data"]["url"]["clickCount"], 1);
    assert_eq!(json["data"]["statistics"][0]["ipAddress"], common::PEER_IP);
}

#[tokio::test]
async fn test_stats_expired_link_not_found() {
    let ctx = common::test_context();
    common::seed_link(
        &ctx,
        "old",
        "https://example.com",
        Some(Utc::now() - Duration::seconds(30)),
    )
    .await;
    let server = common::test_server(&ctx);

    server.get("/stats/old").await.assert_status_not_found();
}

#[tokio::test]
async fn test_stats_not_found() {
    let ctx = common::test_context();
    let server = common::test_server(&ctx);

    let response = server.get("/stats/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}
