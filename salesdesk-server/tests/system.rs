use anyhow::Result;
use axum::http::StatusCode;
use salesdesk_core::api::routes::system;
use serde_json::Value;

#[path = "support/mod.rs"]
mod support;
use support::build_test_app;

#[tokio::test]
async fn index_serves_plain_text_banner() -> Result<()> {
    let app = build_test_app().await?;

    let response = app.server.get(system::INDEX).await;
    response.assert_status_ok();
    response.assert_text("Backend SalesDesk rodando!");

    Ok(())
}

#[tokio::test]
async fn ping_reports_version() -> Result<()> {
    let app = build_test_app().await?;

    let body: Value = app.server.get(system::PING).await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());

    Ok(())
}

#[tokio::test]
async fn health_checks_the_database() -> Result<()> {
    let app = build_test_app().await?;

    let response = app.server.get(system::HEALTH).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
    assert_eq!(body["checks"]["database"]["max_connections"], 1);

    Ok(())
}

#[tokio::test]
async fn health_is_unavailable_once_the_pool_is_closed() -> Result<()> {
    let app = build_test_app().await?;
    app.state.database().close().await;

    let response = app.server.get(system::HEALTH).await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["database"]["status"], "unhealthy");

    Ok(())
}

#[tokio::test]
async fn unknown_routes_are_not_found() -> Result<()> {
    let app = build_test_app().await?;

    app.server
        .get("/api/nao-existe")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    Ok(())
}
