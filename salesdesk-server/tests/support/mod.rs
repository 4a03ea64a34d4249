#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use salesdesk_core::{SqliteDatabase, api::routes::api};
use salesdesk_server::{
    AppState, create_app,
    infra::{
        config::Config,
        startup::{NoopStartupHooks, StartupHooks},
    },
};
use serde_json::{Value, json};

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

pub async fn build_test_app() -> Result<TestApp> {
    build_test_app_with_config(Config::in_memory(), &NoopStartupHooks).await
}

pub async fn build_test_app_with_hooks<H>(hooks: &H) -> Result<TestApp>
where
    H: StartupHooks,
{
    let mut config = Config::in_memory();
    config.seed.sample_data = true;
    build_test_app_with_config(config, hooks).await
}

pub async fn build_test_app_with_config<H>(
    config: Config,
    hooks: &H,
) -> Result<TestApp>
where
    H: StartupHooks,
{
    let database = SqliteDatabase::in_memory().await?;
    let state = AppState::new(Arc::new(config), database);
    hooks.run(&state).await?;

    let server = TestServer::builder()
        .build(create_app(state.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;

    Ok(TestApp { server, state })
}

pub async fn create_customer(server: &TestServer, name: &str, email: &str) -> i64 {
    let response = server
        .post(api::customers::COLLECTION)
        .json(&json!({ "nome": name, "email": email }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("customer id missing"))
}

pub async fn create_product(server: &TestServer, name: &str, price: Value) -> i64 {
    let response = server
        .post(api::products::COLLECTION)
        .json(&json!({ "nome": name, "preco": price }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("product id missing"))
}

pub fn error_message(body: &Value) -> &str {
    body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("error field missing in {body}"))
}
