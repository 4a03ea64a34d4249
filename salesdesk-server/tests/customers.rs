use anyhow::Result;
use axum::http::StatusCode;
use salesdesk_core::api::routes::{api, with_id};
use serde_json::{Value, json};

#[path = "support/mod.rs"]
mod support;
use support::{build_test_app, create_customer, create_product, error_message};

#[tokio::test]
async fn customer_crud_lifecycle() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let response = server
        .post(api::customers::COLLECTION)
        .json(&json!({ "nome": "Ana Lima", "email": "ana@example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["nome"], "Ana Lima");
    assert_eq!(created["email"], "ana@example.com");
    let id = created["id"].as_i64().expect("id");

    let list = server.get(api::customers::COLLECTION).await;
    list.assert_status_ok();
    list.assert_json(&json!([
        { "id": id, "nome": "Ana Lima", "email": "ana@example.com" }
    ]));

    let update = server
        .put(&with_id(api::customers::ITEM, id))
        .json(&json!({ "nome": "Ana Paula Lima" }))
        .await;
    update.assert_status_ok();
    update.assert_json(&json!({ "message": "Cliente atualizado com sucesso!" }));

    let fetched = server.get(&with_id(api::customers::ITEM, id)).await;
    fetched.assert_status_ok();
    fetched.assert_json(&json!({
        "id": id,
        "nome": "Ana Paula Lima",
        "email": "ana@example.com"
    }));

    let delete = server.delete(&with_id(api::customers::ITEM, id)).await;
    delete.assert_status_ok();
    delete.assert_json(&json!({ "message": "Cliente deletado com sucesso!" }));

    let gone = server.get(&with_id(api::customers::ITEM, id)).await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_message(&gone.json()), "Cliente não encontrado");

    Ok(())
}

#[tokio::test]
async fn create_requires_name_and_email() -> Result<()> {
    let app = build_test_app().await?;

    for body in [
        json!({ "nome": "Sem Email" }),
        json!({ "email": "sem-nome@example.com" }),
        json!({ "nome": "   ", "email": "blank@example.com" }),
        json!({}),
    ] {
        let response = app
            .server
            .post(api::customers::COLLECTION)
            .json(&body)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(&response.json()),
            "Nome e email são obrigatórios"
        );
    }

    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    create_customer(server, "Maria", "maria@example.com").await;

    let response = server
        .post(api::customers::COLLECTION)
        .json(&json!({ "nome": "Outra Maria", "email": "maria@example.com" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(error_message(&response.json()), "Email já cadastrado");

    Ok(())
}

#[tokio::test]
async fn update_rejects_email_owned_by_another_customer() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    create_customer(server, "Maria", "maria@example.com").await;
    let joao = create_customer(server, "João", "joao@example.com").await;

    let response = server
        .put(&with_id(api::customers::ITEM, joao))
        .json(&json!({ "email": "maria@example.com" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        error_message(&response.json()),
        "Email já cadastrado para outro cliente"
    );

    // Keeping one's own email is not a conflict.
    let response = server
        .put(&with_id(api::customers::ITEM, joao))
        .json(&json!({ "email": "joao@example.com" }))
        .await;
    response.assert_status_ok();

    Ok(())
}

#[tokio::test]
async fn update_checks_existence_before_payload() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let missing = server
        .put(&with_id(api::customers::ITEM, 999))
        .json(&json!({ "nome": "" }))
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);

    let id = create_customer(server, "Maria", "maria@example.com").await;
    let blank = server
        .put(&with_id(api::customers::ITEM, id))
        .json(&json!({ "nome": "" }))
        .await;
    blank.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&blank.json()), "Nome não pode ser vazio");

    Ok(())
}

#[tokio::test]
async fn deleting_a_customer_removes_their_orders() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let customer = create_customer(server, "Maria", "maria@example.com").await;
    let product = create_product(server, "Mouse", json!(150.0)).await;

    server
        .post(api::orders::COLLECTION)
        .json(&json!({
            "cliente_id": customer,
            "itens": [{ "produto_id": product, "quantidade": 2 }]
        }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&with_id(api::customers::ITEM, customer))
        .await
        .assert_status_ok();

    let orders = server.get(api::orders::COLLECTION).await;
    orders.assert_status_ok();
    orders.assert_json(&json!([]));

    // The product is no longer referenced and can go too.
    server
        .delete(&with_id(api::products::ITEM, product))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn deleting_an_unknown_customer_is_not_found() -> Result<()> {
    let app = build_test_app().await?;

    let response = app
        .server
        .delete(&with_id(api::customers::ITEM, 42))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response.json()), "Cliente não encontrado");

    Ok(())
}

#[tokio::test]
async fn malformed_bodies_and_ids_are_bad_requests() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let not_json = server
        .post(api::customers::COLLECTION)
        .text("nome=Maria")
        .await;
    not_json.assert_status(StatusCode::BAD_REQUEST);
    assert!(not_json.json::<Value>()["error"].is_string());

    let bad_id = server.get("/api/clientes/abc").await;
    bad_id.assert_status(StatusCode::BAD_REQUEST);
    assert!(bad_id.json::<Value>()["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn names_and_emails_are_stored_as_sent() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let padded = server
        .post(api::customers::COLLECTION)
        .json(&json!({ "nome": " Maria ", "email": " maria@example.com" }))
        .await;
    padded.assert_status(StatusCode::CREATED);
    let body: Value = padded.json();
    assert_eq!(body["nome"], " Maria ");
    assert_eq!(body["email"], " maria@example.com");

    // Uniqueness compares the stored text.
    create_customer(server, "Maria", "maria@example.com").await;

    let customers: Vec<Value> = server.get(api::customers::COLLECTION).await.json();
    assert_eq!(customers.len(), 2);

    Ok(())
}
