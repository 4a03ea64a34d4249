use anyhow::Result;
use axum::http::StatusCode;
use salesdesk_core::api::routes::{api, with_id};
use serde_json::{Value, json};

#[path = "support/mod.rs"]
mod support;
use support::{build_test_app, create_customer, create_product, error_message};

#[tokio::test]
async fn product_crud_lifecycle() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let response = server
        .post(api::products::COLLECTION)
        .json(&json!({ "nome": "Teclado", "preco": "299.90" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["nome"], "Teclado");
    assert_eq!(created["preco"], json!(299.9));
    let id = created["id"].as_i64().expect("id");

    let update = server
        .put(&with_id(api::products::ITEM, id))
        .json(&json!({ "preco": 250 }))
        .await;
    update.assert_status_ok();
    update.assert_json(&json!({ "message": "Produto atualizado com sucesso!" }));

    let fetched = server.get(&with_id(api::products::ITEM, id)).await;
    fetched.assert_status_ok();
    fetched.assert_json(&json!({ "id": id, "nome": "Teclado", "preco": 250.0 }));

    server
        .delete(&with_id(api::products::ITEM, id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = server.get(&with_id(api::products::ITEM, id)).await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_message(&gone.json()), "Produto não encontrado");

    Ok(())
}

#[tokio::test]
async fn create_validates_name_and_price() -> Result<()> {
    let app = build_test_app().await?;

    let cases = [
        (json!({ "preco": 10 }), "Nome e preço são obrigatórios"),
        (json!({ "nome": "Cabo" }), "Preço é obrigatório"),
        (json!({ "nome": "Cabo", "preco": "" }), "Preço é obrigatório"),
        (
            json!({ "nome": "Cabo", "preco": "dez" }),
            "Preço deve ser um número válido",
        ),
        (
            json!({ "nome": "Cabo", "preco": -1 }),
            "Preço não pode ser negativo",
        ),
    ];

    for (body, message) in cases {
        let response = app
            .server
            .post(api::products::COLLECTION)
            .json(&body)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&response.json()), message, "body: {body}");
    }

    let listed = app.server.get(api::products::COLLECTION).await;
    listed.assert_json(&json!([]));

    Ok(())
}

#[tokio::test]
async fn update_validates_present_fields() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;
    let id = create_product(server, "Cabo", json!(10)).await;

    let blank_price = server
        .put(&with_id(api::products::ITEM, id))
        .json(&json!({ "preco": null }))
        .await;
    blank_price.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&blank_price.json()),
        "Preço não pode ser vazio"
    );

    let negative = server
        .put(&with_id(api::products::ITEM, id))
        .json(&json!({ "preco": "-5" }))
        .await;
    negative.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&negative.json()),
        "Preço não pode ser negativo"
    );

    let missing = server
        .put(&with_id(api::products::ITEM, 999))
        .json(&json!({ "preco": "-5" }))
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn products_in_orders_cannot_be_deleted() -> Result<()> {
    let app = build_test_app().await?;
    let server = &app.server;

    let customer = create_customer(server, "Maria", "maria@example.com").await;
    let product = create_product(server, "Webcam", json!(250)).await;

    server
        .post(api::orders::COLLECTION)
        .json(&json!({
            "cliente_id": customer,
            "itens": [{ "produto_id": product, "quantidade": 1 }]
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete(&with_id(api::products::ITEM, product)).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&response.json()),
        "Não é possível deletar produto com pedidos associados."
    );

    server
        .get(&with_id(api::products::ITEM, product))
        .await
        .assert_status_ok();

    let unknown = server.delete(&with_id(api::products::ITEM, 999)).await;
    unknown.assert_status(StatusCode::NOT_FOUND);

    Ok(())
}
