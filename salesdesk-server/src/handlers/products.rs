use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use salesdesk_core::{
    database::repositories::products::PRODUCT_NOT_FOUND, validation,
};
use salesdesk_model::{
    MessageResponse, NewProductRequest, Product, ProductId,
    UpdateProductRequest,
};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.unit_of_work().products.list().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Product>> {
    let Path(id) = path?;
    state
        .unit_of_work()
        .products
        .get(ProductId(id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))
}

/// Create a product
///
/// `preco` may be a JSON number or a numeric string. Negative or
/// non-numeric prices are rejected with `400 Bad Request`.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProductRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(request) = payload?;
    let product = validation::new_product(request)?;
    let created = state.unit_of_work().products.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let id = ProductId(id);
    let Json(request) = payload?;

    let products = &state.unit_of_work().products;
    if products.get(id).await?.is_none() {
        return Err(AppError::not_found(PRODUCT_NOT_FOUND));
    }

    let changes = validation::product_changes(request)?;
    products.update(id, changes).await?;

    Ok(Json(MessageResponse::new("Produto atualizado com sucesso!")))
}

/// Delete a product. Products referenced by an order line are kept and the
/// request fails with `400 Bad Request`.
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.unit_of_work().products.delete(ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
