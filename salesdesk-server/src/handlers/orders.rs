use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use salesdesk_core::{
    database::repositories::orders::ORDER_NOT_FOUND, validation,
};
use salesdesk_model::{
    MessageResponse, NewOrderRequest, Order, OrderCreated, OrderId,
    UpdateOrderRequest,
};
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// List every order with its customer name and lines.
pub async fn list_orders(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.unit_of_work().orders.list().await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Order>> {
    let Path(id) = path?;
    state
        .unit_of_work()
        .orders
        .get(OrderId(id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ORDER_NOT_FOUND))
}

/// Create an order
///
/// # Request
///
/// ```json
/// {
///   "cliente_id": 1,
///   "status": "Em andamento",
///   "itens": [{ "produto_id": 2, "quantidade": 3 }]
/// }
/// ```
///
/// # Response
///
/// - `201 Created` with `{id, cliente_id, valor_total, status}`
/// - `400 Bad Request` for a missing customer id, empty or malformed lines
/// - `404 Not Found` for an unknown customer or product
///
/// Lines are priced at the product's current price. Nothing is stored when
/// any line fails.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let Json(request) = payload?;
    let order = validation::new_order(request)?;
    let created = state.unit_of_work().orders.create(order).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an order. When `itens` is present every line is replaced and the
/// total recomputed.
pub async fn update_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let id = OrderId(id);
    let Json(request) = payload?;

    let orders = &state.unit_of_work().orders;
    if orders.get(id).await?.is_none() {
        return Err(AppError::not_found(ORDER_NOT_FOUND));
    }

    let changes = validation::order_changes(request)?;
    let order = orders.update(id, changes).await?;
    debug!(order_id = %order.id, total = order.total, "order updated");

    Ok(Json(MessageResponse::new("Pedido atualizado com sucesso!")))
}

pub async fn delete_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.unit_of_work().orders.delete(OrderId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
