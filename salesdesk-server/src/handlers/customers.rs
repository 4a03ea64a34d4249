use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use salesdesk_core::{
    database::repositories::customers::CUSTOMER_NOT_FOUND, validation,
};
use salesdesk_model::{
    Customer, CustomerId, MessageResponse, NewCustomerRequest,
    UpdateCustomerRequest,
};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn list_customers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.unit_of_work().customers.list().await?;
    Ok(Json(customers))
}

pub async fn get_customer(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Customer>> {
    let Path(id) = path?;
    state
        .unit_of_work()
        .customers
        .get(CustomerId(id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(CUSTOMER_NOT_FOUND))
}

/// Create a customer
///
/// # Request
///
/// ```json
/// { "nome": "Maria Silva", "email": "maria@example.com" }
/// ```
///
/// # Response
///
/// - `201 Created` with the stored customer
/// - `400 Bad Request` when `nome` or `email` is missing
/// - `409 Conflict` when the email is already registered
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<NewCustomerRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let Json(request) = payload?;
    let customer = validation::new_customer(request)?;
    let created = state.unit_of_work().customers.create(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_customer(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let id = CustomerId(id);
    let Json(request) = payload?;

    let customers = &state.unit_of_work().customers;
    if customers.get(id).await?.is_none() {
        return Err(AppError::not_found(CUSTOMER_NOT_FOUND));
    }

    let changes = validation::customer_changes(request)?;
    customers.update(id, changes).await?;

    Ok(Json(MessageResponse::new("Cliente atualizado com sucesso!")))
}

/// Delete a customer together with its orders.
pub async fn delete_customer(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;
    state.unit_of_work().customers.delete(CustomerId(id)).await?;
    Ok(Json(MessageResponse::new("Cliente deletado com sucesso!")))
}
