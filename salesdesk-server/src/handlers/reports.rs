use axum::{Json, extract::State};
use salesdesk_model::{ActiveCustomer, PendingOrder, SalesSummary};

use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn sales_summary(
    State(state): State<AppState>,
) -> AppResult<Json<SalesSummary>> {
    Ok(Json(state.unit_of_work().reports.sales_summary().await?))
}

/// Orders still "Em andamento".
pub async fn pending_orders(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PendingOrder>>> {
    Ok(Json(state.unit_of_work().reports.pending_orders().await?))
}

pub async fn most_active_customers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActiveCustomer>>> {
    Ok(Json(
        state.unit_of_work().reports.most_active_customers().await?,
    ))
}
