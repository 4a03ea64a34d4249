//! Aggregate report payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::money::serialize_cents;
use crate::order::OrderStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "totalPedidos")]
    pub total_orders: i64,
    #[serde(rename = "valorTotalFaturado", serialize_with = "serialize_cents")]
    pub total_revenue: f64,
    #[serde(rename = "quantidadeTotalProdutos")]
    pub total_units: i64,
}

/// Row of the pending-orders report (orders still "Em andamento").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub id: OrderId,
    #[serde(rename = "cliente_nome")]
    pub customer_name: String,
    #[serde(rename = "data_pedido")]
    pub placed_at: NaiveDateTime,
    pub status: OrderStatus,
    #[serde(rename = "valor_total", serialize_with = "serialize_cents")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCustomer {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "totalPedidosRealizados")]
    pub order_count: i64,
}
