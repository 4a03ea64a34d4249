use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{CustomerId, OrderId, OrderItemId, ProductId};
use crate::money::serialize_cents;

/// Lifecycle label of an order.
///
/// Stored and transmitted as free text. The three labels the web client
/// offers map to named variants; anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub const IN_PROGRESS: &'static str = "Em andamento";
    pub const COMPLETED: &'static str = "Finalizado";
    pub const CANCELLED: &'static str = "Cancelado";

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::InProgress => Self::IN_PROGRESS,
            OrderStatus::Completed => Self::COMPLETED,
            OrderStatus::Cancelled => Self::CANCELLED,
            OrderStatus::Other(label) => label,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::InProgress)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::IN_PROGRESS => OrderStatus::InProgress,
            Self::COMPLETED => OrderStatus::Completed,
            Self::CANCELLED => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        OrderStatus::from(value.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order with its customer name and priced lines, as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "cliente_id")]
    pub customer_id: CustomerId,
    #[serde(rename = "cliente_nome")]
    pub customer_name: String,
    #[serde(rename = "data_pedido")]
    pub placed_at: NaiveDateTime,
    pub status: OrderStatus,
    #[serde(rename = "valor_total", serialize_with = "serialize_cents")]
    pub total: f64,
    #[serde(rename = "itens")]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    #[serde(rename = "produto_id")]
    pub product_id: ProductId,
    #[serde(rename = "produto_nome")]
    pub product_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    /// Product price captured when the line was written.
    #[serde(rename = "preco_unitario")]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Response body of `POST /api/pedidos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: OrderId,
    #[serde(rename = "cliente_id")]
    pub customer_id: CustomerId,
    #[serde(rename = "valor_total", serialize_with = "serialize_cents")]
    pub total: f64,
    pub status: OrderStatus,
}

/// One requested line of an order payload.
///
/// Both fields stay untyped JSON so a float, string or boolean reaches line
/// validation instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    #[serde(rename = "produto_id", default)]
    pub product_id: Option<Value>,
    #[serde(rename = "quantidade", default)]
    pub quantity: Option<Value>,
}

impl OrderItemRequest {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id: Some(Value::from(product_id)),
            quantity: Some(Value::from(quantity)),
        }
    }
}

/// Raw body of `POST /api/pedidos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewOrderRequest {
    #[serde(rename = "cliente_id", default)]
    pub customer_id: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "itens", default)]
    pub items: Option<Vec<OrderItemRequest>>,
}

/// Raw body of `PUT /api/pedidos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "cliente_id", default)]
    pub customer_id: Option<Value>,
    #[serde(rename = "itens", default)]
    pub items: Option<Vec<OrderItemRequest>>,
}

/// A line that passed validation and can be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Order creation input.
///
/// Lines are kept as requested: each one is validated right before it is
/// priced, so the first offending line decides which error is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub items: Vec<OrderItemRequest>,
}

/// Partial order update. `items`, when present, replaces every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderChanges {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<CustomerId>,
    pub items: Option<Vec<OrderItemRequest>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_labels_map_to_variants() {
        assert_eq!(OrderStatus::from("Em andamento"), OrderStatus::InProgress);
        assert_eq!(OrderStatus::from("Finalizado"), OrderStatus::Completed);
        assert_eq!(OrderStatus::from("Cancelado"), OrderStatus::Cancelled);
        assert_eq!(
            OrderStatus::from("Aguardando pagamento"),
            OrderStatus::Other("Aguardando pagamento".to_string())
        );
    }

    #[test]
    fn status_serializes_as_plain_label() {
        let json = serde_json::to_string(&OrderStatus::Completed).unwrap();
        assert_eq!(json, r#""Finalizado""#);

        let custom: OrderStatus = serde_json::from_str(r#""Enviado""#).unwrap();
        assert_eq!(custom.as_str(), "Enviado");
    }

    #[test]
    fn order_total_is_rounded_on_the_wire() {
        let created = OrderCreated {
            id: OrderId(1),
            customer_id: CustomerId(2),
            total: 10.0 / 3.0,
            status: OrderStatus::InProgress,
        };
        let value = serde_json::to_value(&created).unwrap();
        assert_eq!(value["valor_total"], serde_json::json!(3.33));
        assert_eq!(value["status"], "Em andamento");
    }
}
