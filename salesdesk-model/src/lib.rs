//! Core data model definitions shared across SalesDesk crates.
//!
//! Wire names follow the JSON contract consumed by the existing web client,
//! so most fields carry a `#[serde(rename = ...)]` with the Portuguese key.

pub mod analysis;
pub mod customer;
pub mod ids;
pub mod money;
pub mod order;
pub mod patch;
pub mod product;
pub mod report;

pub use analysis::{AnalyzeStringRequest, AnalyzeStringResponse, NO_VOWEL_FOUND};
pub use customer::{
    Customer, CustomerChanges, NewCustomer, NewCustomerRequest,
    UpdateCustomerRequest,
};
pub use ids::{CustomerId, OrderId, OrderItemId, ProductId};
pub use order::{
    NewOrder, NewOrderRequest, Order, OrderChanges, OrderCreated, OrderItem,
    OrderItemRequest, OrderLine, OrderStatus, UpdateOrderRequest,
};
pub use product::{
    NewProduct, NewProductRequest, Product, ProductChanges,
    UpdateProductRequest,
};
pub use report::{ActiveCustomer, PendingOrder, SalesSummary};

use serde::{Deserialize, Serialize};

/// Generic acknowledgement body returned by update/delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
