use async_trait::async_trait;
use salesdesk_model::{NewOrder, Order, OrderChanges, OrderCreated, OrderId};

use crate::error::Result;

/// Repository port for orders and their lines.
///
/// Writes are all-or-nothing: a failing line rolls back the whole order.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>>;

    async fn get(&self, id: OrderId) -> Result<Option<Order>>;

    /// Prices every line at the product's current price.
    async fn create(&self, order: NewOrder) -> Result<OrderCreated>;

    /// Applies the changes; new lines replace the old ones and the total is
    /// recomputed.
    async fn update(&self, id: OrderId, changes: OrderChanges) -> Result<Order>;

    async fn delete(&self, id: OrderId) -> Result<()>;
}
