use async_trait::async_trait;
use salesdesk_model::{ActiveCustomer, PendingOrder, SalesSummary};

use crate::error::Result;

#[async_trait]
pub trait ReportsRepository: Send + Sync {
    async fn sales_summary(&self) -> Result<SalesSummary>;

    async fn pending_orders(&self) -> Result<Vec<PendingOrder>>;

    /// Customers with at least one order, busiest first.
    async fn most_active_customers(&self) -> Result<Vec<ActiveCustomer>>;
}
