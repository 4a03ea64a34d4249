use async_trait::async_trait;
use salesdesk_model::{Customer, CustomerChanges, CustomerId, NewCustomer};

use crate::error::Result;

/// Repository port for customer records.
#[async_trait]
pub trait CustomersRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>>;

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Fails with `Conflict` when the email is already registered.
    async fn create(&self, customer: NewCustomer) -> Result<Customer>;

    /// Fails with `NotFound` for an unknown id and `Conflict` when the new
    /// email belongs to another customer.
    async fn update(
        &self,
        id: CustomerId,
        changes: CustomerChanges,
    ) -> Result<Customer>;

    /// Removes the customer together with its orders and their lines.
    async fn delete(&self, id: CustomerId) -> Result<()>;
}
