use async_trait::async_trait;
use salesdesk_model::{NewProduct, Product, ProductChanges, ProductId};

use crate::error::Result;

/// Repository port for the product catalog.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;

    async fn get(&self, id: ProductId) -> Result<Option<Product>>;

    async fn create(&self, product: NewProduct) -> Result<Product>;

    async fn update(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product>;

    /// Refuses with `Integrity` while any order line references the product.
    async fn delete(&self, id: ProductId) -> Result<()>;
}
