use async_trait::async_trait;
use salesdesk_model::{NewProduct, Product, ProductChanges, ProductId};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::{
    database::ports::products::ProductsRepository,
    error::{Result, SalesError},
};

use super::is_foreign_key_violation;

pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";
pub const PRODUCT_IN_USE: &str =
    "Não é possível deletar produto com pedidos associados.";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    nome: String,
    preco: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            name: row.nome,
            price: row.preco,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SqliteProductsRepository {
    pool: SqlitePool,
}

impl SqliteProductsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for SqliteProductsRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, nome, preco FROM produto ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, nome, preco FROM produto WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn create(&self, product: NewProduct) -> Result<Product> {
        let result = sqlx::query("INSERT INTO produto (nome, preco) VALUES (?, ?)")
            .bind(&product.name)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        let id = ProductId(result.last_insert_rowid());
        info!(product_id = %id, price = product.price, "Created product");

        Ok(Product {
            id,
            name: product.name,
            price: product.price,
        })
    }

    async fn update(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, ProductRow>(
            "SELECT id, nome, preco FROM produto WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| SalesError::not_found(PRODUCT_NOT_FOUND))?;

        let name = changes.name.unwrap_or(current.nome);
        let price = changes.price.unwrap_or(current.preco);

        sqlx::query("UPDATE produto SET nome = ?, preco = ? WHERE id = ?")
            .bind(&name)
            .bind(price)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        // Existing order lines keep the price captured when they were written.
        Ok(Product { id, name, price })
    }

    async fn delete(&self, id: ProductId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM produto WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(SalesError::not_found(PRODUCT_NOT_FOUND));
        }

        let references: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM item_pedido WHERE produto_id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        if references > 0 {
            return Err(SalesError::Integrity(PRODUCT_IN_USE.to_string()));
        }

        sqlx::query("DELETE FROM produto WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    SalesError::Integrity(PRODUCT_IN_USE.to_string())
                } else {
                    SalesError::from(e)
                }
            })?;

        tx.commit().await?;
        info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
