use async_trait::async_trait;
use chrono::NaiveDateTime;
use salesdesk_model::{
    ActiveCustomer, OrderId, OrderStatus, PendingOrder, SalesSummary,
};
use sqlx::{FromRow, SqlitePool};

use crate::{database::ports::reports::ReportsRepository, error::Result};

pub const UNKNOWN_CUSTOMER: &str = "Desconhecido";

#[derive(Debug, FromRow)]
struct PendingOrderRow {
    id: i64,
    cliente_nome: Option<String>,
    data_pedido: NaiveDateTime,
    status: String,
    valor_total: f64,
}

#[derive(Debug, FromRow)]
struct ActiveCustomerRow {
    nome: String,
    total_pedidos: i64,
}

#[derive(Clone, Debug)]
pub struct SqliteReportsRepository {
    pool: SqlitePool,
}

impl SqliteReportsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportsRepository for SqliteReportsRepository {
    async fn sales_summary(&self) -> Result<SalesSummary> {
        let (total_orders, total_revenue): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(valor_total), 0.0) FROM pedido",
        )
        .fetch_one(&self.pool)
        .await?;

        let total_units: i64 = sqlx::query_scalar(
            "SELECT CAST(COALESCE(SUM(quantidade), 0) AS INTEGER) FROM item_pedido",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SalesSummary {
            total_orders,
            total_revenue,
            total_units,
        })
    }

    async fn pending_orders(&self) -> Result<Vec<PendingOrder>> {
        let rows = sqlx::query_as::<_, PendingOrderRow>(
            r#"
            SELECT p.id, c.nome AS cliente_nome, p.data_pedido, p.status,
                   p.valor_total
            FROM pedido p
            LEFT JOIN cliente c ON c.id = p.cliente_id
            WHERE p.status = ?
            ORDER BY p.id
            "#,
        )
        .bind(OrderStatus::IN_PROGRESS)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PendingOrder {
                id: OrderId(row.id),
                customer_name: row
                    .cliente_nome
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                placed_at: row.data_pedido,
                status: OrderStatus::from(row.status),
                total: row.valor_total,
            })
            .collect())
    }

    async fn most_active_customers(&self) -> Result<Vec<ActiveCustomer>> {
        let rows = sqlx::query_as::<_, ActiveCustomerRow>(
            r#"
            SELECT c.nome, COUNT(p.id) AS total_pedidos
            FROM cliente c
            JOIN pedido p ON p.cliente_id = c.id
            GROUP BY c.id, c.nome
            ORDER BY total_pedidos DESC, c.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ActiveCustomer {
                name: row.nome,
                order_count: row.total_pedidos,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{SqliteDatabase, seed};

    #[tokio::test]
    async fn empty_database_reports_zeros() {
        let db = SqliteDatabase::in_memory().await.unwrap();
        let repo = SqliteReportsRepository::new(db.pool().clone());

        assert_eq!(repo.sales_summary().await.unwrap(), SalesSummary::default());
        assert!(repo.pending_orders().await.unwrap().is_empty());
        assert!(repo.most_active_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reports_over_sample_data() {
        let db = SqliteDatabase::in_memory().await.unwrap();
        seed::seed_sample_data(db.pool()).await.unwrap();
        let repo = SqliteReportsRepository::new(db.pool().clone());

        let summary = repo.sales_summary().await.unwrap();
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_revenue, 4800.0 + 300.0 + 750.0);
        assert_eq!(summary.total_units, 7);

        let pending = repo.pending_orders().await.unwrap();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|order| order.status.is_pending()));
        assert!(pending.iter().all(|order| order.customer_name == "Maria Silva"));

        let active = repo.most_active_customers().await.unwrap();
        assert_eq!(
            active,
            vec![
                ActiveCustomer {
                    name: "Maria Silva".into(),
                    order_count: 2,
                },
                ActiveCustomer {
                    name: "João Souza".into(),
                    order_count: 1,
                },
            ]
        );
    }
}
