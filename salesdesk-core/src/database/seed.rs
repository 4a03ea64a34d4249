//! Demo data inserted into an empty database.

use salesdesk_model::{CustomerId, OrderItemRequest, OrderStatus};
use sqlx::SqlitePool;
use tracing::info;

use crate::{
    database::repositories::orders::{insert_lines, insert_order},
    error::Result,
};

const CUSTOMERS: &[(&str, &str)] = &[
    ("Maria Silva", "maria@example.com"),
    ("João Souza", "joao@example.com"),
];

const PRODUCTS: &[(&str, f64)] = &[
    ("Notebook Super", 4500.00),
    ("Mouse Gamer", 150.00),
    ("Teclado Mecânico", 300.00),
    ("Webcam Full HD", 250.00),
];

/// (customer index, status, [(product index, quantity)])
const ORDERS: &[(usize, &str, &[(usize, i64)])] = &[
    (0, OrderStatus::IN_PROGRESS, &[(0, 1), (1, 2)]),
    (1, OrderStatus::COMPLETED, &[(2, 1)]),
    (0, OrderStatus::IN_PROGRESS, &[(3, 3)]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded {
        customers: usize,
        products: usize,
        orders: usize,
    },
    /// The database already held customers.
    Skipped,
}

/// Inserts the sample catalog when no customer exists yet.
///
/// Runs in one transaction, so a failure leaves the database empty.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedOutcome> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cliente")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        info!(existing, "Customers present, skipping sample data");
        return Ok(SeedOutcome::Skipped);
    }

    let mut customer_ids = Vec::with_capacity(CUSTOMERS.len());
    for (name, email) in CUSTOMERS {
        let result = sqlx::query("INSERT INTO cliente (nome, email) VALUES (?, ?)")
            .bind(*name)
            .bind(*email)
            .execute(&mut *tx)
            .await?;
        customer_ids.push(result.last_insert_rowid());
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, price) in PRODUCTS {
        let result = sqlx::query("INSERT INTO produto (nome, preco) VALUES (?, ?)")
            .bind(*name)
            .bind(*price)
            .execute(&mut *tx)
            .await?;
        product_ids.push(result.last_insert_rowid());
    }

    for (customer, status, lines) in ORDERS {
        let items: Vec<OrderItemRequest> = lines
            .iter()
            .map(|(product, quantity)| {
                OrderItemRequest::new(product_ids[*product], *quantity)
            })
            .collect();
        let order_id = insert_order(
            &mut tx,
            CustomerId(customer_ids[*customer]),
            &OrderStatus::from(*status),
        )
        .await?;
        insert_lines(&mut tx, order_id, &items).await?;
    }

    tx.commit().await?;

    let outcome = SeedOutcome::Seeded {
        customers: CUSTOMERS.len(),
        products: PRODUCTS.len(),
        orders: ORDERS.len(),
    };
    info!(?outcome, "Inserted sample data");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::SqliteDatabase;

    #[tokio::test]
    async fn seeds_once() {
        let db = SqliteDatabase::in_memory().await.unwrap();

        let first = seed_sample_data(db.pool()).await.unwrap();
        assert_eq!(
            first,
            SeedOutcome::Seeded {
                customers: 2,
                products: 4,
                orders: 3,
            }
        );
        assert_eq!(seed_sample_data(db.pool()).await.unwrap(), SeedOutcome::Skipped);

        let totals: Vec<f64> =
            sqlx::query_scalar("SELECT valor_total FROM pedido ORDER BY id")
                .fetch_all(db.pool())
                .await
                .unwrap();
        assert_eq!(totals, vec![4800.0, 300.0, 750.0]);
    }
}
