use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use salesdesk_model::{
    CustomerId, NewOrder, Order, OrderChanges, OrderCreated, OrderId,
    OrderItem, OrderItemId, OrderItemRequest, OrderStatus, ProductId,
};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::{
    database::ports::orders::OrdersRepository,
    error::{Result, SalesError},
    validation,
};

pub const ORDER_NOT_FOUND: &str = "Pedido não encontrado";
pub const CUSTOMER_NOT_FOUND: &str = "Cliente não encontrado";
pub const NEW_CUSTOMER_NOT_FOUND: &str = "Novo cliente não encontrado";
pub const UNKNOWN_CUSTOMER: &str = "Cliente Desconhecido";
pub const UNKNOWN_PRODUCT: &str = "Produto Desconhecido";

const ORDER_COLUMNS: &str = r#"
    SELECT p.id, p.cliente_id, c.nome AS cliente_nome, p.data_pedido,
           p.status, p.valor_total
    FROM pedido p
    LEFT JOIN cliente c ON c.id = p.cliente_id
"#;

const ITEM_COLUMNS: &str = r#"
    SELECT i.id, i.pedido_id, i.produto_id, pr.nome AS produto_nome,
           i.quantidade, i.preco_unitario
    FROM item_pedido i
    LEFT JOIN produto pr ON pr.id = i.produto_id
"#;

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    cliente_id: i64,
    cliente_nome: Option<String>,
    data_pedido: NaiveDateTime,
    status: String,
    valor_total: f64,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    id: i64,
    pedido_id: i64,
    produto_id: i64,
    produto_nome: Option<String>,
    quantidade: i64,
    preco_unitario: f64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: OrderItemId(row.id),
            product_id: ProductId(row.produto_id),
            product_name: row
                .produto_nome
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            quantity: row.quantidade,
            unit_price: row.preco_unitario,
        }
    }
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId(self.id),
            customer_id: CustomerId(self.cliente_id),
            customer_name: self
                .cliente_nome
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            placed_at: self.data_pedido,
            status: OrderStatus::from(self.status),
            total: self.valor_total,
            items,
        }
    }
}

async fn customer_exists(
    conn: &mut SqliteConnection,
    id: CustomerId,
) -> Result<bool> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT id FROM cliente WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
    Ok(found.is_some())
}

/// Validates, prices and inserts each requested line in order, returning the
/// order total. The first bad line aborts with its error.
pub(crate) async fn insert_lines(
    conn: &mut SqliteConnection,
    order_id: OrderId,
    items: &[OrderItemRequest],
) -> Result<f64> {
    let mut total = 0.0;

    for item in items {
        let line = validation::order_line(item)?;

        let price: f64 = sqlx::query_scalar("SELECT preco FROM produto WHERE id = ?")
            .bind(line.product_id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| {
                SalesError::not_found(format!(
                    "Produto com ID {} não encontrado",
                    line.product_id
                ))
            })?;

        sqlx::query(
            "INSERT INTO item_pedido (pedido_id, produto_id, quantidade, preco_unitario) VALUES (?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(price)
        .execute(&mut *conn)
        .await?;

        total += line.quantity as f64 * price;
    }

    sqlx::query("UPDATE pedido SET valor_total = ? WHERE id = ?")
        .bind(total)
        .bind(order_id)
        .execute(&mut *conn)
        .await?;

    Ok(total)
}

/// Inserts an order header with a zero total and returns its id.
pub(crate) async fn insert_order(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
    status: &OrderStatus,
) -> Result<OrderId> {
    let result = sqlx::query(
        "INSERT INTO pedido (cliente_id, data_pedido, status, valor_total) VALUES (?, ?, ?, 0.0)",
    )
    .bind(customer_id)
    .bind(Utc::now().naive_utc())
    .bind(status.as_str())
    .execute(&mut *conn)
    .await?;

    Ok(OrderId(result.last_insert_rowid()))
}

#[derive(Clone, Debug)]
pub struct SqliteOrdersRepository {
    pool: SqlitePool,
}

impl SqliteOrdersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrdersRepository for SqliteOrdersRepository {
    async fn list(&self) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, OrderRow>(&format!(
            "{ORDER_COLUMNS} ORDER BY p.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(&format!(
            "{ITEM_COLUMNS} ORDER BY i.pedido_id, i.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            items_by_order
                .entry(row.pedido_id)
                .or_default()
                .push(OrderItem::from(row));
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                order.into_order(items)
            })
            .collect())
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        let Some(order) = sqlx::query_as::<_, OrderRow>(&format!(
            "{ORDER_COLUMNS} WHERE p.id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemRow>(&format!(
            "{ITEM_COLUMNS} WHERE i.pedido_id = ? ORDER BY i.id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

        Ok(Some(order.into_order(items)))
    }

    async fn create(&self, order: NewOrder) -> Result<OrderCreated> {
        let mut tx = self.pool.begin().await?;

        if !customer_exists(&mut tx, order.customer_id).await? {
            return Err(SalesError::not_found(CUSTOMER_NOT_FOUND));
        }

        let id = insert_order(&mut tx, order.customer_id, &order.status).await?;
        let total = insert_lines(&mut tx, id, &order.items).await?;

        tx.commit().await?;

        info!(
            order_id = %id,
            customer_id = %order.customer_id,
            lines = order.items.len(),
            total,
            "Created order"
        );

        Ok(OrderCreated {
            id,
            customer_id: order.customer_id,
            total,
            status: order.status,
        })
    }

    async fn update(&self, id: OrderId, changes: OrderChanges) -> Result<Order> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM pedido WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(SalesError::not_found(ORDER_NOT_FOUND));
        }

        if let Some(status) = &changes.status {
            sqlx::query("UPDATE pedido SET status = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(customer_id) = changes.customer_id {
            if !customer_exists(&mut tx, customer_id).await? {
                return Err(SalesError::not_found(NEW_CUSTOMER_NOT_FOUND));
            }
            sqlx::query("UPDATE pedido SET cliente_id = ? WHERE id = ?")
                .bind(customer_id)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(items) = &changes.items {
            sqlx::query("DELETE FROM item_pedido WHERE pedido_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            let total = insert_lines(&mut tx, id, items).await?;
            debug!(order_id = %id, lines = items.len(), total, "Replaced order lines");
        }

        tx.commit().await?;
        info!(order_id = %id, "Updated order");

        self.get(id)
            .await?
            .ok_or_else(|| SalesError::not_found(ORDER_NOT_FOUND))
    }

    async fn delete(&self, id: OrderId) -> Result<()> {
        let result = sqlx::query("DELETE FROM pedido WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(SalesError::not_found(ORDER_NOT_FOUND));
        }

        info!(order_id = %id, "Deleted order");
        Ok(())
    }
}
