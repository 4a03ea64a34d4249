use async_trait::async_trait;
use salesdesk_model::{Customer, CustomerChanges, CustomerId, NewCustomer};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::{
    database::ports::customers::CustomersRepository,
    error::{Result, SalesError},
};

use super::is_unique_violation;

pub const CUSTOMER_NOT_FOUND: &str = "Cliente não encontrado";
pub const EMAIL_TAKEN: &str = "Email já cadastrado";
pub const EMAIL_TAKEN_BY_OTHER: &str = "Email já cadastrado para outro cliente";

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    nome: String,
    email: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: CustomerId(row.id),
            name: row.nome,
            email: row.email,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SqliteCustomersRepository {
    pool: SqlitePool,
}

impl SqliteCustomersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomersRepository for SqliteCustomersRepository {
    async fn list(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, nome, email FROM cliente ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, nome, email FROM cliente WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn create(&self, customer: NewCustomer) -> Result<Customer> {
        let mut tx = self.pool.begin().await?;

        let taken: Option<i64> =
            sqlx::query_scalar("SELECT id FROM cliente WHERE email = ?")
                .bind(&customer.email)
                .fetch_optional(&mut *tx)
                .await?;
        if taken.is_some() {
            return Err(SalesError::conflict(EMAIL_TAKEN));
        }

        let result = sqlx::query("INSERT INTO cliente (nome, email) VALUES (?, ?)")
            .bind(&customer.name)
            .bind(&customer.email)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    SalesError::conflict(EMAIL_TAKEN)
                } else {
                    SalesError::from(e)
                }
            })?;

        tx.commit().await?;

        let id = CustomerId(result.last_insert_rowid());
        info!(customer_id = %id, "Created customer");

        Ok(Customer {
            id,
            name: customer.name,
            email: customer.email,
        })
    }

    async fn update(
        &self,
        id: CustomerId,
        changes: CustomerChanges,
    ) -> Result<Customer> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, nome, email FROM cliente WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| SalesError::not_found(CUSTOMER_NOT_FOUND))?;

        if let Some(email) = changes.email.as_deref()
            && email != current.email
        {
            let owner: Option<i64> = sqlx::query_scalar(
                "SELECT id FROM cliente WHERE email = ? AND id <> ?",
            )
            .bind(email)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
            if owner.is_some() {
                return Err(SalesError::conflict(EMAIL_TAKEN_BY_OTHER));
            }
        }

        let name = changes.name.unwrap_or(current.nome);
        let email = changes.email.unwrap_or(current.email);

        sqlx::query("UPDATE cliente SET nome = ?, email = ? WHERE id = ?")
            .bind(&name)
            .bind(&email)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    SalesError::conflict(EMAIL_TAKEN_BY_OTHER)
                } else {
                    SalesError::from(e)
                }
            })?;

        tx.commit().await?;

        Ok(Customer { id, name, email })
    }

    async fn delete(&self, id: CustomerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM cliente WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(SalesError::not_found(CUSTOMER_NOT_FOUND));
        }

        info!(customer_id = %id, "Deleted customer and its orders");
        Ok(())
    }
}
