use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::{
    SqliteDatabase,
    ports::{
        customers::CustomersRepository, orders::OrdersRepository,
        products::ProductsRepository, reports::ReportsRepository,
    },
    repositories::{
        SqliteCustomersRepository, SqliteOrdersRepository,
        SqliteProductsRepository, SqliteReportsRepository,
    },
};

/// Aggregates the repository ports used by request handlers.
#[derive(Clone)]
pub struct AppUnitOfWork {
    pub customers: Arc<dyn CustomersRepository>,
    pub products: Arc<dyn ProductsRepository>,
    pub orders: Arc<dyn OrdersRepository>,
    pub reports: Arc<dyn ReportsRepository>,
}

impl fmt::Debug for AppUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWork")
            .field("customers", &type_name_of_val(self.customers.as_ref()))
            .field("products", &type_name_of_val(self.products.as_ref()))
            .field("orders", &type_name_of_val(self.orders.as_ref()))
            .field("reports", &type_name_of_val(self.reports.as_ref()))
            .finish()
    }
}

impl AppUnitOfWork {
    /// Wires every port to its SQLite adapter over the shared pool.
    pub fn from_sqlite(db: &SqliteDatabase) -> Self {
        let pool = db.pool().clone();
        Self {
            customers: Arc::new(SqliteCustomersRepository::new(pool.clone())),
            products: Arc::new(SqliteProductsRepository::new(pool.clone())),
            orders: Arc::new(SqliteOrdersRepository::new(pool.clone())),
            reports: Arc::new(SqliteReportsRepository::new(pool)),
        }
    }
}
