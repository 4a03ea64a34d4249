//! SQLite adapters for the repository ports.

pub mod customers;
pub mod orders;
pub mod products;
pub mod reports;

pub use customers::SqliteCustomersRepository;
pub use orders::SqliteOrdersRepository;
pub use products::SqliteProductsRepository;
pub use reports::SqliteReportsRepository;

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
