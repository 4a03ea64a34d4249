//! Core library for SalesDesk.
//!
//! Holds the vowel scanner behind the string-analysis endpoint, request
//! validation, and the SQLite-backed repositories for customers, products,
//! orders and reports. The HTTP surface lives in `salesdesk-server`.

pub mod analysis;
pub mod api;
pub mod application;
pub mod database;
pub mod error;
pub mod validation;

pub use application::unit_of_work::AppUnitOfWork;
pub use database::SqliteDatabase;
pub use error::{Result, SalesError};

/// Embedded schema migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
