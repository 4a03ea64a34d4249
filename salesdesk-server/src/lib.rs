//! # SalesDesk Server
//!
//! HTTP backend for a small sales desk: customers, products, orders with
//! priced lines, aggregate sales reports and a string-analysis utility.
//!
//! The router is built by [`create_app`] from an [`AppState`] holding the
//! SQLite database, the repository bundle and the loaded configuration.

pub mod app;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
