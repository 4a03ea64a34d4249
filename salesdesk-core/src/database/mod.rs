pub mod ports;
pub mod repositories;
pub mod seed;
pub mod sqlite;

pub use seed::SeedOutcome;
pub use sqlite::{PoolStats, SqliteDatabase};
