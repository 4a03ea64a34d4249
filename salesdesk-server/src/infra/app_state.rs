use std::{fmt, sync::Arc};

use salesdesk_core::{AppUnitOfWork, SqliteDatabase};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub unit_of_work: Arc<AppUnitOfWork>,
    pub database: Arc<SqliteDatabase>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("unit_of_work", &self.unit_of_work)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, database: SqliteDatabase) -> Self {
        let unit_of_work = Arc::new(AppUnitOfWork::from_sqlite(&database));
        Self {
            unit_of_work,
            database: Arc::new(database),
            config,
        }
    }

    pub fn unit_of_work(&self) -> &AppUnitOfWork {
        &self.unit_of_work
    }

    pub fn database(&self) -> &SqliteDatabase {
        &self.database
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
