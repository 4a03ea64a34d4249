use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::infra::app_state::AppState;

/// Work run once after the database is ready and before serving requests.
#[async_trait]
pub trait StartupHooks: Send + Sync {
    async fn run(&self, state: &AppState) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct ProdStartupHooks;

#[async_trait]
impl StartupHooks for ProdStartupHooks {
    async fn run(&self, state: &AppState) -> Result<()> {
        if !state.config().seed.sample_data {
            info!("Sample data seeding disabled");
            return Ok(());
        }

        if let Err(err) = state.database().seed_sample_data().await {
            warn!(error = %err, "Failed to insert sample data");
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoopStartupHooks;

#[async_trait]
impl StartupHooks for NoopStartupHooks {
    async fn run(&self, _state: &AppState) -> Result<()> {
        Ok(())
    }
}
