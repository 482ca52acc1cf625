//! Migrate command - creates the `teams` table and exits

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{run_migrations, StorageFactory, StorageHandle};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let storage = StorageFactory::connect(&config.database).await?;

    let result = match &storage {
        StorageHandle::MySql(pool) => run_migrations(pool).await,
        StorageHandle::InMemory(_) => {
            warn!("In-memory backend selected, nothing to migrate");
            Ok(())
        }
    };

    storage.close().await;
    result?;

    info!("Migrations complete");
    Ok(())
}
