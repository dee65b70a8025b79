use crate::postgres::archive::PgArchive;
use crate::postgres::{ArchiveMigrationErr, ConnectionDetails};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use error_stack::{Report, ResultExt};
use showroom_core::model::{Customer, Purchase, Vehicle};
use std::str::FromStr;
use tokio_postgres::{Config, NoTls};
use tracing::debug;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("./src/postgres/migrations");
}

/// The three record collections, all backed by the same connection pool.
pub struct Archives {
    pub cars: PgArchive<Vehicle>,
    pub customers: PgArchive<Customer>,
    pub purchases: PgArchive<Purchase>,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to create archives")]
pub struct ArchiveCreationErr;

#[derive(Default)]
pub struct ArchiveCreator {
    pool_size: Option<usize>,
}

impl ArchiveCreator {
    pub fn with_pool_size(self, pool_size: usize) -> Self {
        Self {
            pool_size: Some(pool_size),
        }
    }

    pub async fn create(
        self,
        connection_details: ConnectionDetails,
    ) -> Result<Archives, Report<ArchiveCreationErr>> {
        let config = match connection_details {
            ConnectionDetails::Url(url) => {
                Config::from_str(&url).change_context(ArchiveCreationErr)?
            }
        };

        let mgr_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let mgr = Manager::from_config(config, NoTls, mgr_config);
        let mut pool_builder = Pool::builder(mgr);
        if let Some(pool_size) = self.pool_size {
            pool_builder = pool_builder.max_size(pool_size);
        }
        debug!("building connection pool..");
        let pool = pool_builder.build().change_context(ArchiveCreationErr)?;
        debug!("connection pool built, running migrations");

        run_migrations(&pool)
            .await
            .change_context(ArchiveCreationErr)?;

        Ok(Archives {
            cars: PgArchive::new(pool.clone())
                .await
                .change_context(ArchiveCreationErr)?,
            customers: PgArchive::new(pool.clone())
                .await
                .change_context(ArchiveCreationErr)?,
            purchases: PgArchive::new(pool)
                .await
                .change_context(ArchiveCreationErr)?,
        })
    }
}

// separate so the pooled handle is dropped before the archives grab their own,
// which matters when `pool_size` is 1
async fn run_migrations(pool: &Pool) -> Result<(), Report<ArchiveMigrationErr>> {
    let mut handle = pool.get().await.change_context(ArchiveMigrationErr)?;

    let client = &mut **handle;

    embedded::migrations::runner()
        .run_async(client)
        .await
        .change_context(ArchiveMigrationErr)?;

    Ok(())
}
