use crate::postgres::ArchiveInitErr;
use crate::postgres::statements::ArchiveSql;
use deadpool_postgres::{Object, Pool};
use error_stack::{Report, ResultExt};
use showroom_core::model::{Customer, Purchase, Vehicle};
use showroom_core::result::{ArchiveError, RepoResult};
use showroom_core::{Archive, RecordId};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;
use tracing::debug;

/// Table metadata and row mapping for a record type. `COLUMNS` excludes the id
/// column; the store assigns ids and the insert path never supplies one.
pub trait PgRecord: Send + Sync + Sized + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> RecordId;

    fn from_row(row: Row) -> Self;

    /// Bind values for `COLUMNS`, in the same order.
    fn params(&self) -> Vec<&(dyn ToSql + Sync)>;
}

impl PgRecord for Vehicle {
    const TABLE: &'static str = "cars";
    const COLUMNS: &'static [&'static str] = &["brand", "model", "price"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_row(row: Row) -> Self {
        Self {
            id: row.get("id"),
            brand: row.get("brand"),
            model: row.get("model"),
            price: row.get("price"),
        }
    }

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![&self.brand, &self.model, &self.price]
    }
}

impl PgRecord for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &["name", "email"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_row(row: Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        }
    }

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![&self.name, &self.email]
    }
}

impl PgRecord for Purchase {
    const TABLE: &'static str = "purchases";
    const COLUMNS: &'static [&'static str] = &["customer_id", "auto_id", "purchase_date"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_row(row: Row) -> Self {
        Self {
            id: row.get("id"),
            customer_id: row.get("customer_id"),
            auto_id: row.get("auto_id"),
            purchase_date: row.get("purchase_date"),
        }
    }

    fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![&self.customer_id, &self.auto_id, &self.purchase_date]
    }
}

/// One archive per record type, all running through the same pool. Statements
/// are prepared through the pooled client's cache so they stay bound to the
/// connection that executes them.
pub struct PgArchive<R> {
    pool: Pool,
    sql: Arc<ArchiveSql>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for PgArchive<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            sql: Arc::clone(&self.sql),
            _record: PhantomData,
        }
    }
}

impl<R: PgRecord> std::fmt::Debug for PgArchive<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgArchive").field("table", &R::TABLE).finish()
    }
}

impl<R: PgRecord> PgArchive<R> {
    /// Builds the archive and warms the statement cache, so a broken statement
    /// fails at startup rather than on the first request.
    pub async fn new(pool: Pool) -> Result<Self, Report<ArchiveInitErr>> {
        let sql = ArchiveSql::for_record::<R>();

        let client = pool
            .get()
            .await
            .change_context(ArchiveInitErr::for_table(R::TABLE))?;

        for statement in [&sql.list, &sql.insert, &sql.update, &sql.delete] {
            client
                .prepare_cached(statement)
                .await
                .change_context(ArchiveInitErr::for_table(R::TABLE))?;
        }

        Ok(Self {
            pool,
            sql: Arc::new(sql),
            _record: PhantomData,
        })
    }

    async fn client(&self, on_err: ArchiveError) -> RepoResult<Object> {
        self.pool.get().await.change_context(on_err)
    }
}

impl<R: PgRecord> Archive for PgArchive<R> {
    type Record = R;

    async fn list_all(&self) -> RepoResult<Vec<R>> {
        let client = self.client(ArchiveError::List).await?;

        let statement = client
            .prepare_cached(&self.sql.list)
            .await
            .change_context(ArchiveError::List)?;

        let rows = client
            .query(&statement, &[])
            .await
            .change_context(ArchiveError::List)?;

        Ok(rows.into_iter().map(R::from_row).collect())
    }

    async fn add(&self, record: R) -> RepoResult<()> {
        let client = self.client(ArchiveError::Add).await?;

        let statement = client
            .prepare_cached(&self.sql.insert)
            .await
            .change_context(ArchiveError::Add)?;

        client
            .execute(&statement, &record.params())
            .await
            .change_context(ArchiveError::Add)?;

        Ok(())
    }

    async fn remove(&self, record: R) -> RepoResult<()> {
        let client = self.client(ArchiveError::Delete).await?;

        let statement = client
            .prepare_cached(&self.sql.delete)
            .await
            .change_context(ArchiveError::Delete)?;

        let id = record.id();
        let removed = client
            .execute(&statement, &[&id])
            .await
            .change_context(ArchiveError::Delete)?;

        // removing an absent id is a no-op, not an error
        debug!("removed {removed} row(s) from {}", R::TABLE);
        Ok(())
    }

    async fn update(&self, record: R) -> RepoResult<()> {
        let client = self.client(ArchiveError::Update).await?;

        let statement = client
            .prepare_cached(&self.sql.update)
            .await
            .change_context(ArchiveError::Update)?;

        let id = record.id();
        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&id];
        params.extend(record.params());

        client
            .execute(&statement, &params)
            .await
            .change_context(ArchiveError::Update)?;

        Ok(())
    }
}
