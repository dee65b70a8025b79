use crate::result::RepoResult;

pub mod model;
pub mod result;

/// Surrogate identity assigned by the store on insert.
pub type RecordId = i32;

/// Uniform persistence contract, one implementation per backing store rather
/// than per resource. `remove` matches on the record's id only; removing an id
/// that is not present is a no-op. `update` fully replaces the matching row.
pub trait Archive: Clone + Send + Sync + 'static {
    type Record: Send + 'static;

    fn list_all(&self) -> impl Future<Output = RepoResult<Vec<Self::Record>>> + Send;

    fn add(&self, record: Self::Record) -> impl Future<Output = RepoResult<()>> + Send;

    fn remove(&self, record: Self::Record) -> impl Future<Output = RepoResult<()>> + Send;

    fn update(&self, record: Self::Record) -> impl Future<Output = RepoResult<()>> + Send;
}
