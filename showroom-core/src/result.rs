use error_stack::Report;

pub type RepoResult<T> = Result<T, Report<ArchiveError>>;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to list records")]
    List,
    #[error("failed to add record")]
    Add,
    #[error("failed to delete record")]
    Delete,
    #[error("failed to update record")]
    Update,
}
