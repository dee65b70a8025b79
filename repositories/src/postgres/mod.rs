pub mod archive;
pub mod initializer;
mod statements;

pub enum ConnectionDetails {
    Url(String),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to initialize postgres {0} archive")]
pub struct ArchiveInitErr(&'static str);

impl ArchiveInitErr {
    fn for_table(table: &'static str) -> Self {
        Self(table)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to run archive migrations")]
pub struct ArchiveMigrationErr;
