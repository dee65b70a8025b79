use crate::ServiceResult;
use crate::error::RecordServiceError;
use error_stack::ResultExt;
use showroom_core::Archive;
use tracing::instrument;

/// Pure delegation between the HTTP layer and an archive. Note there is no
/// `update` here: the PUT endpoints route to `add`, matching the original
/// service's behavior.
#[derive(Debug, Clone)]
pub struct RecordService<A> {
    archive: A,
}

impl<A> RecordService<A>
where
    A: Archive,
{
    pub fn new(archive: A) -> Self {
        Self { archive }
    }

    #[instrument(skip_all, name = "service#list_all")]
    pub async fn list_all(&self) -> ServiceResult<Vec<A::Record>> {
        self.archive
            .list_all()
            .await
            .change_context(RecordServiceError)
    }

    #[instrument(skip_all, name = "service#add")]
    pub async fn add(&self, record: A::Record) -> ServiceResult<()> {
        self.archive
            .add(record)
            .await
            .change_context(RecordServiceError)
    }

    #[instrument(skip_all, name = "service#delete")]
    pub async fn delete(&self, record: A::Record) -> ServiceResult<()> {
        self.archive
            .remove(record)
            .await
            .change_context(RecordServiceError)
    }
}
