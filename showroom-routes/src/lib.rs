use crate::error::RecordServiceError;
use error_stack::Report;

pub type ServiceResult<T> = Result<T, Report<RecordServiceError>>;

pub mod error;
pub mod routes;
pub mod service;
pub mod state;
