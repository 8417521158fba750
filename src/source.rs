use thiserror::Error;

use crate::domain::{
    AttendanceRecord, DateRange, Employee, Invoice, Material, Project, Transaction,
};

/// Failure surfaced by the upstream data collaborator. The engine never
/// retries; retry/backoff belongs to the collaborator itself.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Query failed: {0}")]
    Query(String),
    #[error("Not authorized: {0}")]
    Unauthorized(String),
    #[error("Service unreachable: {0}")]
    Unreachable(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Abstraction over the hosted database service the app fetches records
/// from. Implementations return snapshots; the engine never writes back.
///
/// Date-bounded fetches take the report range so a backend can push the
/// bound into its query; an in-memory backend may ignore it and let the
/// assemblers filter, both are correct because assemblers re-apply the
/// range themselves.
pub trait RecordSource: Send + Sync {
    fn transactions(&self, range: &DateRange) -> FetchResult<Vec<Transaction>>;
    fn invoices(&self, range: &DateRange) -> FetchResult<Vec<Invoice>>;
    fn projects(&self) -> FetchResult<Vec<Project>>;
    fn employees(&self) -> FetchResult<Vec<Employee>>;
    fn attendance(&self, range: &DateRange) -> FetchResult<Vec<AttendanceRecord>>;
    fn materials(&self) -> FetchResult<Vec<Material>>;
}
