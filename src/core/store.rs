use async_trait::async_trait;

use super::models::ScanPage;
use crate::errors::TaskError;

/// Read access to the table holding tasks.
///
/// Implementations are constructed once per process and shared by every
/// invocation, so they must be usable through a shared reference.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Reads every item of the table in one unfiltered request.
    async fn scan(&self) -> Result<ScanPage, TaskError>;
}
