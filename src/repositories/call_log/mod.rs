use async_trait::async_trait;
use mockall::automock;

use crate::models::{CallLog, CallLogFilter, CallLogSummary, NewCallLog};

pub mod sqlite;
pub use sqlite::SqliteCallLogRepo;

#[async_trait]
#[automock]
pub trait CallLogRepository: Send + Sync {
    /// Store a new call log and return it as persisted
    async fn insert(&self, log: &NewCallLog) -> anyhow::Result<CallLog>;

    /// Get a call log by its name
    async fn get_by_name(&self, name: &str) -> anyhow::Result<Option<CallLog>>;

    /// List call logs matching a filter, newest first
    async fn list(&self, filter: &CallLogFilter) -> anyhow::Result<Vec<CallLogSummary>>;
}

pub type CallLogRepo = std::sync::Arc<dyn CallLogRepository + Send + Sync>;
