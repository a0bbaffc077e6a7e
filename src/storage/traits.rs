use crate::model::{StorageError, WinningRow};
use crate::storage::SqliteStorage;
use tokio::sync::Mutex;

/// Read-only access to the winning rows the interval analysis runs over.
#[async_trait::async_trait]
pub trait WinnerSource: Send + Sync {
    async fn fetch_winning_records(&self) -> Result<Vec<WinningRow>, StorageError>;
}

#[async_trait::async_trait]
impl WinnerSource for Mutex<SqliteStorage> {
    async fn fetch_winning_records(&self) -> Result<Vec<WinningRow>, StorageError> {
        self.lock().await.fetch_winning_records()
    }
}
