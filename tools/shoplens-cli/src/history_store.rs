//! Search history kept in a JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shoplens_commerce::history::{newest_first, HistoryResult, SearchHistory, SearchRecord};
use shoplens_commerce::{SearchRecordId, UserId};
use tokio::sync::Mutex;

/// History stored as a JSON array of records.
///
/// Every call reads the whole file; writes replace it. A missing file is an
/// empty history.
pub struct JsonFileHistory {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> HistoryResult<Vec<SearchRecord>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn store(&self, records: &[SearchRecord]) -> HistoryResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SearchHistory for JsonFileHistory {
    async fn append(&self, record: SearchRecord) -> HistoryResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        records.push(record);
        self.store(&records).await
    }

    async fn list(&self, user_id: &UserId, limit: usize) -> HistoryResult<Vec<SearchRecord>> {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;
        Ok(newest_first(&records, user_id, limit))
    }

    async fn delete(&self, id: &SearchRecordId) -> HistoryResult<bool> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.store(&records).await?;
        Ok(true)
    }

    async fn clear(&self, user_id: &UserId) -> HistoryResult<usize> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| &r.user_id != user_id);
        let removed = before - records.len();
        if removed > 0 {
            self.store(&records).await?;
        }
        Ok(removed)
    }

    async fn count_since(&self, user_id: &UserId, since: DateTime<Utc>) -> HistoryResult<usize> {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;
        Ok(records
            .iter()
            .filter(|r| &r.user_id == user_id && r.created_at >= since)
            .count())
    }
}
