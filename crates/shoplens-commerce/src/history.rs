//! Search history.
//!
//! Records of past searches behind an async store trait. The engine never
//! reads history; a store failure only affects the record, not the results.

use crate::error::CommerceError;
use crate::ids::{SearchRecordId, UserId};
use crate::search::FilterCriteria;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, CommerceError>;

/// One completed search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: SearchRecordId,
    pub user_id: UserId,
    pub query: String,
    /// Criteria as given, kept as JSON so records outlive criteria changes.
    pub filters: serde_json::Value,
    pub results_count: usize,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

impl SearchRecord {
    pub fn new(
        user_id: UserId,
        query: impl Into<String>,
        criteria: &FilterCriteria,
        results_count: usize,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: SearchRecordId::generate(),
            user_id,
            query: query.into(),
            filters: serde_json::to_value(criteria).unwrap_or(serde_json::Value::Null),
            results_count,
            country: country.into(),
            created_at: Utc::now(),
        }
    }

    /// Criteria stored with the record, if they still parse.
    pub fn criteria(&self) -> Option<FilterCriteria> {
        serde_json::from_value(self.filters.clone()).ok()
    }
}

/// Search history backend trait.
#[async_trait]
pub trait SearchHistory: Send + Sync {
    /// Store a record.
    async fn append(&self, record: SearchRecord) -> HistoryResult<()>;

    /// A user's records, newest first, at most `limit`.
    async fn list(&self, user_id: &UserId, limit: usize) -> HistoryResult<Vec<SearchRecord>>;

    /// Delete one record. Returns whether it existed.
    async fn delete(&self, id: &SearchRecordId) -> HistoryResult<bool>;

    /// Delete all of a user's records. Returns how many were removed.
    async fn clear(&self, user_id: &UserId) -> HistoryResult<usize>;

    /// Number of a user's records created at or after `since`.
    async fn count_since(&self, user_id: &UserId, since: DateTime<Utc>) -> HistoryResult<usize>;
}

/// Newest-first page of one user's records.
pub fn newest_first(records: &[SearchRecord], user_id: &UserId, limit: usize) -> Vec<SearchRecord> {
    let mut mine: Vec<SearchRecord> = records
        .iter()
        .filter(|r| &r.user_id == user_id)
        .cloned()
        .collect();
    mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    mine.truncate(limit);
    mine
}

/// History held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    records: RwLock<Vec<SearchRecord>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SearchHistory for InMemoryHistory {
    async fn append(&self, record: SearchRecord) -> HistoryResult<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list(&self, user_id: &UserId, limit: usize) -> HistoryResult<Vec<SearchRecord>> {
        let records = self.records.read().await;
        Ok(newest_first(&records, user_id, limit))
    }

    async fn delete(&self, id: &SearchRecordId) -> HistoryResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| &r.id != id);
        Ok(records.len() != before)
    }

    async fn clear(&self, user_id: &UserId) -> HistoryResult<usize> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| &r.user_id != user_id);
        Ok(before - records.len())
    }

    async fn count_since(&self, user_id: &UserId, since: DateTime<Utc>) -> HistoryResult<usize> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| &r.user_id == user_id && r.created_at >= since)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortOption;
    use chrono::Duration;

    fn record(user: &str, query: &str, minutes_ago: i64) -> SearchRecord {
        let mut r = SearchRecord::new(UserId::new(user), query, &FilterCriteria::new(), 50, "US");
        r.created_at = Utc::now() - Duration::minutes(minutes_ago);
        r
    }

    #[test]
    fn test_record_keeps_criteria() {
        let criteria = FilterCriteria::new()
            .with_min_price(500.0)
            .with_sort(SortOption::PriceLow);
        let r = SearchRecord::new(UserId::new("u1"), "laptop", &criteria, 12, "US");

        assert_eq!(r.filters["minPrice"], 500.0);
        assert_eq!(r.criteria(), Some(criteria));
    }

    #[tokio::test]
    async fn test_list_newest_first_with_limit() {
        let history = InMemoryHistory::new();
        history.append(record("u1", "old", 30)).await.unwrap();
        history.append(record("u1", "new", 1)).await.unwrap();
        history.append(record("u1", "mid", 10)).await.unwrap();
        history.append(record("u2", "other", 0)).await.unwrap();

        let listed = history.list(&UserId::new("u1"), 2).await.unwrap();
        let queries: Vec<&str> = listed.iter().map(|r| r.query.as_str()).collect();
        assert_eq!(queries, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let history = InMemoryHistory::new();
        let first = record("u1", "a", 2);
        let id = first.id.clone();
        history.append(first).await.unwrap();
        history.append(record("u1", "b", 1)).await.unwrap();
        history.append(record("u2", "c", 1)).await.unwrap();

        assert!(history.delete(&id).await.unwrap());
        assert!(!history.delete(&id).await.unwrap());

        assert_eq!(history.clear(&UserId::new("u1")).await.unwrap(), 1);
        assert!(history.list(&UserId::new("u1"), 10).await.unwrap().is_empty());
        assert_eq!(history.list(&UserId::new("u2"), 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_count_since() {
        let history = InMemoryHistory::new();
        history.append(record("u1", "a", 120)).await.unwrap();
        history.append(record("u1", "b", 5)).await.unwrap();
        history.append(record("u1", "c", 1)).await.unwrap();

        let since = Utc::now() - Duration::minutes(60);
        assert_eq!(history.count_since(&UserId::new("u1"), since).await.unwrap(), 2);
        assert_eq!(history.count_since(&UserId::new("u9"), since).await.unwrap(), 0);
    }
}
