use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ScoreStore;
use crate::dto::top_score::{NewScore, ScoreChanges};
use crate::error::{Result, StorageError};
use crate::models::ScoreRecord;

/// Process-local store, used when no database is configured and in tests
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: RwLock<Vec<ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn list(&self) -> Result<Vec<ScoreRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ScoreRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create(&self, score: &NewScore) -> Result<ScoreRecord> {
        let now = Utc::now();
        let record = ScoreRecord {
            id: Uuid::new_v4(),
            name: score.name.clone(),
            score: score.score,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(record.clone());

        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: &ScoreChanges) -> Result<ScoreRecord> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StorageError::NotFound)?;

        if let Some(name) = &changes.name {
            record.name = name.clone();
        }
        if let Some(score) = changes.score {
            record.score = score;
        }
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StorageError::NotFound)?;

        records.remove(position);

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut records = self.records.write().await;
        let deleted = records.len() as u64;
        records.clear();

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_score(name: &str, score: f64) -> NewScore {
        NewScore {
            name: name.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = MemoryScoreStore::new();
        let record = store.create(&new_score("ada", 10.0)).await.unwrap();

        assert_eq!(record.name, "ada");
        assert_eq!(record.score, 10.0);
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.find_by_id(record.id).await.unwrap(), record);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = MemoryScoreStore::new();
        for (name, score) in [("a", 3.0), ("b", 1.0), ("c", 2.0)] {
            store.create(&new_score(name, score)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let store = MemoryScoreStore::new();
        let record = store.create(&new_score("ada", 10.0)).await.unwrap();

        let changes = ScoreChanges {
            name: None,
            score: Some(99.0),
        };
        let updated = store.update(record.id, &changes).await.unwrap();

        assert_eq!(updated.name, "ada");
        assert_eq!(updated.score, 99.0);
        assert!(updated.updated_at >= record.updated_at);
        assert_eq!(updated.created_at, record.created_at);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryScoreStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(store.find_by_id(id).await, Err(StorageError::NotFound)));
        assert!(matches!(
            store.update(id, &ScoreChanges::default()).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(store.delete(id).await, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_leaves_other_records() {
        let store = MemoryScoreStore::new();
        let first = store.create(&new_score("a", 1.0)).await.unwrap();
        let second = store.create(&new_score("b", 2.0)).await.unwrap();

        store.delete(first.id).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn test_delete_all_empties_store() {
        let store = MemoryScoreStore::new();
        store.create(&new_score("a", 1.0)).await.unwrap();
        store.create(&new_score("b", 2.0)).await.unwrap();

        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }
}
