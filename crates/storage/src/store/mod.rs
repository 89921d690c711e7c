use uuid::Uuid;

use crate::dto::top_score::{NewScore, ScoreChanges};
use crate::error::Result;
use crate::models::ScoreRecord;

pub mod memory;

pub use memory::MemoryScoreStore;

/// Durable collection of score records.
///
/// Implementations assign `id`, `created_at` and `updated_at`; callers never set them.
/// Every lookup by an unknown id fails with `StorageError::NotFound`.
#[async_trait::async_trait]
pub trait ScoreStore: Send + Sync {
    /// All records in the store's natural (creation) order
    async fn list(&self) -> Result<Vec<ScoreRecord>>;

    async fn find_by_id(&self, id: Uuid) -> Result<ScoreRecord>;

    async fn create(&self, score: &NewScore) -> Result<ScoreRecord>;

    async fn update(&self, id: Uuid, changes: &ScoreChanges) -> Result<ScoreRecord>;

    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Removes every record, returning how many were deleted
    async fn delete_all(&self) -> Result<u64>;
}
