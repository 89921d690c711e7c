use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted name/score pair. `id` and both timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: Uuid,
    pub name: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A score record annotated with its 1-based position on the leaderboard.
///
/// Only ever built by the ranking engine and returned to clients; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankedEntry {
    pub placement: u32,
    #[serde(flatten)]
    pub record: ScoreRecord,
}
