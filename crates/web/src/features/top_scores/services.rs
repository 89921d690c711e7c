use storage::{
    ScoreStore,
    dto::top_score::{NewScore, ScoreChanges},
    models::{RankedEntry, ScoreRecord},
    services::ranking,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::middleware::ownership::{Requester, require_ownership};

/// List every score in store order
pub async fn list_scores(store: &dyn ScoreStore) -> ApiResult<Vec<ScoreRecord>> {
    Ok(store.list().await?)
}

/// Rank all stored scores and keep the leaderboard head
pub async fn top_five(store: &dyn ScoreStore) -> ApiResult<Vec<RankedEntry>> {
    let scores = store.list().await?;
    Ok(ranking::rank_top_scores(scores))
}

pub async fn get_score(store: &dyn ScoreStore, id: Uuid) -> ApiResult<ScoreRecord> {
    Ok(store.find_by_id(id).await?)
}

pub async fn create_score(store: &dyn ScoreStore, new_score: &NewScore) -> ApiResult<ScoreRecord> {
    let created = store.create(new_score).await?;
    tracing::info!(id = %created.id, score = created.score, "Created top score");
    Ok(created)
}

/// Update a score the requester is allowed to modify
pub async fn update_score(
    store: &dyn ScoreStore,
    id: Uuid,
    requester: &Requester,
    changes: &ScoreChanges,
) -> ApiResult<()> {
    let existing = store.find_by_id(id).await?;
    require_ownership(requester, &existing)?;

    if changes.is_empty() {
        tracing::debug!(%id, "Update carried no changes");
        return Ok(());
    }

    store.update(existing.id, changes).await?;
    tracing::info!(%id, "Updated top score");
    Ok(())
}

pub async fn delete_score(store: &dyn ScoreStore, id: Uuid) -> ApiResult<()> {
    store.delete(id).await?;
    tracing::info!(%id, "Deleted top score");
    Ok(())
}

/// Delete every score
pub async fn delete_all_scores(store: &dyn ScoreStore) -> ApiResult<u64> {
    let deleted = store.delete_all().await?;
    tracing::info!(deleted, "Deleted all top scores");
    Ok(deleted)
}
