use sqlx::PgPool;
use uuid::Uuid;

use crate::Database;
use crate::dto::top_score::{NewScore, ScoreChanges};
use crate::error::{Result, StorageError};
use crate::models::ScoreRecord;
use crate::store::ScoreStore;

/// PostgreSQL backed score store
#[derive(Clone)]
pub struct TopScoreRepository {
    pool: PgPool,
}

impl TopScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<Database> for TopScoreRepository {
    fn from(db: Database) -> Self {
        Self::new(db.pool().clone())
    }
}

#[async_trait::async_trait]
impl ScoreStore for TopScoreRepository {
    /// List all scores in insertion order
    async fn list(&self) -> Result<Vec<ScoreRecord>> {
        let scores = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT id, name, score, created_at, updated_at
            FROM top_scores
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(scores)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ScoreRecord> {
        let score = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT id, name, score, created_at, updated_at
            FROM top_scores
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(score)
    }

    async fn create(&self, new_score: &NewScore) -> Result<ScoreRecord> {
        let score = sqlx::query_as::<_, ScoreRecord>(
            r#"
            INSERT INTO top_scores (id, name, score)
            VALUES ($1, $2, $3)
            RETURNING id, name, score, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_score.name)
        .bind(new_score.score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint_violation())?;

        Ok(score)
    }

    /// Update only the supplied columns and bump `updated_at`
    async fn update(&self, id: Uuid, changes: &ScoreChanges) -> Result<ScoreRecord> {
        let score = sqlx::query_as::<_, ScoreRecord>(
            r#"
            UPDATE top_scores
            SET name = COALESCE($2, name),
                score = COALESCE($3, score),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, score, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.score)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_constraint_violation())?
        .ok_or(StorageError::NotFound)?;

        Ok(score)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM top_scores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM top_scores")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
