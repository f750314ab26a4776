use uuid::Uuid;

use podium_app::repository::PlayerRepository;
use podium_types::{
    Result,
    common::Player,
    errors::{ApplicationError, DbError},
};

use crate::{connection::DbPool, models as db_models};

/// Implements PlayerRepository on top of the shared connection pool.
/// Every operation is a single statement, no transaction is opened.
#[derive(Debug, Clone)]
pub struct PostgresPlayerRepository {
    pool: DbPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn insert(&self, player: &Player) -> Result<(), ApplicationError> {
        sqlx::query(
            r#"
              INSERT INTO players (id, name, score)
              VALUES ($1, $2, $3)
              "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(player.score)
        .execute(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn update(&self, player: &Player) -> Result<(), ApplicationError> {
        let result = sqlx::query(
            r#"
              UPDATE players
              SET name = $2, score = $3
              WHERE id = $1
              "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(player.score)
        .execute(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerNotFound(player.id)));
        }

        Ok(())
    }

    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
        let player = sqlx::query_as::<_, db_models::Player>(
            r#"SELECT id, name, score, created_at FROM players WHERE id = $1"#,
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(player.into())
    }

    async fn top_by_score(&self, limit: i64) -> Result<Vec<Player>, ApplicationError> {
        let players = sqlx::query_as::<_, db_models::Player>(
            r#"
              SELECT id, name, score, created_at
              FROM players
              ORDER BY score DESC, created_at ASC
              LIMIT $1
              "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(players.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{establish_test_connection_pool, run_migrations};

    async fn setup() -> Result<PostgresPlayerRepository> {
        let pool = establish_test_connection_pool().await?;
        run_migrations(&pool).await?;
        Ok(PostgresPlayerRepository::new(pool))
    }

    #[tokio::test]
    #[ignore = "needs a Postgres instance at TEST_DATABASE_URL"]
    async fn test_insert_update_and_get() -> Result<()> {
        let repo = setup().await?;
        let mut player = Player::new("Ada".to_string(), 100);

        repo.insert(&player).await?;
        assert_eq!(repo.get_by_id(player.id).await?, player);

        player.score = 120;
        player.name = "Ada L.".to_string();
        repo.update(&player).await?;
        assert_eq!(repo.get_by_id(player.id).await?, player);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "needs a Postgres instance at TEST_DATABASE_URL"]
    async fn test_missing_player_is_not_found() -> Result<()> {
        let repo = setup().await?;
        let ghost = Player::new("Ghost".to_string(), 1);

        assert!(repo.get_by_id(ghost.id).await.unwrap_err().is_not_found());
        assert!(repo.update(&ghost).await.unwrap_err().is_not_found());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "needs a Postgres instance at TEST_DATABASE_URL"]
    async fn test_top_by_score_is_descending() -> Result<()> {
        let repo = setup().await?;
        // Far above anything other tests insert, so these three stay on top.
        let base = i64::MAX - 1_000;
        for (name, offset) in [("Bob", 90), ("Ada", 100), ("Cid", 80)] {
            repo.insert(&Player::new(name.to_string(), base + offset))
                .await?;
        }

        let top = repo.top_by_score(2).await?;
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].score, base + 100);
        assert_eq!(top[1].score, base + 90);

        Ok(())
    }
}
