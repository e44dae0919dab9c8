//! MySQL-backed user store
//!
//! One statement per operation against the `user` table:
//! - list: SELECT, optionally filtered by exact name
//! - get: SELECT by id, first row or nothing
//! - insert/update/delete: reports affected rows, never the row itself

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::UserStore;
use crate::error::StoreError;
use crate::models::{User, WriteOutcome};

/// User store over a shared connection pool.
#[derive(Clone)]
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip a trivial statement to check the database is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn list_users(&self, name_filter: Option<&str>) -> Result<Vec<User>, StoreError> {
        let users = match name_filter {
            Some(name) => {
                sqlx::query_as::<_, User>("SELECT id, name, email FROM `user` WHERE name = ?")
                    .bind(name)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, User>("SELECT id, name, email FROM `user`")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(users)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM `user` WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn insert_user(&self, name: &str, email: &str) -> Result<WriteOutcome, StoreError> {
        let result = sqlx::query("INSERT INTO `user` (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(WriteOutcome {
            affected_rows: result.rows_affected(),
            insert_id: Some(result.last_insert_id()),
        })
    }

    async fn update_user(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<WriteOutcome, StoreError> {
        let result = sqlx::query("UPDATE `user` SET name = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(WriteOutcome::affected(result.rows_affected()))
    }

    async fn delete_user(&self, id: i64) -> Result<WriteOutcome, StoreError> {
        let result = sqlx::query("DELETE FROM `user` WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(WriteOutcome::affected(result.rows_affected()))
    }
}
