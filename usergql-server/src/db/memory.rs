//! In-process user store
//!
//! Behaves like the MySQL table for the statements this crate issues:
//! auto-increment ids starting at 1, insertion order for listing, and
//! affected-row counts that count matched rows. Used by `serve --in-memory`
//! and by tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserStore;
use crate::error::StoreError;
use crate::models::{User, WriteOutcome};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<User>,
    last_id: i64,
}

/// A `user` table held in memory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self, name_filter: Option<&str>) -> Result<Vec<User>, StoreError> {
        let table = self.table.read().await;
        let users = table
            .rows
            .iter()
            .filter(|user| match name_filter {
                Some(name) => user.name.as_deref() == Some(name),
                None => true,
            })
            .cloned()
            .collect();
        Ok(users)
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|user| user.id == id).cloned())
    }

    async fn insert_user(&self, name: &str, email: &str) -> Result<WriteOutcome, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.push(User {
            id,
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
        });
        // last_id starts at 0 and only grows, so it is never negative
        Ok(WriteOutcome::inserted(id as u64))
    }

    async fn update_user(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<WriteOutcome, StoreError> {
        let mut table = self.table.write().await;
        let mut affected = 0;
        for user in table.rows.iter_mut().filter(|user| user.id == id) {
            user.name = name.map(str::to_owned);
            user.email = email.map(str::to_owned);
            affected += 1;
        }
        Ok(WriteOutcome::affected(affected))
    }

    async fn delete_user(&self, id: i64) -> Result<WriteOutcome, StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|user| user.id != id);
        Ok(WriteOutcome::affected((before - table.rows.len()) as u64))
    }
}
