//! The store seam resolvers talk to

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{User, WriteOutcome};

/// Operations on the `user` table.
///
/// Each method issues a single statement and resolves once with its result.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, or only rows whose `name` equals `name_filter` exactly.
    async fn list_users(&self, name_filter: Option<&str>) -> Result<Vec<User>, StoreError>;

    /// The row with this id, if any.
    async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn insert_user(&self, name: &str, email: &str) -> Result<WriteOutcome, StoreError>;

    /// Overwrite both columns. `None` is written as NULL; nothing is merged
    /// with the existing row.
    async fn update_user(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<WriteOutcome, StoreError>;

    async fn delete_user(&self, id: i64) -> Result<WriteOutcome, StoreError>;
}
