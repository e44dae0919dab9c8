//! GraphQL output types

use async_graphql::{Object, SimpleObject, ID};

use crate::models::{User, WriteOutcome};

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID::from(self.id)
    }

    async fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Store metadata for a write: rows affected and, for inserts, the new id.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct MutationResult {
    pub affected_rows: u64,
    pub insert_id: Option<ID>,
}

impl From<WriteOutcome> for MutationResult {
    fn from(outcome: WriteOutcome) -> Self {
        Self {
            affected_rows: outcome.affected_rows,
            insert_id: outcome.insert_id.map(ID::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_outcome_carries_id() {
        let result = MutationResult::from(WriteOutcome::inserted(12));
        assert_eq!(result.affected_rows, 1);
        assert_eq!(result.insert_id, Some(ID::from("12")));
    }

    #[test]
    fn delete_outcome_has_no_id() {
        let result = MutationResult::from(WriteOutcome::affected(0));
        assert_eq!(result.insert_id, None);
    }
}
