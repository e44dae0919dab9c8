//! Row types for the `user` table

use sqlx::FromRow;

/// A row of the `user` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Summary of a write statement, as reported by the store.
///
/// Mutations return this instead of the affected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOutcome {
    pub affected_rows: u64,
    /// Generated id; only set for inserts.
    pub insert_id: Option<u64>,
}

impl WriteOutcome {
    pub fn affected(rows: u64) -> Self {
        Self {
            affected_rows: rows,
            insert_id: None,
        }
    }

    pub fn inserted(id: u64) -> Self {
        Self {
            affected_rows: 1,
            insert_id: Some(id),
        }
    }
}

/// Parse a GraphQL `ID` into a row id.
///
/// Anything that is not a non-negative base-10 integer names no row.
pub fn parse_user_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<u64>().ok().and_then(|id| i64::try_from(id).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_user_id("42"), Some(42));
        assert_eq!(parse_user_id(" 7 "), Some(7));
        assert_eq!(parse_user_id("0"), Some(0));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("1.5"), None);
        assert_eq!(parse_user_id(&u64::MAX.to_string()), None);
    }

    #[test]
    fn outcome_constructors() {
        assert_eq!(
            WriteOutcome::inserted(9),
            WriteOutcome {
                affected_rows: 1,
                insert_id: Some(9)
            }
        );
        assert_eq!(WriteOutcome::affected(0).insert_id, None);
    }
}
