//! Query and mutation roots bound to the user store
//!
//! Every resolver awaits exactly one store call. Store failures become
//! field errors; sibling fields in the same request still resolve, which is
//! why every root field is nullable.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Error, Object, Result, Schema, ID};
use tracing::{debug, error};

use super::types::MutationResult;
use crate::db::UserStore;
use crate::error::StoreError;
use crate::models::{parse_user_id, User, WriteOutcome};

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around a store.
pub fn build_schema(store: Arc<dyn UserStore>) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Schema definition language for the exposed surface.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn store<'a>(ctx: &'a Context<'_>) -> Result<&'a Arc<dyn UserStore>> {
    ctx.data::<Arc<dyn UserStore>>()
}

fn store_failure(field: &'static str) -> impl FnOnce(StoreError) -> Error {
    move |err| {
        error!(field, error = %err, "store operation failed");
        Error::new(err.to_string())
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All users, or only users whose name equals `name` exactly.
    async fn users(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Option<Vec<User>>> {
        // An empty filter lists everything.
        let filter = name.as_deref().filter(|n| !n.is_empty());
        debug!(name = ?filter, "resolving users");

        let users = store(ctx)?
            .list_users(filter)
            .await
            .map_err(store_failure("users"))?;
        Ok(Some(users))
    }

    /// A single user, or null when no row has this id.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        debug!(id = %id.as_str(), "resolving user");
        let Some(id) = parse_user_id(&id) else {
            return Ok(None);
        };

        let user = store(ctx)?
            .get_user(id)
            .await
            .map_err(store_failure("user"))?;
        Ok(user)
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> Result<Option<MutationResult>> {
        debug!(%name, %email, "resolving addUser");

        let outcome = store(ctx)?
            .insert_user(&name, &email)
            .await
            .map_err(store_failure("addUser"))?;
        Ok(Some(outcome.into()))
    }

    /// Overwrites both name and email; an omitted argument is stored as null.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<MutationResult>> {
        debug!(id = %id.as_str(), ?name, ?email, "resolving updateUser");
        let Some(id) = parse_user_id(&id) else {
            return Ok(Some(WriteOutcome::default().into()));
        };

        let outcome = store(ctx)?
            .update_user(id, name.as_deref(), email.as_deref())
            .await
            .map_err(store_failure("updateUser"))?;
        Ok(Some(outcome.into()))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<MutationResult>> {
        debug!(id = %id.as_str(), "resolving deleteUser");
        let Some(id) = parse_user_id(&id) else {
            return Ok(Some(WriteOutcome::default().into()));
        };

        let outcome = store(ctx)?
            .delete_user(id)
            .await
            .map_err(store_failure("deleteUser"))?;
        Ok(Some(outcome.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_exposes_wire_names() {
        let sdl = sdl();
        for name in [
            "type User",
            "users(name: String): [User!]\n",
            "user(id: ID!): User\n",
            "addUser(name: String!, email: String!): MutationResult\n",
            "updateUser(id: ID!, name: String, email: String): MutationResult\n",
            "deleteUser(id: ID!): MutationResult\n",
            "affectedRows: Int!",
            "insertId: ID",
        ] {
            assert!(sdl.contains(name), "missing `{}` in:\n{}", name, sdl);
        }
    }

    #[test]
    fn sdl_root_types() {
        let sdl = sdl();
        assert!(sdl.contains("type Query {"));
        assert!(sdl.contains("type Mutation {"));
        assert!(!sdl.contains("type Subscription"));
    }
}
