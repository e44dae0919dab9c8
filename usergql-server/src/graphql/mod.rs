//! GraphQL schema and resolvers
//!
//! Field and argument names are the wire contract: `users`, `user`,
//! `addUser`, `updateUser`, `deleteUser`.

pub mod schema;
pub mod types;

pub use schema::{build_schema, sdl, MutationRoot, QueryRoot, UserSchema};
pub use types::MutationResult;
