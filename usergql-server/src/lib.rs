//! usergql-server: GraphQL bridge over a single MySQL `user` table
//!
//! Each GraphQL field maps to exactly one parameterized SQL statement.
//! The store sits behind the [`db::UserStore`] trait so the schema can be
//! served from MySQL or from an in-process table.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod http;
pub mod models;

pub use config::StoreConfig;
pub use error::{ConfigError, Result, ServerError, StoreError};
pub use graphql::{build_schema, UserSchema};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{User, WriteOutcome};
