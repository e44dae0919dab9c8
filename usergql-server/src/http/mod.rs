//! HTTP server layer
//!
//! Axum server with:
//! - GraphQL endpoint plus GraphiQL page
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, ServerConfig};
