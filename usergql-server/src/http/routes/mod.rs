//! Route modules

pub mod graphql;
pub mod health;
