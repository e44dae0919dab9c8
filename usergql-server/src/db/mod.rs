//! Data-access layer - connection pool and user stores
//!
//! # Design Principles
//!
//! - One parameterized statement per operation, no transactions
//! - Connections are acquired per statement, never held across calls
//! - Store errors propagate untranslated; absence is `None`, not an error

pub mod memory;
pub mod pool;
pub mod store;
pub mod users;

pub use memory::MemoryUserStore;
pub use pool::create_pool;
pub use store::UserStore;
pub use users::MySqlUserStore;
