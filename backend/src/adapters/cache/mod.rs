//! Memo cache adapters.
//!
//! - `InMemoryMemoCache` - Process-local map for tests and development
//! - `RedisMemoCache` - Redis-backed for production

mod in_memory;
mod redis;

pub use in_memory::InMemoryMemoCache;
pub use self::redis::RedisMemoCache;
