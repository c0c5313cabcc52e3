//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (JWT, mock)
//! - `cache` - Memo cache for the featured speaker (Redis, in-memory)
//! - `http` - axum REST API
//! - `memory` - In-memory entity store for tests and local runs
//! - `postgres` - PostgreSQL entity store
//! - `tasks` - Background task queue and worker

pub mod auth;
pub mod cache;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod tasks;
