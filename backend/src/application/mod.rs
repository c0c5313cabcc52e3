//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read; both take their ports as
//! `Arc<dyn Port>` so HTTP and tests can swap adapters freely.

pub mod handlers;
