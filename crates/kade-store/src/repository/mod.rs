//! # Repository Layer
//!
//! One repository per aggregate, each holding a pool clone:
//!
//! - [`cart`] - Persisted cart snapshots, keyed by session
//! - [`order`] - Assembled orders and their lifecycle
//!
//! Queries are plain `sqlx::query` with bind parameters; domain values are
//! converted at this boundary, so `kade-core` types never learn about SQL.

pub mod cart;
pub mod order;
