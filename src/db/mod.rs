//! Database module: uniform per-entity tables behind a single actor.
//!
//! Layout:
//! - `models.rs`: the row struct shared by every content table
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `actor.rs`: the DB actor and its cloneable RPC handle

pub mod actor;
pub mod models;
pub mod schema;

pub use actor::{DbActorHandle, spawn};
pub use models::DbRecord;
