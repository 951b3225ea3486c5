//! # Textboard Database Crate
//!
//! This crate owns every interaction with the PostgreSQL store that holds the
//! `texts` table.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The web layer talks to the `TextStore`
//!   trait and never sees a connection.
//! - **Scoped connections:** There is no pool. Each operation opens a
//!   connection, runs exactly one auto-committed statement, and closes the
//!   connection before returning, whatever the outcome.
//! - **Explicit results:** Connection failures, statement failures and empty
//!   input are distinct `DbError` variants, separate from a successful
//!   statement that touched zero rows.
//!
//! ## Public API
//!
//! - `connect` / `release`: open and close a single connection.
//! - `ensure_schema`: idempotently creates the `texts` table.
//! - `DbRepository`: the `TextStore` implementation backed by PostgreSQL.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, ensure_schema, release};
pub use error::DbError;
pub use repository::{DbRepository, TextRecord, TextStore};
