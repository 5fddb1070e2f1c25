//! sona-core
//!
//! Pure domain types for the Sona screening engine: questionnaires,
//! questions, response shapes, and interpretation tables. No I/O — this is
//! the shared vocabulary of the catalog, the session engine, and the
//! TypeScript presentation layer (via ts-rs exports).

pub mod models;
