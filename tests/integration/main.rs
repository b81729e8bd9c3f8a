//! API integration tests
//!
//! These need a PostgreSQL server: set `DATABASE_URL` and run with
//! `cargo test -- --ignored`. Each test gets a fresh migrated database.

mod helpers;
