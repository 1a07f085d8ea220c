//! Storage layer owning the database connection.
//!
//! [`Storage`] opens SQLite (file-backed or shared-cache in-memory), creates
//! the schema from the entity definitions, and hands out the connection that
//! repositories and transactions run on.

pub mod db;

pub use db::Storage;
