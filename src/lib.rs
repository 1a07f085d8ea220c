//! Rosterdb - An embedded member/team roster store
//!
//! This library provides a small persistence layer for a roster of members
//! grouped into teams, backed by SQLite through SeaORM. It covers entity
//! CRUD, declarative query building, offset pagination with page or slice
//! results, bulk updates, row locking and DTO projections.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Database connection and schema management
//! * [`entities`] - SeaORM entity models for members and teams
//! * [`repositories`] - Repository layer for database operations
//! * [`query`] - Declarative query descriptions for members
//! * [`pagination`] - Page and slice execution over any select
//! * [`projections`] - Read-only DTO row shapes

/// Configuration module for managing application settings
pub mod config;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup for the demo binary and host applications
pub mod logger;

/// Offset pagination with page and slice results
pub mod pagination;

/// Read-only projection types returned by reporting queries
pub mod projections;

/// Declarative query descriptions executed by the repositories
pub mod query;

/// Repository layer for database operations
pub mod repositories;

/// Database connection and schema management
pub mod storage;

// Re-export entity models for convenient access
pub use entities::{member, team};

pub use config::Config;
pub use pagination::{fetch_page, fetch_slice, Page, PageRequest, Slice, Sort};
pub use projections::MemberDto;
pub use query::MemberQuery;
pub use repositories::{MemberRawQueries, MemberRepository, ReadOnly, TeamRepository};
pub use storage::Storage;
