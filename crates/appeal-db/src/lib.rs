//! # appeal-db
//!
//! Database layer implementing the request-store port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Row models with SQLx `FromRow` derives
//! - `RequestRepository` implementation with an atomic guarded upsert
//!
//! ## Usage
//!
//! ```rust,ignore
//! use appeal_common::DatabaseConfig;
//! use appeal_core::RequestRepository;
//! use appeal_db::{create_pool, PgRequestRepository};
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     let repo = PgRequestRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::PgRequestRepository;

/// Embedded migrations for the unban_requests schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
