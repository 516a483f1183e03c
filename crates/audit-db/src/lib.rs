//! # audit-db
//!
//! Database layer implementing the audit persistence port with PostgreSQL
//! via SQLx. It handles:
//!
//! - Connection pool management
//! - The `log_audit` database model with SQLx `FromRow`
//! - Model ↔ entity mapping
//! - The repository implementation
//! - The table schema handed to the host's migration step
//!
//! ## Usage
//!
//! ```rust,ignore
//! use audit_db::{create_pool, ensure_schema, DatabaseConfig, PgAuditLogRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let repo = PgAuditLogRepository::new(pool);
//!
//!     // Hand the repository to the subscriber...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::PgAuditLogRepository;
pub use schema::{ensure_schema, LOG_AUDIT_DDL, LOG_AUDIT_TABLE};
