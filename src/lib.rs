//! Metaforge - MongoDB schema provisioning for the trading platform.
//!
//! Provisions the `trading_meta` database: six collections guarded by
//! `$jsonSchema` validators plus the secondary indexes the trading services
//! query through. Two entry points cover the lifecycle:
//!
//! - **`provision`** creates the whole catalog in one shot against an empty
//!   database and fails loudly if anything already exists.
//! - **`migrate`** applies versioned schema changes recorded in a ledger
//!   collection, so it can be rerun safely.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`schema`] - The collection catalog: validators, index models, field enums
//! - [`provision`] - One-shot catalog creation
//! - [`migration`] - Versioned migrations and the ledger
//! - [`db`] - Client construction and connectivity checks
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command definitions and handlers
//!
//! # Example
//!
//! ```no_run
//! use metaforge::config::Config;
//!
//! # async fn provision_empty_database() -> metaforge::Result<()> {
//! let config = Config::load("config.toml")?;
//! let database = metaforge::db::connect(&config.database).await?;
//! metaforge::provision::apply(&database).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod migration;
pub mod provision;
pub mod schema;

pub use config::Config;
pub use error::{Error, Result};
