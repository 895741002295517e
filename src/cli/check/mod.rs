//! Configuration and connection diagnostic commands.

mod config;
mod connection;

pub use config::execute_config;
pub use connection::execute_connection;
