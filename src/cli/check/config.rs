use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Validate the configuration file without touching the database.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();

    output::section("Configuration Check");
    output::field("Config", path.display());

    if !path.exists() {
        output::error("Configuration file not found");
        output::hint(&format!(
            "create one with: metaforge config init {}",
            path.display()
        ));
        return Err(ConfigError::ReadFile(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            path.display().to_string(),
        ))
        .into());
    }

    let config = Config::load(path)?;
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Host", &config.database.host);
    output::field("Port", config.database.port);
    output::field("Database", &config.database.database);
    output::field("Auth source", &config.database.auth_source);
    output::field("URI", config.database.redacted_uri());

    if config.database.has_credentials() {
        output::success("Credentials detected (MONGO_USER / MONGO_PASSWORD)");
    } else {
        output::warning("No credentials set; set MONGO_USER and MONGO_PASSWORD if required");
    }

    output::success("Configuration check complete");

    Ok(())
}
