use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub rent: RentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The rent agreement as the landlord configured it. Loaded once at startup
/// and immutable afterwards; every payment copies these values verbatim.
/// The amount is an opaque string, not a number.
#[derive(Debug, Deserialize, Clone)]
pub struct RentConfig {
    pub upi_id: String,
    pub payee_name: String,
    pub amount_inr: String,
    pub note: String,
    pub owner_name: String,
}

impl Settings {
    /// Missing rent configuration fails deserialization here, which aborts
    /// startup. There is no request-time fallback.
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (with RENT_PORTAL__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("RENT_PORTAL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
