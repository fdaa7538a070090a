use serde::Deserialize;

/// Configuration options specific to the Trivia service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Path to the SQLite database file.
    pub database_url: String,
}

impl ServerConfig {
    /// Load settings from `config/default.yaml`, an optional
    /// `config/{APP_ENV}.yaml` overlay and `APP_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
