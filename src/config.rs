use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Locations of the offline import sources.
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    pub competition_csv: PathBuf,
    pub lab_fixture: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub import: ImportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", vec!["*".to_string()])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://labsite.db?mode=rwc")?
            .set_default("import.competition_csv", "images/Competition.csv")?
            .set_default("import.lab_fixture", "emolabs-website.json")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., LABSITE__DATABASE__URL)
            .add_source(Environment::with_prefix("LABSITE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
