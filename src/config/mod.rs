/// Database configuration and connection management
pub mod database;

/// Role choice configuration loading from config.toml
pub mod roles;
