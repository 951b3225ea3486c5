//! # Textboard Configuration Crate
//!
//! Builds the application's `Settings` once at startup from the process
//! environment, falling back to defaults suitable for local development.
//! The resulting value is handed explicitly to the database and web layers;
//! nothing in the application reads the environment after this point.

use crate::error::ConfigError;
use crate::settings::RawServerSettings;
use std::net::SocketAddr;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, ServerOverrides, ServerSettings, Settings};

pub const DEFAULT_DATABASE: &str = "app_db";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "postgres";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";

/// Loads the application configuration from the process environment.
///
/// Recognised variables are `DATABASE`, `USER`, `PASSWORD`, `HOST`, `PORT`
/// and `LISTEN_ADDR`. Every one of them is optional.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(None)
}

/// Same as [`load_settings`], but reads from `vars` instead of the real
/// environment when it is provided.
pub fn load_settings_from(
    vars: Option<config::Map<String, String>>,
) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("database", DEFAULT_DATABASE)?
        .set_default("user", DEFAULT_USER)?
        .set_default("password", DEFAULT_PASSWORD)?
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
        .add_source(config::Environment::default().source(vars))
        .build()?;

    let database = builder.clone().try_deserialize::<DatabaseSettings>()?;
    let raw_server = builder.try_deserialize::<RawServerSettings>()?;

    let listen_addr = raw_server
        .listen_addr
        .parse::<SocketAddr>()
        .map_err(|e| {
            ConfigError::ValidationError(format!(
                "LISTEN_ADDR '{}' is not a valid socket address: {}",
                raw_server.listen_addr, e
            ))
        })?;

    tracing::debug!(?database, %listen_addr, "Configuration loaded.");

    Ok(Settings {
        database,
        server: ServerSettings { listen_addr },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = load_settings_from(Some(vars(&[]))).unwrap();

        assert_eq!(settings.database.name, "app_db");
        assert_eq!(settings.database.user, "postgres");
        assert_eq!(settings.database.password, "postgres");
        assert_eq!(settings.database.host, "localhost");
        assert_eq!(settings.database.port, 5432);
        assert_eq!(settings.server.listen_addr, "0.0.0.0:80".parse().unwrap());
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = load_settings_from(Some(vars(&[
            ("DATABASE", "texts_prod"),
            ("USER", "writer"),
            ("PASSWORD", "12345"),
            ("HOST", "db.internal"),
            ("PORT", "6543"),
            ("LISTEN_ADDR", "127.0.0.1:8080"),
        ])))
        .unwrap();

        assert_eq!(settings.database.name, "texts_prod");
        assert_eq!(settings.database.user, "writer");
        assert_eq!(settings.database.password, "12345");
        assert_eq!(settings.database.host, "db.internal");
        assert_eq!(settings.database.port, 6543);
        assert_eq!(settings.server.listen_addr.port(), 8080);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = load_settings_from(Some(vars(&[("PORT", "postgres")]))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn malformed_listen_addr_is_rejected() {
        let err = load_settings_from(Some(vars(&[("LISTEN_ADDR", "localhost")]))).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn debug_output_hides_password() {
        let settings = load_settings_from(Some(vars(&[("PASSWORD", "hunter2")]))).unwrap();
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn overrides_replace_listen_addr() {
        let mut settings = load_settings_from(Some(vars(&[]))).unwrap();
        settings.apply(&ServerOverrides {
            listen: Some("127.0.0.1:3000".parse().unwrap()),
        });
        assert_eq!(settings.server.listen_addr.port(), 3000);

        settings.apply(&ServerOverrides::default());
        assert_eq!(settings.server.listen_addr.port(), 3000);
    }
}
