use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

/// Everything needed to open a connection to the PostgreSQL store.
///
/// The field names mirror the environment variables they are read from
/// (`DATABASE`, `USER`, `PASSWORD`, `HOST`, `PORT`).
#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    /// The name of the database holding the `texts` table.
    #[serde(rename = "database")]
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Contains parameters for the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// The socket address the web server binds to.
    pub listen_addr: SocketAddr,
}

/// Raw, unvalidated server section as it comes out of the environment.
#[derive(Debug, Deserialize)]
pub(crate) struct RawServerSettings {
    pub listen_addr: String,
}

/// Command-line overrides applied on top of the environment.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ServerOverrides {
    /// The address to listen on (e.g., "0.0.0.0:80"). Overrides LISTEN_ADDR.
    #[cfg_attr(feature = "clap", arg(long))]
    pub listen: Option<SocketAddr>,
}

impl Settings {
    /// Applies any command-line overrides, leaving unset fields untouched.
    pub fn apply(&mut self, overrides: &ServerOverrides) {
        if let Some(addr) = overrides.listen {
            self.server.listen_addr = addr;
        }
    }
}
