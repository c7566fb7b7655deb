use serde::{Deserialize, Serialize};

/// Connection settings for the OctoPrint instance the panel talks to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the OctoPrint web interface, e.g. `http://octopi.local`.
    pub base_url: String,
    /// Application API key used for the `X-Api-Key` header.
    pub api_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            api_key: String::new(),
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Connection settings for the OctoPrint server.
    pub server: ServerConfig,
}
