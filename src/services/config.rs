use log::warn;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;
const BACKEND_PATH: &str = "/backend";

pub fn getenv(name: &str) -> String {
    match std::env::var(name) {
        Ok(var) => var,
        _ => "".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(getenv)
    }

    /// Build a config from any `name -> value` lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let mut host = lookup("WPEB_HOST");
        if host.is_empty() {
            host = DEFAULT_HOST.to_string();
            warn!("Could not find WPEB_HOST environment variable. Falling back to {DEFAULT_HOST}.");
        }

        let raw_port = lookup("WPEB_PORT");
        let port = if raw_port.is_empty() {
            warn!("Could not find WPEB_PORT environment variable. Falling back to {DEFAULT_PORT}.");
            DEFAULT_PORT
        } else {
            match raw_port.parse::<u16>() {
                Ok(port) => port,
                Err(e) => {
                    warn!("WPEB_PORT={raw_port} is not a valid port ({e}). Falling back to {DEFAULT_PORT}.");
                    DEFAULT_PORT
                }
            }
        };

        ClientConfig { host, port }
    }

    pub fn url(&self) -> String {
        format!("ws://{}:{}{}", self.host, self.port, BACKEND_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
        }
    }
}
