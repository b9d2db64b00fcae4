//! Server settings read from the environment.
//!
//! | Variable               | Default          |
//! |------------------------|------------------|
//! | `OCTOFIT_HOST`         | `127.0.0.1`      |
//! | `OCTOFIT_PORT`         | `8000`           |
//! | `OCTOFIT_DB`           | `octofit.sqlite` |
//! | `OCTOFIT_OPEN_BROWSER` | off              |
//! | `OCTOFIT_PAGINATE`     | on               |

use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub open_browser: bool,
    /// Wrap collection responses in a `{count, next, previous, results}` envelope.
    pub paginate: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            db_path: "octofit.sqlite".to_string(),
            open_browser: false,
            paginate: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("OCTOFIT_HOST").unwrap_or(defaults.host),
            port: lookup("OCTOFIT_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            db_path: lookup("OCTOFIT_DB").unwrap_or(defaults.db_path),
            open_browser: lookup("OCTOFIT_OPEN_BROWSER")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.open_browser),
            paginate: lookup("OCTOFIT_PAGINATE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.paginate),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
