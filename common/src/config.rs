use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Addresses the site listens on. Fixed at build time, not read from the environment.
pub const DEFAULT_LISTEN_URLS: &[&str] = &[
    "http://localhost:60933",
    "http://52.178.135.160:60933/",
    "http://192.168.1.2:60933",
];

pub struct Config {
    /// Addresses to bind, in order.
    pub listen_urls: Vec<ListenUrl>,
    /// Honour the `mode` query parameter (preview / edit) when rendering content.
    ///
    /// When disabled every request is treated as a live, published-only view.
    pub visual_editor: bool,
    /// Optional JSON file replacing the bundled demo content.
    pub seed: Option<PathBuf>,
}

impl Config {
    pub fn new(visual_editor: bool, seed: Option<PathBuf>) -> Result<Self, ConfigError> {
        let listen_urls = DEFAULT_LISTEN_URLS
            .iter()
            .map(|url| url.parse::<ListenUrl>())
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            listen_urls,
            visual_editor,
            seed,
        })
    }
}

/// A single `http://host:port` listen address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenUrl {
    pub host: String,
    pub port: u16,
}

impl ListenUrl {
    /// The `host:port` form accepted by socket binding APIs.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ListenUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}:{}", self.host, self.port)
    }
}

impl FromStr for ListenUrl {
    type Err = ConfigError;

    /// Parses `http://host:port`, with an optional trailing slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidListenUrl {
            url: s.to_string(),
            reason: reason.to_string(),
        };

        let rest = s
            .strip_prefix("http://")
            .ok_or_else(|| invalid("only http:// is supported"))?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.contains('/') {
            return Err(invalid("path segments are not allowed"));
        }

        let (host, port) = rest
            .rsplit_once(':')
            .ok_or_else(|| invalid("missing port"))?;

        if host.is_empty() {
            return Err(invalid("missing host"));
        }

        let port: u16 = port.parse().map_err(|_| invalid("port is not a number"))?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}
