//! Server settings loaded from the environment

use crate::error::{Result, StemLifeError};
use std::path::PathBuf;

/// Default cap on fallback aging steps per selection
pub const DEFAULT_MAX_AGING_STEPS: u32 = 150;

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Address to bind (e.g. `0.0.0.0`)
    pub host: String,
    pub port: u16,
    /// JSON catalog to load; the bundled catalog when `None`
    pub catalog_path: Option<PathBuf>,
    pub max_aging_steps: u32,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            catalog_path: None,
            max_aging_steps: DEFAULT_MAX_AGING_STEPS,
            json_logs: false,
        }
    }
}

impl ServerSettings {
    /// Load settings from the process environment.
    ///
    /// Recognized variables:
    /// - `STEMLIFE_HOST`
    /// - `STEMLIFE_PORT`
    /// - `STEMLIFE_CATALOG` -- path to a JSON event catalog
    /// - `STEMLIFE_MAX_AGING_STEPS`
    /// - `STEMLIFE_LOG_JSON` -- `true` or `false`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("STEMLIFE_HOST").unwrap_or(defaults.host);
        let port = match lookup("STEMLIFE_PORT") {
            Some(raw) => parse_var("STEMLIFE_PORT", &raw)?,
            None => defaults.port,
        };
        let catalog_path = lookup("STEMLIFE_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let max_aging_steps = match lookup("STEMLIFE_MAX_AGING_STEPS") {
            Some(raw) => parse_var("STEMLIFE_MAX_AGING_STEPS", &raw)?,
            None => defaults.max_aging_steps,
        };

        let json_logs = match lookup("STEMLIFE_LOG_JSON") {
            Some(raw) => parse_var("STEMLIFE_LOG_JSON", &raw)?,
            None => defaults.json_logs,
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            max_aging_steps,
            json_logs,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| StemLifeError::MalformedInput(format!("{} has invalid value {:?}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let settings = ServerSettings::from_lookup(lookup_from(&[
            ("STEMLIFE_HOST", "127.0.0.1"),
            ("STEMLIFE_PORT", "9000"),
            ("STEMLIFE_CATALOG", "/tmp/events.json"),
            ("STEMLIFE_MAX_AGING_STEPS", "20"),
            ("STEMLIFE_LOG_JSON", "true"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_address(), "127.0.0.1:9000");
        assert_eq!(settings.catalog_path, Some(PathBuf::from("/tmp/events.json")));
        assert_eq!(settings.max_aging_steps, 20);
        assert!(settings.json_logs);
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerSettings::from_lookup(lookup_from(&[("STEMLIFE_PORT", "eighty")]));
        assert!(matches!(result, Err(StemLifeError::MalformedInput(_))));
    }
}
