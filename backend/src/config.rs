//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable           | Default     |
//! |--------------------|-------------|
//! | `BLOG_HOST`        | `127.0.0.1` |
//! | `BLOG_PORT`        | `8080`      |
//! | `BLOG_CONTENT_DIR` | `content`   |
//! | `BLOG_SITE_DIR`    | `dist`      |
//! | `BLOG_ENV`         | production  |

use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_SITE_DIR: &str = "dist";

/// Development shows draft content; production hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentMode {
    Development,
    Production,
}

impl EnvironmentMode {
    /// `development` or `dev` (any case) selects development; anything else is
    /// production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => EnvironmentMode::Development,
            _ => EnvironmentMode::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Root holding one directory per content collection.
    pub content_dir: PathBuf,
    /// The built static site served for every non-API path.
    pub site_dir: PathBuf,
    pub mode: EnvironmentMode,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("BLOG_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid BLOG_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Config {
            host: lookup("BLOG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            content_dir: lookup("BLOG_CONTENT_DIR")
                .unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string())
                .into(),
            site_dir: lookup("BLOG_SITE_DIR")
                .unwrap_or_else(|| DEFAULT_SITE_DIR.to_string())
                .into(),
            mode: lookup("BLOG_ENV")
                .map(|value| EnvironmentMode::parse(&value))
                .unwrap_or(EnvironmentMode::Production),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.site_dir, PathBuf::from("dist"));
        assert_eq!(config.mode, EnvironmentMode::Production);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config(&[
            ("BLOG_HOST", "0.0.0.0"),
            ("BLOG_PORT", "3000"),
            ("BLOG_CONTENT_DIR", "/srv/blog/content"),
            ("BLOG_SITE_DIR", "/srv/blog/dist"),
            ("BLOG_ENV", "Development"),
        ]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.content_dir, PathBuf::from("/srv/blog/content"));
        assert_eq!(config.site_dir, PathBuf::from("/srv/blog/dist"));
        assert_eq!(config.mode, EnvironmentMode::Development);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        assert_eq!(config(&[("BLOG_PORT", "eighty")]).port, 8080);
    }

    #[test]
    fn only_development_names_select_development() {
        assert_eq!(EnvironmentMode::parse("dev"), EnvironmentMode::Development);
        assert_eq!(EnvironmentMode::parse(" DEVELOPMENT "), EnvironmentMode::Development);
        assert_eq!(EnvironmentMode::parse("production"), EnvironmentMode::Production);
        assert_eq!(EnvironmentMode::parse("staging"), EnvironmentMode::Production);
    }
}
