//! Configuration parsing – reads a KEY=VALUE file (`agriguard.conf`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::Catalog;

/// Environment variable overriding [`Config::default_path`].
pub const CONFIG_ENV: &str = "AGRIGUARD_CONFIG";

/// Web server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON catalog replacing the built-in records.
    pub catalog_path: Option<PathBuf>,
    /// Title shown in the browser tab and the navigation bar.
    pub site_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            site_title: "AgriGuard AI".into(),
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/agriguard/agriguard.conf"
    }

    /// Load the catalog this configuration points at, or the seed data.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Cannot load catalog: {}", path.display())),
            None => Ok(Catalog::seed()),
        }
    }
}

/// Resolve and load the configuration.
///
/// An explicit path (from [`CONFIG_ENV`]) must exist; a missing default file
/// falls back to [`Config::default`].
pub fn from_env() -> Result<Config> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load(Path::new(&path)),
        Err(_) => {
            let path = Path::new(Config::default_path());
            if path.exists() {
                load(path)
            } else {
                info!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
        }
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = parse(&text);
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse(text: &str) -> Config {
    let map = parse_conf(text);
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|s| !s.is_empty()) };
    let defaults = Config::default();

    Config {
        catalog_path: get("CATALOG_PATH").map(PathBuf::from),
        site_title: get("SITE_TITLE").unwrap_or(defaults.site_title),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
SITE_TITLE="Field Station"
CATALOG_PATH=/srv/agriguard/diseases.json
UNKNOWN=1
"#;
        let map = parse_conf(text);
        assert_eq!(map["SITE_TITLE"], "Field Station");
        assert_eq!(map["UNKNOWN"], "1");

        let config = parse(text);
        assert_eq!(config.site_title, "Field Station");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/agriguard/diseases.json"))
        );
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = parse("SITE_TITLE=\nCATALOG_PATH=\"\"\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_catalog_is_seed() {
        let catalog = Config::default().catalog().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_load_file_and_missing_catalog() {
        let dir = std::env::temp_dir().join("agriguard_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.conf");
        std::fs::write(&path, "CATALOG_PATH=/nonexistent/agriguard.json\n").unwrap();

        let config = load(&path).unwrap();
        let err = config.catalog().unwrap_err();
        assert!(format!("{err:#}").contains("Cannot load catalog"));
        assert!(load(&dir.join("missing.conf")).is_err());
    }
}
