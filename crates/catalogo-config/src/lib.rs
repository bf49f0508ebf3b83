//! Shared configuration for catalogo.
//!
//! TOML profiles layered with environment overrides, and translation to
//! `catalogo_core::CatalogConfig`. The CLI adds flag-aware wrappers on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalogo_core::{CatalogConfig, DEFAULT_ITEMS_PER_PAGE};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CATALOGO_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named API profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use when none is given explicitly.
    pub fn active_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    /// Output format used when `--output` is not given.
    #[serde(default = "default_output")]
    pub output: String,

    /// Color mode used when `--color` is not given.
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,

    /// `auto`, `light` or `dark`.
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            items_per_page: default_items_per_page(),
            theme: default_theme(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_items_per_page() -> u32 {
    DEFAULT_ITEMS_PER_PAGE
}
fn default_theme() -> String {
    "auto".into()
}

/// A named API profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Product collection endpoint (e.g. "https://example.com/api/products").
    pub base_url: String,

    /// Override the default page size.
    pub items_per_page: Option<u32>,

    /// Start with the active-only filter on.
    pub active_only: Option<bool>,

    /// Request timeout in seconds. Absent means no timeout.
    pub timeout: Option<u64>,
}

impl Profile {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            items_per_page: None,
            active_only: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$CATALOGO_CONFIG`, then platform conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    ProjectDirs::from("com", "catalogo", "catalogo").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("catalogo");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// A missing file yields the defaults. Environment variables use the
/// `CATALOGO_` prefix with `__` between levels, e.g.
/// `CATALOGO_DEFAULTS__ITEMS_PER_PAGE=10`. Variables the CLI reads as
/// flags are not part of the file layout and are skipped.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::prefixed("CATALOGO_")
                .ignore(&["config", "profile", "base_url", "output", "timeout"])
                .split("__"),
        );

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Build a `CatalogConfig` from a profile and the global defaults.
pub fn profile_to_catalog_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<CatalogConfig, ConfigError> {
    let base_url = parse_base_url(&profile.base_url)?;

    let items_per_page = profile.items_per_page.unwrap_or(defaults.items_per_page);
    if items_per_page == 0 {
        return Err(ConfigError::Validation {
            field: "items_per_page".into(),
            reason: "must be greater than zero".into(),
        });
    }

    Ok(CatalogConfig {
        base_url,
        items_per_page,
        active_only: profile.active_only.unwrap_or(false),
        timeout: profile.timeout.map(Duration::from_secs),
    })
}

/// Parse and check an API base URL.
pub fn parse_base_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("expected http or https, got '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.active_profile_name(), "default");
        assert_eq!(cfg.defaults.items_per_page, 5);
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        let mut profile = Profile::new("https://example.com/api/products");
        profile.active_only = Some(true);
        profile.timeout = Some(10);
        cfg.profiles.insert("default".into(), profile.clone());

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.profile("default").unwrap(), &profile);
    }

    #[test]
    fn toml_profile_overrides_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "shop"

[defaults]
items_per_page = 8

[profiles.shop]
base_url = "http://localhost:3000/api/products"
items_per_page = 20
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        let profile = cfg.profile(cfg.active_profile_name()).unwrap();
        let catalog = profile_to_catalog_config(profile, &cfg.defaults).unwrap();

        assert_eq!(catalog.items_per_page, 20);
        assert!(!catalog.active_only);
        assert_eq!(catalog.timeout, None);
        assert_eq!(catalog.base_url.path(), "/api/products");
    }

    #[test]
    fn defaults_fill_missing_profile_fields() {
        let mut profile = Profile::new("https://example.com/api/products");
        profile.timeout = Some(3);
        let defaults = Defaults {
            items_per_page: 12,
            ..Defaults::default()
        };

        let catalog = profile_to_catalog_config(&profile, &defaults).unwrap();
        assert_eq!(catalog.items_per_page, 12);
        assert_eq!(catalog.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn rejects_bad_urls_and_zero_page_size() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ConfigError::Validation { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(ConfigError::Validation { .. })
        ));

        let mut profile = Profile::new("https://example.com");
        profile.items_per_page = Some(0);
        assert!(profile_to_catalog_config(&profile, &Defaults::default()).is_err());
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = Config::default().profile("missing").unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound { .. }));
    }
}
