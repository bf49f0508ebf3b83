//! CLI-aware config resolution.
//!
//! Thin wrapper over `catalogo-config` that layers `GlobalOpts` flag
//! overrides on top of the selected profile.

use std::time::Duration;

use clap::ValueEnum;

pub use catalogo_config::{Config, Profile, config_path, load_config, save_config};

use catalogo_config::{parse_base_url, profile_to_catalog_config};
use catalogo_core::CatalogConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name: `--profile`, then `default_profile`.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| cfg.active_profile_name().to_owned())
}

/// Build a `CatalogConfig` from the config file, profile, and CLI overrides.
pub fn resolve_catalog_config(global: &GlobalOpts, cfg: &Config) -> Result<CatalogConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut catalog = if let Some(profile) = cfg.profiles.get(&profile_name) {
        profile_to_catalog_config(profile, &cfg.defaults)?
    } else if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(cfg),
        });
    } else {
        // No profile: the base URL must come from flags / env alone.
        let url_str = global.base_url.as_deref().ok_or_else(|| CliError::NoConfig {
            path: config_path().display().to_string(),
        })?;
        let mut catalog = CatalogConfig::new(parse_base_url(url_str)?);
        catalog.items_per_page = cfg.defaults.items_per_page;
        catalog
    };

    if let Some(ref url) = global.base_url {
        catalog.base_url = parse_base_url(url)?;
    }
    if let Some(secs) = global.timeout {
        catalog.timeout = Some(Duration::from_secs(secs));
    }

    Ok(catalog)
}

/// Fill `--output` / `--color` from `[defaults]` when not given on the
/// command line or through the environment.
pub fn apply_output_defaults(global: &mut GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    if global.output.is_none() {
        global.output = Some(parse_default("defaults.output", &cfg.defaults.output)?);
    }
    if global.color.is_none() {
        global.color = Some(parse_default("defaults.color", &cfg.defaults.color)?);
    }
    Ok(())
}

fn parse_default<V: ValueEnum>(field: &str, raw: &str) -> Result<V, CliError> {
    V::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}
