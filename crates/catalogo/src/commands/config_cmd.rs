//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input};

use catalogo_config::parse_base_url;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, mut cfg: Config, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            let interactive = std::io::stdin().is_terminal();

            // Non-interactive init needs the URL up front.
            if !interactive && global.base_url.is_none() {
                return Err(CliError::Validation {
                    field: "base_url".into(),
                    reason: "pass --base-url when not running in a terminal".into(),
                });
            }

            if interactive {
                eprintln!("catalogo configuration wizard");
                eprintln!("   Config path: {}\n", config_path.display());
            }

            let profile_name = match global.profile.clone() {
                Some(name) => name,
                None if interactive => Input::new()
                    .with_prompt("Profile name")
                    .default("default".into())
                    .interact_text()
                    .map_err(prompt_err)?,
                None => "default".into(),
            };

            let base_url = match global.base_url.clone() {
                Some(url) => url,
                None => Input::new()
                    .with_prompt("Product API URL")
                    .default("http://localhost:3000/api/products".into())
                    .interact_text()
                    .map_err(prompt_err)?,
            };
            parse_base_url(&base_url)?;

            let active_only = interactive
                && Confirm::new()
                    .with_prompt("Show only active products by default?")
                    .default(false)
                    .interact()
                    .map_err(prompt_err)?;

            let mut profile = Profile::new(base_url);
            profile.active_only = active_only.then_some(true);
            profile.timeout = global.timeout;

            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());

            let path = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Configuration written to {}", path.display());
                eprintln!("  Active profile: {profile_name}");
                eprintln!("\n  Try it: catalogo products list");
            }
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let out = output::render_single(
                global.output_format(),
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{c:#?}\n({e})")),
                |c| c.active_profile_name().to_owned(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        // ── SetDefault ──────────────────────────────────────────────
        ConfigCommand::SetDefault { name } => {
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}
