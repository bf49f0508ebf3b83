//! Theme command handlers.

use std::str::FromStr;

use tabled::Tabled;

use catalogo_core::{ColorScheme, ScreenMetrics, ThemeState, ThemeStore};

use crate::cli::{GlobalOpts, OutputFormat, SchemeArg, ThemeArgs, ThemeCommand};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn entries(theme: &ThemeState) -> Vec<EntryRow> {
    let mut rows = vec![
        EntryRow {
            key: "name".into(),
            value: theme.name.to_string(),
        },
        EntryRow {
            key: "dark".into(),
            value: theme.dark.to_string(),
        },
    ];
    for (section, value) in [
        ("colors", serde_json::to_value(&theme.colors)),
        ("palette", serde_json::to_value(&theme.palette)),
        ("fonts", serde_json::to_value(theme.fonts)),
    ] {
        let Ok(serde_json::Value::Object(map)) = value else {
            continue;
        };
        rows.extend(map.into_iter().map(|(k, v)| EntryRow {
            key: format!("{section}.{k}"),
            value: v.as_str().map_or_else(|| v.to_string(), str::to_owned),
        }));
    }
    rows
}

/// Resolve the device scheme: `--scheme`, then the configured theme.
fn device_scheme(flag: Option<SchemeArg>, cfg: &Config) -> Result<Option<ColorScheme>, CliError> {
    if let Some(flag) = flag {
        return Ok(Some(match flag {
            SchemeArg::Light => ColorScheme::Light,
            SchemeArg::Dark => ColorScheme::Dark,
        }));
    }
    match cfg.defaults.theme.as_str() {
        "auto" | "" => Ok(None),
        other => ColorScheme::from_str(other)
            .map(Some)
            .map_err(|_| CliError::Validation {
                field: "defaults.theme".into(),
                reason: format!("expected 'auto', 'light' or 'dark', got '{other}'"),
            }),
    }
}

pub fn handle(args: ThemeArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ThemeCommand::Show {
            scheme,
            width,
            scale,
        } => {
            if width <= 0.0 || scale <= 0.0 {
                return Err(CliError::Validation {
                    field: "width/scale".into(),
                    reason: "must be positive".into(),
                });
            }

            let store = ThemeStore::new(ScreenMetrics::new(width, scale), device_scheme(scheme, cfg)?);
            let theme = store.current();

            let out = match global.output_format() {
                OutputFormat::Table => output::render_table(&entries(&theme)),
                _ => output::render_single(global.output_format(), &*theme, |_| String::new(), |t| {
                    t.name.to_string()
                }),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
