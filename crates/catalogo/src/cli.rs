//! Clap derive structures for the `catalogo` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// catalogo -- manage a product catalog from the command line
#[derive(Debug, Parser)]
#[command(
    name = "catalogo",
    version,
    about = "Manage a product catalog from the command line",
    long_about = "Browse, search, create, update and delete products in a remote\n\
        product catalog API, and inspect the light/dark theme tables.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "CATALOGO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Product API base URL (overrides profile)
    #[arg(long, short = 'b', env = "CATALOGO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format [default: config `defaults.output`, else table]
    #[arg(long, short = 'o', env = "CATALOGO_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: config `defaults.color`, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (default: none)
    #[arg(long, env = "CATALOGO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn output_format(&self) -> &OutputFormat {
        self.output.as_ref().unwrap_or(&OutputFormat::Table)
    }

    pub fn color_mode(&self) -> &ColorMode {
        self.color.as_ref().unwrap_or(&ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and manage products
    #[command(alias = "p")]
    Products(ProductsArgs),

    /// Inspect the light/dark theme tables
    Theme(ThemeArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRODUCTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List one page of products
    #[command(alias = "ls")]
    List {
        /// Only active products; `--active false` lists all of them
        /// [default: the profile's active_only]
        #[arg(long, short = 'a', num_args = 0..=1, default_missing_value = "true")]
        active: Option<bool>,

        /// Page number, starting at 0
        #[arg(long, default_value = "0")]
        page: u32,

        /// Products per page (defaults to the profile's items_per_page)
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Show a product by id
    Get {
        /// Product id
        id: String,
    },

    /// Look up a product from a scanned barcode payload
    Scan {
        /// Decoded barcode contents
        code: String,
    },

    /// Create a product
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Price (accepts a decimal comma)
        #[arg(long)]
        price: String,

        /// Stock-keeping unit, immutable once created
        #[arg(long)]
        sku: String,

        /// Create the product as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a product (unspecified fields keep their current value)
    Update {
        /// Product id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  THEME
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the resolved theme for a device
    Show {
        /// Device color scheme (defaults to the configured theme)
        #[arg(long)]
        scheme: Option<SchemeArg>,

        /// Logical screen width
        #[arg(long, default_value = "360")]
        width: f64,

        /// Pixel density
        #[arg(long, default_value = "2")]
        scale: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Light,
    Dark,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the default profile
    SetDefault {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
