mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalogo_core::Catalog;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    // Completions never read the config file.
    let cfg = if matches!(command, Command::Completions(_)) {
        config::Config::default()
    } else {
        config::load_config()?
    };
    config::apply_output_defaults(&mut global, &cfg)?;

    match command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "catalogo", &mut std::io::stdout());
            Ok(())
        }

        Command::Config(args) => commands::config_cmd::handle(args, cfg, &global),

        Command::Theme(args) => commands::theme::handle(args, &cfg, &global),

        Command::Products(args) => {
            let catalog_config = config::resolve_catalog_config(&global, &cfg)?;
            tracing::debug!(base_url = %catalog_config.base_url, "using product API");

            let catalog = Catalog::new(catalog_config)?;
            commands::products::handle(&catalog, args, &global).await
        }
    }
}
