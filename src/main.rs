use anyhow::Result;
use clap::Parser;
use formshift::cli::{Cli, Commands, DiscoveryArgs};
use formshift::commands::{analyze, convert};
use formshift::config::{load_config, DiscoveryConfig};
use formshift::progress::ProgressConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    configure_output(cli.plain);
    let progress = ProgressConfig::from_env(cli.plain);

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            discovery,
        } => {
            analyze::handle_analyze(analyze::AnalyzeConfig {
                path,
                format,
                output,
                discovery: resolve_discovery(discovery)?,
                progress,
            })?;
        }
        Commands::Convert {
            path,
            dry_run,
            no_backup,
            discovery,
        } => {
            convert::handle_convert(convert::ConvertConfig {
                path,
                dry_run,
                backup: !no_backup,
                discovery: resolve_discovery(discovery)?,
                progress,
            })?;
        }
    }

    Ok(())
}

// RUST_LOG wins over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn configure_output(plain: bool) {
    if plain {
        colored::control::set_override(false);
    }
}

fn resolve_discovery(args: DiscoveryArgs) -> Result<DiscoveryConfig> {
    Ok(load_config().with_overrides(args.extensions, args.ignore_dirs)?)
}
