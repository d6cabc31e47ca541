use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "formshift")]
#[command(about = "Find formik usages and migrate the safe ones to react-hook-form", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colors and progress bars
    #[arg(long = "plain", global = true)]
    pub plain: bool,
}

/// File discovery flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DiscoveryArgs {
    /// File extensions to include (comma-separated, overrides .formshift.toml)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Directory names to skip (comma-separated, overrides .formshift.toml)
    #[arg(long = "ignore-dirs", value_delimiter = ',')]
    pub ignore_dirs: Option<Vec<String>>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report formik usages, their complexity and the estimated effort
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        discovery: DiscoveryArgs,
    },

    /// Rewrite convertible files to react-hook-form
    Convert {
        /// File or directory to convert
        path: PathBuf,

        /// Print planned changes without touching any file
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Do not keep a `<file>.formik.bak` copy of rewritten files
        #[arg(long = "no-backup")]
        no_backup: bool,

        #[command(flatten)]
        discovery: DiscoveryArgs,
    },
}
