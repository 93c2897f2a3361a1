//! Tree Warden CLI - Command-line interface for the source-tree quality gate
//!
//! Architecture: Application Layer - the CLI coordinates user interactions with
//! the library. It translates commands to library operations, handles terminal
//! output and maps gate status to process exit codes.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use tree_warden::{OutputFormat, ReportFormatter, ReportOptions, Warden, WardenResult};

/// Tree Warden - source-tree quality gate
#[derive(Parser)]
#[command(name = "tree-warden")]
#[command(version = "0.1.0")]
#[command(about = "Scans source trees for banned code patterns and naming violations")]
#[command(
    long_about = "Tree Warden enforces two quality gates over a repository: a banned-pattern scan over workspace sources (unwrap, panic, todo and friends, with path-scoped exemptions) and a naming-convention scan over the DSL tree. Designed for CI integration: a failing gate exits with code 1."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan workspace sources for banned code patterns
    Check {
        /// Repository root (defaults to current directory)
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Check naming conventions in the DSL tree
    Naming {
        /// Repository root (defaults to current directory)
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> WardenResult<i32> {
    let use_colors = !cli.no_color;

    match cli.command {
        Commands::Check { root, format } => run_check(root, format, use_colors),
        Commands::Naming { root, format } => run_naming(root, format, use_colors),
    }
}

fn run_check(
    root: Option<PathBuf>,
    format: OutputFormatArg,
    use_colors: bool,
) -> WardenResult<i32> {
    let root = root.unwrap_or_else(|| PathBuf::from("."));

    let warden = Warden::new()?;
    let report = warden.check_patterns(&root)?;

    let formatter = ReportFormatter::new(ReportOptions { use_colors });
    let formatted = formatter.format_scan_report(&report, format.into())?;
    print!("{}", formatted);

    Ok(report.exit_code())
}

fn run_naming(
    root: Option<PathBuf>,
    format: OutputFormatArg,
    use_colors: bool,
) -> WardenResult<i32> {
    let root = root.unwrap_or_else(|| PathBuf::from("."));

    let warden = Warden::new()?;
    let report = warden.check_naming(&root)?;

    let formatter = ReportFormatter::new(ReportOptions { use_colors });
    let formatted = formatter.format_naming_report(&report, format.into())?;
    print!("{}", formatted);

    Ok(report.exit_code())
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}
