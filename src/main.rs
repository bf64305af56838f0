//! CLI entry point for skiptree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use skiptree::{ColorOutput, Config, TreeWalker, WalkerConfig, write_structure};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "skiptree")]
#[command(about = "Write a directory tree to a text file, skipping folders like .git and node_modules")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the tree to [default: structure.txt, or `output` from the config file]
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the tree to standard output instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Skip entries with this exact name (can be used multiple times)
    #[arg(short, long = "skip", value_name = "NAME")]
    skip: Vec<String>,

    /// Skip entries whose name matches a glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Don't skip the configured names (node_modules, .git, __pycache__ by default)
    #[arg(long = "no-default-skips")]
    no_default_skips: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Control color output with --stdout: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Path to the config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Don't print the completion message
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Merge command-line options over the loaded configuration.
    fn walker_config(&self, config: &Config) -> WalkerConfig {
        let mut walker_config = config.walker_config();
        if self.no_default_skips {
            walker_config.skip_names.clear();
        }
        walker_config.skip_names.extend(self.skip.iter().cloned());
        walker_config.skip_patterns.extend(self.ignore.iter().cloned());
        if self.level.is_some() {
            walker_config.max_depth = self.level;
        }
        walker_config.dirs_only = self.dirs_only;
        walker_config
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("skiptree: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    let walker_config = args.walker_config(&config);
    tracing::debug!(
        skip = ?walker_config.skip_names,
        patterns = ?walker_config.skip_patterns,
        max_depth = ?walker_config.max_depth,
        "Effective walk settings"
    );
    let walker = TreeWalker::new(walker_config)?;

    if args.stdout {
        let mut output = ColorOutput::stdout(should_use_color(args.color));
        walker.render(&args.path, &mut output)?;
        return Ok(());
    }

    let output = args.output.clone().unwrap_or_else(|| config.output.clone());
    tracing::info!(root = %args.path.display(), output = %output.display(), "Writing tree");
    write_structure(&walker, &args.path, &output)
        .with_context(|| format!("failed to write tree of '{}'", args.path.display()))?;

    if !args.quiet {
        println!("Done! See {}", output.display());
    }
    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("skiptree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
