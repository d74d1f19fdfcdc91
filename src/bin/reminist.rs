mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{cmd_check, cmd_lookup, cmd_routes};

#[derive(Parser)]
#[command(name = "reminist")]
#[command(
    about = "Segment trie router for dynamic, catch-all and wildcard route patterns",
    long_about = "reminist - Segment trie router for dynamic, catch-all and wildcard route patterns\n\n\
    Loads a JSON route manifest and resolves paths against it, reporting the\n\
    matched pattern, its payload and the extracted parameters.\n\n\
    Pattern syntax:\n\
      • :name or [name]   one segment\n\
      • [...name]         all remaining segments\n\
      • [[...name]]       all remaining segments, or none\n\
      • *                 all remaining segments, bound to '*'\n\n\
    Examples:\n\
      reminist check routes.json\n\
      reminist lookup routes.json GET /users/42\n\
      reminist routes routes.json --key GET"
)]
#[command(version)]
struct Cli {
    /// Log registration and lookup details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path against a route manifest
    Lookup {
        /// Path to the JSON route manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Dispatch key, e.g. GET
        #[arg(value_name = "KEY")]
        key: String,

        /// Concrete path to resolve
        #[arg(value_name = "PATH")]
        path: String,

        /// Quiet mode - no output, exit code only (0 = match, 1 = no match)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a route manifest by registering every route
    Check {
        /// Path to the JSON route manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
    },

    /// List the patterns registered by a route manifest
    Routes {
        /// Path to the JSON route manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Only list routes under this key
        #[arg(short, long)]
        key: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "reminist=debug" } else { "reminist=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lookup {
            manifest,
            key,
            path,
            quiet,
        } => cmd_lookup(manifest, key, path, quiet),
        Commands::Check { manifest } => cmd_check(manifest),
        Commands::Routes { manifest, key } => cmd_routes(manifest, key),
    }
}
