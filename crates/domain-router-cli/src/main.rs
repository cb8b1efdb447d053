mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use domain_router::config::DEFAULT_CONFIG_FILE;
use tracing::Level;

#[derive(Parser)]
#[command(name = "domain-router")]
#[command(version, about = "Domain Router CLI - compile page files into route tables", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the page route tree of a domain and print it as JSON
    Pages {
        /// Domain name (folder under the configured directory)
        domain: String,

        /// Page paths relative to the pages directory; read from stdin when omitted
        files: Vec<String>,

        /// Pages directory used to build absolute file paths
        #[arg(short, long)]
        root: Option<String>,

        /// Exit with an error when two routes share a name
        #[arg(long)]
        deny_duplicates: bool,
    },

    /// Print the mount route of each server handler file
    Handlers {
        /// Domain name (folder under the configured directory)
        domain: String,

        /// Handler paths relative to the api/routes directory; read from stdin when omitted
        files: Vec<String>,

        /// Which server folder the files come from
        #[arg(short, long, default_value = "api")]
        kind: HandlerKindArg,

        /// Handler directory used to build absolute file paths
        #[arg(short, long)]
        root: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum HandlerKindArg {
    /// server/api → /api/<domain>/...
    Api,
    /// server/routes → /<domain>/...
    Route,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Pages {
            domain,
            files,
            root,
            deny_duplicates,
        } => {
            commands::pages::execute(&cli.config, &domain, files, root, deny_duplicates)?;
        }
        Commands::Handlers {
            domain,
            files,
            kind,
            root,
        } => {
            commands::handlers::execute(&cli.config, &domain, files, kind.into(), root)?;
        }
    }

    Ok(())
}

impl From<HandlerKindArg> for domain_router::HandlerKind {
    fn from(kind: HandlerKindArg) -> Self {
        match kind {
            HandlerKindArg::Api => domain_router::HandlerKind::Api,
            HandlerKindArg::Route => domain_router::HandlerKind::Route,
        }
    }
}
