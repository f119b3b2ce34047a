//! Aislemap CLI - find your way to any item in the store

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod session;

use aislemap_core::{Store, StoreLayout};
use commands::{completions, find, layout, list, path, route};
use config::{LayoutSource, LAYOUT_ENV};

#[derive(Parser)]
#[command(name = "aislemap")]
#[command(author, version, about = "Find the shortest way to any item in the store")]
pub struct Cli {
    /// Store layout file (TOML)
    #[arg(short, long, env = LAYOUT_ENV, global = true)]
    pub layout: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: enter your location, then an item
    Navigate,
    /// Shortest path between two locations
    Path(path::PathArgs),
    /// Find the way to a single item
    Find(find::FindArgs),
    /// Plan a route through a shopping list
    Route(route::RouteArgs),
    /// List store locations and their neighbours
    Locations,
    /// List items and where they are stocked
    Items,
    /// Print the active store layout as TOML
    Layout,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded store
pub struct AppContext {
    pub source: LayoutSource,
    pub layout: StoreLayout,
    pub store: Store,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let source = LayoutSource::resolve(cli.layout.as_deref());
        tracing::debug!("Using store layout from: {}", source);

        let layout = source.load()?;
        let store = layout
            .build()
            .with_context(|| format!("Invalid store layout ({})", source))?;

        Ok(Self {
            source,
            layout,
            store,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting aislemap CLI");

    if let Some(Commands::Completions(args)) = &cli.command {
        return completions::run(args);
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        None | Some(Commands::Navigate) => {
            let outcome = session::run(&ctx.store, io::stdin().lock(), io::stdout().lock())?;
            tracing::debug!("Session ended: {:?}", outcome);
        }
        Some(Commands::Path(args)) => path::run(args, &cli, &ctx)?,
        Some(Commands::Find(args)) => find::run(args, &cli, &ctx)?,
        Some(Commands::Route(args)) => route::run(args, &cli, &ctx)?,
        Some(Commands::Locations) => list::run_locations(&cli, &ctx)?,
        Some(Commands::Items) => list::run_items(&cli, &ctx)?,
        Some(Commands::Layout) => layout::run(&ctx)?,
        Some(Commands::Completions(args)) => completions::run(args)?,
    }

    Ok(())
}
