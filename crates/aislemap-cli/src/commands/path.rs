//! Path command: shortest walk between two locations

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct PathArgs {
    /// Starting location
    pub from: String,

    /// Destination location
    pub to: String,
}

pub fn run(args: &PathArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let result = ctx.store.shortest_path(&args.from, &args.to);

    tracing::info!(
        "Path search visited {} locations, examined {} paths",
        result.stats.nodes_visited,
        result.stats.edges_traversed
    );

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&result)?),
        OutputFormat::Table => match &result.path {
            Some(path) => {
                println!("{}", path);
                tracing::info!("{} hops, distance {}", path.hops, path.distance);
            }
            None => println!("No path found."),
        },
    }

    if !result.is_found() {
        std::process::exit(1);
    }
    Ok(())
}
