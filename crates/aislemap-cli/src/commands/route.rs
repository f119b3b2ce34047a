//! Route command: walk through a whole shopping list

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct RouteArgs {
    /// Items on the shopping list
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Starting location
    #[arg(long)]
    pub from: String,

    /// Location to finish at (e.g. a checkout)
    #[arg(long)]
    pub to: Option<String>,
}

pub fn run(args: &RouteArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let route = ctx
        .store
        .plan_route(&args.from, args.items.as_slice(), args.to.as_deref());

    if OutputFormat::from(cli.format.as_str()) == OutputFormat::Json {
        println!("{}", to_json(&route)?);
        return Ok(());
    }

    if route.locations.is_empty() {
        println!("No route found from {}.", args.from);
    } else {
        println!("Route from {} ({} hops):", route.start, route.hops);
        println!("  {}", route.locations.join(" -> "));
    }

    if !route.stops.is_empty() {
        println!("Stops:");
        for stop in &route.stops {
            println!("  {}: {}", stop.location, stop.items.join(", "));
        }
    }

    if !route.missing.is_empty() {
        println!("Not in store: {}", route.missing.join(", "));
    }
    if !route.unreachable.is_empty() {
        println!("Unreachable: {}", route.unreachable.join(", "));
    }
    if let Some(ref finish) = route.finish {
        if !route.finish_reached {
            println!("Could not reach {}.", finish);
        }
    }

    Ok(())
}
