//! Find command: one-shot item lookup

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::session::NO_PATH;
use crate::{AppContext, Cli};
use aislemap_core::ItemLookup;

#[derive(Args)]
pub struct FindArgs {
    /// Item to look for (exact, case-sensitive)
    pub item: String,

    /// Current location
    #[arg(long)]
    pub from: String,
}

pub fn run(args: &FindArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let lookup = ctx.store.find_item(&args.from, &args.item);

    let found = matches!(lookup, ItemLookup::Found { .. });

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&lookup)?),
        OutputFormat::Table => match &lookup {
            ItemLookup::NotFound { .. } => println!("Item not found in the store."),
            ItemLookup::Found { item, result, .. } => match &result.path {
                Some(path) => println!("Path to {}: {}", item, path),
                None => println!("{}", NO_PATH),
            },
        },
    }

    if !found {
        std::process::exit(1);
    }
    Ok(())
}
