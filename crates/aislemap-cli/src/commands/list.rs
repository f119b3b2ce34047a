//! Listing commands for locations and items

use serde::Serialize;

use crate::output::{render_table, to_json, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Serialize)]
struct LocationRow<'a> {
    name: &'a str,
    neighbors: Vec<NeighborRow<'a>>,
}

#[derive(Serialize)]
struct NeighborRow<'a> {
    name: &'a str,
    distance: u32,
}

#[derive(Serialize)]
struct ItemRow<'a> {
    name: &'a str,
    location: &'a str,
}

pub fn run_locations(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = &ctx.store.graph;
    let rows: Vec<LocationRow> = graph
        .locations()
        .map(|name| LocationRow {
            name,
            neighbors: graph
                .neighbors(name)
                .into_iter()
                .flatten()
                .map(|(neighbor, distance)| NeighborRow {
                    name: neighbor.as_str(),
                    distance: *distance,
                })
                .collect(),
        })
        .collect();

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&rows)?),
        OutputFormat::Table => {
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    let neighbors: Vec<String> = row
                        .neighbors
                        .iter()
                        .map(|n| format!("{} ({})", n.name, n.distance))
                        .collect();
                    vec![row.name.to_string(), neighbors.join(", ")]
                })
                .collect();
            println!("{}", render_table(&["LOCATION", "NEIGHBORS"], &table));
        }
    }
    Ok(())
}

pub fn run_items(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let rows: Vec<ItemRow> = ctx
        .store
        .items
        .iter()
        .map(|(name, location)| ItemRow { name, location })
        .collect();

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&rows)?),
        OutputFormat::Table => {
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|row| vec![row.name.to_string(), row.location.to_string()])
                .collect();
            println!("{}", render_table(&["ITEM", "LOCATION"], &table));
        }
    }
    Ok(())
}
