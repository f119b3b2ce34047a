//! Layout command: print the active store layout

use crate::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    println!("# Source: {}", ctx.source);
    print!("{}", ctx.layout.to_toml_string()?);
    Ok(())
}
