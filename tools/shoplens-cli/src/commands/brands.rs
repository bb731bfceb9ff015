//! Brand listing command.

use anyhow::Result;
use std::collections::BTreeSet;

use super::BrandsArgs;
use crate::context::Context;

/// Run the brands command.
pub async fn run(args: BrandsArgs, ctx: &Context) -> Result<()> {
    let brands: BTreeSet<String> = match args.country.as_deref() {
        Some(country) => {
            let market = ctx.markets().lookup(country);
            ctx.output.header(&format!("Brands popular in {}", market.code));
            ctx.catalog().brands_for(market, true)
        }
        None => {
            ctx.output.header("Brands");
            ctx.catalog().all_brands()
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&brands);
        return Ok(());
    }

    for brand in &brands {
        ctx.output.list_item(brand);
    }
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} brand(s)", brands.len()));

    Ok(())
}
