//! Trending searches command.

use anyhow::Result;
use serde_json::json;
use shoplens_commerce::catalog::trending::{quick_searches, trending_searches};

use crate::context::Context;

/// Run the trending command.
pub async fn run(ctx: &Context) -> Result<()> {
    let trending = trending_searches();
    let quick = quick_searches();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "trending": trending, "quick": quick }));
        return Ok(());
    }

    ctx.output.header("Trending searches");
    let widths = [24, 26, 4];
    for item in trending {
        let popularity = format!("{}%", item.popularity);
        ctx.output.table_row(&[item.query, item.reason, &popularity], &widths);
    }

    ctx.output.header("Quick searches");
    for query in quick {
        ctx.output.list_item(query);
    }
    ctx.output.info("");
    ctx.output.info("Run `shoplens search <QUERY>` to search.");

    Ok(())
}
