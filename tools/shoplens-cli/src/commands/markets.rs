//! Market listing command.

use anyhow::Result;
use shoplens_commerce::market::MarketConfig;

use crate::context::Context;

/// Run the markets command.
pub async fn run(ctx: &Context) -> Result<()> {
    let markets: Vec<&MarketConfig> = ctx.markets().iter().collect();

    if ctx.output.is_json() {
        ctx.output.json(&markets);
        return Ok(());
    }

    ctx.output.header("Markets");
    let widths = [6, 10, 10, 60];
    ctx.output.table_row(&["CODE", "CURRENCY", "VS USD", "PLATFORMS"], &widths);
    for market in &markets {
        let currency = format!("{} {}", market.currency.code(), market.symbol());
        let multiplier = format!("x{}", market.price_multiplier);
        ctx.output.table_row(
            &[&market.code, &currency, &multiplier, &market.platforms.join(", ")],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Unknown country codes use {}.",
        ctx.markets().default_market().code
    ));

    Ok(())
}
