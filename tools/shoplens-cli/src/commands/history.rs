//! Search history commands.

use anyhow::{bail, Context as _, Result};
use chrono::{Duration, Local, Utc};
use dialoguer::Confirm;
use shoplens_commerce::history::{SearchHistory, SearchRecord};
use shoplens_commerce::SearchRecordId;

use super::{HistoryArgs, HistoryCommand};
use crate::context::Context;

/// Run the history command.
pub async fn run(args: HistoryArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(HistoryCommand::List { limit }) => list_history(limit, ctx).await,
        None => list_history(20, ctx).await,
        Some(HistoryCommand::Delete { id }) => delete_record(&id, ctx).await,
        Some(HistoryCommand::Clear { yes }) => clear_history(yes, ctx).await,
    }
}

async fn list_history(limit: usize, ctx: &Context) -> Result<()> {
    let history = ctx.history();
    let user = ctx.user_id();
    let records = history
        .list(&user, limit)
        .await
        .with_context(|| format!("Failed to read history from {}", history.path().display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&records);
        return Ok(());
    }

    ctx.output.header(&format!("Recent searches for {}", user));

    if records.is_empty() {
        ctx.output.info("No searches recorded yet.");
        return Ok(());
    }

    let widths = [28, 18, 8, 8, 30];
    ctx.output.table_row(&["ID", "WHEN", "COUNTRY", "RESULTS", "QUERY"], &widths);
    for record in &records {
        let when = format_timestamp(record);
        let count = record.results_count.to_string();
        ctx.output.table_row(
            &[record.id.as_str(), &when, &record.country, &count, &record.query],
            &widths,
        );
    }

    let today = history
        .count_since(&user, Utc::now() - Duration::hours(24))
        .await
        .unwrap_or(0);
    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {} search(es), {} in the last 24 hours",
        records.len(),
        today
    ));

    Ok(())
}

async fn delete_record(id: &str, ctx: &Context) -> Result<()> {
    let history = ctx.history();
    let removed = history
        .delete(&SearchRecordId::new(id))
        .await
        .context("Failed to delete search")?;

    if !removed {
        bail!("Search '{}' not found", id);
    }

    ctx.output.success(&format!("Deleted search {}", id));
    Ok(())
}

async fn clear_history(yes: bool, ctx: &Context) -> Result<()> {
    let history = ctx.history();
    let user = ctx.user_id();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all searches for {}?", user))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    let removed = history.clear(&user).await.context("Failed to clear history")?;
    ctx.output.success(&format!("Removed {} search(es)", removed));
    Ok(())
}

fn format_timestamp(record: &SearchRecord) -> String {
    record
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
