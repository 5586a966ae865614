//! Replacements and browse command implementations

use super::{format_price, resolve_entry_id, CommandContext};
use crate::fpl::PlayerPool;
use crate::replacements::{
    browse_alternatives, find_replacements, BrowseOptions, Candidate, ReplacementOptions, SortKey,
};
use crate::{EntryId, PlayerId, Position, Result};

fn print_candidates(ctx: &CommandContext, candidates: &[Candidate<'_>]) {
    if candidates.is_empty() {
        println!("No candidates found");
        return;
    }
    println!(
        "{:<18} {:<4} {:>7} {:>5} {:>5} {:>6} {:<12} {:>6}",
        "Name", "Team", "Price", "Form", "Pts", "FDR", "Fixtures", "Score"
    );
    for c in candidates {
        let team = ctx
            .data
            .team(c.player.team)
            .map_or("?", |t| t.short_name.as_str());
        println!(
            "{:<18} {:<4} {:>7} {:>5.1} {:>5} {:>6.2} {:<12} {:>6.2}{}",
            c.player.web_name,
            team,
            format_price(c.player.now_cost),
            c.player.form,
            c.player.total_points,
            c.avg_difficulty,
            c.fdr_class.label(),
            c.score,
            if c.affordable { "" } else { "  (over budget)" }
        );
    }
}

/// Handle the replacements command
pub async fn handle_replacements(
    player_out: PlayerId,
    entry: Option<EntryId>,
    limit: usize,
    within_budget: bool,
) -> Result<()> {
    let entry = resolve_entry_id(entry)?;
    let ctx = CommandContext::new().await?;
    let outgoing = ctx.player(player_out)?;
    let squad = ctx.entry_picks(entry, None).await?;

    let options = ReplacementOptions {
        limit,
        budget: within_budget.then_some(squad.entry_history.bank),
        ..Default::default()
    };
    let candidates = find_replacements(
        player_out,
        &squad.picks,
        &ctx.data,
        &ctx.data,
        ctx.data.active_gameweek(),
        &options,
    );

    println!(
        "Replacements for {} ({}, {}):",
        outgoing.web_name,
        outgoing.position,
        format_price(outgoing.now_cost)
    );
    print_candidates(&ctx, &candidates);
    Ok(())
}

/// Handle the browse command
pub async fn handle_browse(
    position: Position,
    entry: Option<EntryId>,
    sort: SortKey,
    max_price: Option<i32>,
) -> Result<()> {
    let entry = resolve_entry_id(entry)?;
    let ctx = CommandContext::new().await?;
    let squad = ctx.entry_picks(entry, None).await?;

    let options = BrowseOptions {
        sort,
        max_price,
        budget: Some(squad.entry_history.bank),
        ..Default::default()
    };
    let candidates = browse_alternatives(
        position,
        &squad.picks,
        &ctx.data,
        &ctx.data,
        ctx.data.active_gameweek(),
        &options,
    );

    println!(
        "{} players outside your squad ({} in pool):",
        position,
        ctx.data.players().iter().filter(|p| p.position == position).count()
    );
    print_candidates(&ctx, &candidates);
    Ok(())
}
