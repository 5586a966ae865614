//! Plan command implementation

use log::warn;
use serde::Serialize;

use super::{format_price, resolve_entry_id, CommandContext};
use crate::cli::types::Swap;
use crate::fpl::types::Pick;
use crate::fpl::PlayerPool;
use crate::planner::{Change, CostSummary, PlannerSandbox};
use crate::{EntryId, FplError, Gameweek, Result};

#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub entry: EntryId,
    pub gameweek: Gameweek,
    pub changes: Vec<Change>,
    pub squad: Vec<Pick>,
    pub cost: CostSummary,
}

/// Apply `swaps` to a freshly initialized sandbox.
///
/// Every incoming player must exist in `pool`.
pub fn apply_swaps<P: PlayerPool + ?Sized>(
    sandbox: &mut PlannerSandbox,
    swaps: &[Swap],
    pool: &P,
) -> Result<()> {
    for swap in swaps {
        for id in [swap.out, swap.player_in] {
            if pool.player(id).is_none() {
                return Err(FplError::PlayerNotFound { id: id.as_u32() });
            }
        }
        if sandbox.squad_contains(swap.player_in) {
            warn!("{} is already in the squad", swap.player_in);
        }
        sandbox.add_change(swap.out, swap.player_in);
    }
    Ok(())
}

/// Handle the plan command
pub async fn handle_plan(
    entry: Option<EntryId>,
    gw: Option<Gameweek>,
    swaps: Vec<Swap>,
    as_json: bool,
) -> Result<()> {
    let entry = resolve_entry_id(entry)?;
    let ctx = CommandContext::new().await?;
    let gameweek = gw.unwrap_or_else(|| ctx.data.current_gameweek());
    let squad = ctx.entry_picks(entry, Some(gameweek)).await?;

    let mut sandbox = PlannerSandbox::new();
    sandbox.initialize(
        &squad,
        &squad.picks,
        squad.entry_history.bank,
        squad.entry_history.value,
    );
    apply_swaps(&mut sandbox, &swaps, &ctx.data)?;

    let report = PlanReport {
        entry,
        gameweek,
        changes: sandbox.changes().to_vec(),
        squad: sandbox.current_squad(),
        cost: sandbox.current_cost_summary(&ctx.data),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Entry {} GW{}", entry, gameweek);
    for pick in &report.squad {
        let marker = if report.changes.iter().any(|c| c.player_in == pick.element) {
            "*"
        } else {
            " "
        };
        let bench = if pick.position > 11 { " (bench)" } else { "" };
        println!(
            "{} {:>2}. {}{}",
            marker,
            pick.position,
            ctx.player_name(pick.element),
            bench
        );
    }

    if !report.changes.is_empty() {
        println!();
        for change in &report.changes {
            println!(
                "OUT {} -> IN {}",
                ctx.player_name(change.out),
                ctx.player_name(change.player_in)
            );
        }
    }

    let cost = &report.cost;
    println!();
    println!(
        "Transfers: {} ({} free, {} free left)",
        cost.transfer_count, cost.free_transfers_used, cost.free_transfers_remaining
    );
    println!("Points hit: {}", cost.points_hit);
    println!("Budget impact: {}", format_price(cost.budget_impact));
    println!("Bank after: {}", format_price(cost.new_bank));

    Ok(())
}
