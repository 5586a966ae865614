//! Transfer economics for a list of planned swaps.

use serde::Serialize;

use crate::fpl::PlayerPool;
use crate::planner::Change;

/// Free transfers per planning session and the cost of each extra one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRules {
    pub free_transfers: u32,
    /// Points per transfer beyond the free allowance (negative).
    pub hit_cost: i32,
}

impl Default for TransferRules {
    fn default() -> Self {
        Self {
            free_transfers: 1,
            hit_cost: -4,
        }
    }
}

/// Prices and bank are in tenths of a million.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostSummary {
    pub transfer_count: u32,
    pub free_transfers_used: u32,
    pub free_transfers_remaining: u32,
    pub points_hit: i32,
    /// Sum of `price_in - price_out` over resolvable changes.
    pub total_cost: i32,
    pub budget_impact: i32,
    pub new_bank: i32,
}

impl CostSummary {
    fn empty(rules: &TransferRules, initial_bank: i32) -> Self {
        Self {
            transfer_count: 0,
            free_transfers_used: 0,
            free_transfers_remaining: rules.free_transfers,
            points_hit: 0,
            total_cost: 0,
            budget_impact: 0,
            new_bank: initial_bank,
        }
    }
}

/// Cost summary under the default single-free-transfer rules.
pub fn calculate_transfer_costs<P>(changes: &[Change], initial_bank: i32, pool: &P) -> CostSummary
where
    P: PlayerPool + ?Sized,
{
    calculate_transfer_costs_with_rules(changes, initial_bank, pool, &TransferRules::default())
}

/// A change whose players are not both in `pool` adds nothing to the cost.
pub fn calculate_transfer_costs_with_rules<P>(
    changes: &[Change],
    initial_bank: i32,
    pool: &P,
    rules: &TransferRules,
) -> CostSummary
where
    P: PlayerPool + ?Sized,
{
    if changes.is_empty() {
        return CostSummary::empty(rules, initial_bank);
    }

    let transfer_count = changes.len() as u32;
    let free_transfers_used = transfer_count.min(rules.free_transfers);
    let extra = transfer_count - free_transfers_used;

    let total_cost: i32 = changes
        .iter()
        .filter_map(|c| {
            let price_in = pool.player(c.player_in)?.now_cost;
            let price_out = pool.player(c.out)?.now_cost;
            Some(price_in - price_out)
        })
        .sum();

    CostSummary {
        transfer_count,
        free_transfers_used,
        free_transfers_remaining: rules.free_transfers - free_transfers_used,
        points_hit: extra as i32 * rules.hit_cost,
        total_cost,
        budget_impact: -total_cost,
        new_bank: initial_bank - total_cost,
    }
}
