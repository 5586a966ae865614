//! Transfer planner sandbox.
//!
//! Holds a copy of the real squad taken when the planner is opened and a list
//! of hypothetical swaps on top of it. Nothing here is persisted or sent
//! upstream. Re-entering the planner with the same 15 players keeps the swaps;
//! a different squad (e.g. after a real transfer) discards them.

pub mod cost;

use log::debug;
use serde::Serialize;

use crate::core::clock::{Clock, SystemClock};
use crate::fpl::types::{EntryPicks, Pick};
use crate::fpl::PlayerPool;
use crate::PlayerId;

pub use cost::{
    calculate_transfer_costs, calculate_transfer_costs_with_rules, CostSummary, TransferRules,
};


/// One planned swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub out: PlayerId,
    #[serde(rename = "in")]
    pub player_in: PlayerId,
    /// Milliseconds since the unix epoch.
    pub timestamp: u64,
}

#[derive(Debug, Clone)]
struct Snapshot {
    squad: EntryPicks,
    picks: Vec<Pick>,
    bank: i32,
    value: i32,
}

/// Sorted player ids of `picks`, comma separated.
pub fn team_signature(picks: &[Pick]) -> String {
    let mut ids: Vec<u32> = picks.iter().map(|p| p.element.as_u32()).collect();
    ids.sort_unstable();
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Default)]
pub struct PlannerSandbox<C: Clock = SystemClock> {
    snapshot: Option<Snapshot>,
    signature: Option<String>,
    changes: Vec<Change>,
    clock: C,
}

impl PlannerSandbox<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> PlannerSandbox<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            snapshot: None,
            signature: None,
            changes: Vec::new(),
            clock,
        }
    }

    /// Take a snapshot of the squad unless it is the one already loaded.
    ///
    /// Returns `true` when the sandbox was (re)initialized and its changes
    /// discarded, `false` when the signature matched and nothing changed.
    pub fn initialize(
        &mut self,
        initial_squad: &EntryPicks,
        picks: &[Pick],
        bank: i32,
        value: i32,
    ) -> bool {
        let signature = team_signature(picks);
        if self.signature.as_deref() == Some(signature.as_str()) {
            debug!("Planner squad unchanged, keeping {} changes", self.changes.len());
            return false;
        }

        debug!("Planner initialized for squad [{}]", signature);
        self.snapshot = Some(Snapshot {
            squad: initial_squad.clone(),
            picks: picks.to_vec(),
            bank,
            value,
        });
        self.changes.clear();
        self.signature = Some(signature);
        true
    }

    /// Plan `out -> player_in`, replacing any earlier plan for `out`.
    ///
    /// A `player_in` already in the squad is accepted; see [`Self::squad_contains`].
    pub fn add_change(&mut self, out: PlayerId, player_in: PlayerId) {
        self.changes.retain(|c| c.out != out);
        self.changes.push(Change {
            out,
            player_in,
            timestamp: self.clock.now_millis(),
        });
    }

    pub fn remove_change(&mut self, out: PlayerId) {
        self.changes.retain(|c| c.out != out);
    }

    pub fn change_for(&self, out: PlayerId) -> Option<&Change> {
        self.changes.iter().find(|c| c.out == out)
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Snapshot picks with every planned swap applied, slots preserved.
    pub fn current_squad(&self) -> Vec<Pick> {
        let Some(snapshot) = &self.snapshot else {
            return Vec::new();
        };

        snapshot
            .picks
            .iter()
            .map(|pick| match self.change_for(pick.element) {
                Some(change) => Pick {
                    element: change.player_in,
                    ..pick.clone()
                },
                None => pick.clone(),
            })
            .collect()
    }

    /// Whether `player` is in the squad after planned swaps.
    pub fn squad_contains(&self, player: PlayerId) -> bool {
        self.current_squad().iter().any(|p| p.element == player)
    }

    pub fn reset_all(&mut self) {
        self.changes.clear();
    }

    /// Forget the snapshot too, e.g. when switching to another team.
    pub fn clear(&mut self) {
        self.snapshot = None;
        self.signature = None;
        self.changes.clear();
    }

    pub fn is_initialized(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| !s.picks.is_empty())
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn entry(&self) -> Option<&EntryPicks> {
        self.snapshot.as_ref().map(|s| &s.squad)
    }

    pub fn initial_picks(&self) -> &[Pick] {
        self.snapshot
            .as_ref()
            .map(|s| s.picks.as_slice())
            .unwrap_or(&[])
    }

    pub fn bank(&self) -> i32 {
        self.snapshot.as_ref().map_or(0, |s| s.bank)
    }

    pub fn value(&self) -> i32 {
        self.snapshot.as_ref().map_or(0, |s| s.value)
    }

    /// Cost summary of the current changes against the snapshot bank.
    pub fn current_cost_summary<P: PlayerPool + ?Sized>(&self, pool: &P) -> CostSummary {
        calculate_transfer_costs(&self.changes, self.bank(), pool)
    }
}
