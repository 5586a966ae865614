//! Same-position replacement candidates for a squad player.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::fixtures::{FdrClass, FixtureResolver, NEUTRAL_DIFFICULTY};
use crate::fpl::types::{Pick, Player};
use crate::fpl::{FixtureSource, PlayerPool};
use crate::{Gameweek, PlayerId, Position};


#[derive(Debug, Clone)]
pub struct ReplacementOptions {
    pub limit: usize,
    /// Upcoming fixtures averaged for the fixture component of the score.
    pub fixture_window: usize,
    pub fixture_weight: f64,
    /// Money in the bank; when set, candidates must cost at most
    /// `price_out + budget`.
    pub budget: Option<i32>,
}

impl Default for ReplacementOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            fixture_window: 5,
            fixture_weight: 1.0,
            budget: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    Score,
    Form,
    TotalPoints,
    Price,
    Ownership,
    FixtureDifficulty,
}

#[derive(Debug, Clone)]
pub struct BrowseOptions {
    pub sort: SortKey,
    pub max_price: Option<i32>,
    pub fixture_window: usize,
    /// Price of the player being replaced; drives `price_delta` and `affordable`.
    pub reference_price: Option<i32>,
    pub budget: Option<i32>,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            max_price: None,
            fixture_window: 5,
            reference_price: None,
            budget: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate<'a> {
    pub player: &'a Player,
    pub score: f64,
    pub avg_difficulty: f64,
    pub fdr_class: FdrClass,
    /// `candidate price - outgoing price`
    pub price_delta: i32,
    pub affordable: bool,
}

/// Ranking score: current form adjusted by how far the upcoming fixtures sit
/// from neutral difficulty.
pub fn candidate_score(form: f64, avg_difficulty: f64, fixture_weight: f64) -> f64 {
    form + (NEUTRAL_DIFFICULTY as f64 - avg_difficulty) * fixture_weight
}

fn squad_ids(squad: &[Pick]) -> HashSet<PlayerId> {
    squad.iter().map(|p| p.element).collect()
}

struct Scorer<'a, S: FixtureSource + ?Sized> {
    resolver: FixtureResolver<'a, S>,
    reference_gw: Gameweek,
    fixture_window: usize,
    fixture_weight: f64,
    reference_price: i32,
    budget: Option<i32>,
}

impl<'a, S: FixtureSource + ?Sized> Scorer<'a, S> {
    fn candidate<'p>(&self, player: &'p Player) -> Candidate<'p> {
        let avg_difficulty =
            self.resolver
                .fixture_difficulty(player.team, self.fixture_window, self.reference_gw);
        let price_delta = player.now_cost - self.reference_price;
        Candidate {
            player,
            score: candidate_score(player.form, avg_difficulty, self.fixture_weight),
            avg_difficulty,
            fdr_class: FdrClass::from_average(avg_difficulty),
            price_delta,
            affordable: self.budget.map_or(true, |b| price_delta <= b),
        }
    }
}

fn by_score(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.player.total_points.cmp(&a.player.total_points))
        .then_with(|| a.player.id.cmp(&b.player.id))
}

/// Best same-position players to bring in for `player_out`, best first.
///
/// Players already in `squad` are skipped. Returns nothing if `player_out`
/// is not in the pool.
pub fn find_replacements<'p, P, S>(
    player_out: PlayerId,
    squad: &[Pick],
    pool: &'p P,
    fixtures: &S,
    reference_gw: Gameweek,
    options: &ReplacementOptions,
) -> Vec<Candidate<'p>>
where
    P: PlayerPool + ?Sized,
    S: FixtureSource + ?Sized,
{
    let Some(outgoing) = pool.player(player_out) else {
        return Vec::new();
    };
    let in_squad = squad_ids(squad);
    let scorer = Scorer {
        resolver: FixtureResolver::new(fixtures),
        reference_gw,
        fixture_window: options.fixture_window,
        fixture_weight: options.fixture_weight,
        reference_price: outgoing.now_cost,
        budget: options.budget,
    };

    let mut candidates: Vec<Candidate<'p>> = pool
        .players()
        .iter()
        .filter(|p| p.position == outgoing.position)
        .filter(|p| p.id != player_out && !in_squad.contains(&p.id))
        .map(|p| scorer.candidate(p))
        .filter(|c| options.budget.is_none() || c.affordable)
        .collect();

    candidates.sort_by(by_score);
    candidates.truncate(options.limit);
    candidates
}

/// Every same-position player outside the squad, sorted by `options.sort`.
pub fn browse_alternatives<'p, P, S>(
    position: Position,
    squad: &[Pick],
    pool: &'p P,
    fixtures: &S,
    reference_gw: Gameweek,
    options: &BrowseOptions,
) -> Vec<Candidate<'p>>
where
    P: PlayerPool + ?Sized,
    S: FixtureSource + ?Sized,
{
    let in_squad = squad_ids(squad);
    let scorer = Scorer {
        resolver: FixtureResolver::new(fixtures),
        reference_gw,
        fixture_window: options.fixture_window,
        fixture_weight: 1.0,
        reference_price: options.reference_price.unwrap_or(0),
        budget: options.budget,
    };

    let mut candidates: Vec<Candidate<'p>> = pool
        .players()
        .iter()
        .filter(|p| p.position == position && !in_squad.contains(&p.id))
        .filter(|p| options.max_price.map_or(true, |max| p.now_cost <= max))
        .map(|p| scorer.candidate(p))
        .collect();

    candidates.sort_by(|a, b| {
        let primary = match options.sort {
            SortKey::Score => b.score.total_cmp(&a.score),
            SortKey::Form => b.player.form.total_cmp(&a.player.form),
            SortKey::TotalPoints => b.player.total_points.cmp(&a.player.total_points),
            SortKey::Price => b.player.now_cost.cmp(&a.player.now_cost),
            SortKey::Ownership => b
                .player
                .selected_by_percent
                .total_cmp(&a.player.selected_by_percent),
            SortKey::FixtureDifficulty => a.avg_difficulty.total_cmp(&b.avg_difficulty),
        };
        primary.then_with(|| a.player.id.cmp(&b.player.id))
    });
    candidates
}
