//! Itemized FPL points for a single gameweek.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::fpl::types::{GameweekStats, Player};
use crate::Position;


/// Combined clearances/blocks/interceptions + tackles a defender needs.
pub const DEFCON_THRESHOLD_DEF: u32 = 10;
/// Same four actions plus recoveries for midfielders and forwards.
pub const DEFCON_THRESHOLD_OUTFIELD: u32 = 12;
pub const DEFCON_POINTS: i32 = 2;

/// A scoring category. Serialized in camelCase (`cleanSheet`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PointsItem {
    Minutes,
    Goals,
    Assists,
    CleanSheet,
    Saves,
    PenaltiesSaved,
    DefensiveContribution,
    PenaltiesMissed,
    GoalsConceded,
    YellowCards,
    RedCards,
    OwnGoals,
    Bonus,
}

/// Underlying stat value and the points it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsLine {
    pub value: u32,
    pub points: i32,
}

/// Non-zero contributions only; an absent item means no contribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PointsBreakdown(BTreeMap<PointsItem, PointsLine>);

impl PointsBreakdown {
    fn push(&mut self, item: PointsItem, value: u32, points: i32) {
        if points != 0 {
            self.0.insert(item, PointsLine { value, points });
        }
    }

    pub fn get(&self, item: PointsItem) -> Option<&PointsLine> {
        self.0.get(&item)
    }

    pub fn points(&self, item: PointsItem) -> Option<i32> {
        self.0.get(&item).map(|l| l.points)
    }

    pub fn total(&self) -> i32 {
        self.0.values().map(|l| l.points).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PointsItem, &PointsLine)> {
        self.0.iter()
    }
}

fn goal_points(position: Position) -> i32 {
    match position {
        Position::Goalkeeper => 10,
        Position::Defender => 6,
        Position::Midfielder => 5,
        Position::Forward => 4,
    }
}

fn clean_sheet_points(position: Position) -> i32 {
    match position {
        Position::Goalkeeper | Position::Defender => 4,
        Position::Midfielder => 1,
        Position::Forward => 0,
    }
}

fn appearance_points(minutes: u32) -> i32 {
    match minutes {
        0 => 0,
        1..=59 => 1,
        _ => 2,
    }
}

/// Defensive actions counted for `position` and the threshold they must reach.
fn defensive_actions(position: Position, stats: &GameweekStats) -> Option<(u32, u32)> {
    let base = stats.clearances_blocks_interceptions + stats.tackles;
    match position {
        Position::Goalkeeper => None,
        Position::Defender => Some((base, DEFCON_THRESHOLD_DEF)),
        Position::Midfielder | Position::Forward => {
            Some((base + stats.recoveries, DEFCON_THRESHOLD_OUTFIELD))
        }
    }
}

/// Score one gameweek's counters for a player in `position`.
pub fn breakdown_for_position(position: Position, stats: &GameweekStats) -> PointsBreakdown {
    let mut b = PointsBreakdown::default();
    let keeper = position == Position::Goalkeeper;
    let keeper_or_def = keeper || position == Position::Defender;

    b.push(PointsItem::Minutes, stats.minutes, appearance_points(stats.minutes));
    b.push(
        PointsItem::Goals,
        stats.goals_scored,
        stats.goals_scored as i32 * goal_points(position),
    );
    b.push(PointsItem::Assists, stats.assists, stats.assists as i32 * 3);
    b.push(
        PointsItem::CleanSheet,
        stats.clean_sheets,
        stats.clean_sheets as i32 * clean_sheet_points(position),
    );

    if keeper {
        b.push(PointsItem::Saves, stats.saves, (stats.saves / 3) as i32);
        b.push(
            PointsItem::PenaltiesSaved,
            stats.penalties_saved,
            stats.penalties_saved as i32 * 5,
        );
    }

    if let Some((actions, threshold)) = defensive_actions(position, stats) {
        if actions >= threshold {
            b.push(PointsItem::DefensiveContribution, actions, DEFCON_POINTS);
        }
    }

    b.push(
        PointsItem::PenaltiesMissed,
        stats.penalties_missed,
        stats.penalties_missed as i32 * -2,
    );

    if keeper_or_def {
        b.push(
            PointsItem::GoalsConceded,
            stats.goals_conceded,
            -((stats.goals_conceded / 2) as i32),
        );
    }

    b.push(PointsItem::YellowCards, stats.yellow_cards, -(stats.yellow_cards as i32));
    b.push(PointsItem::RedCards, stats.red_cards, stats.red_cards as i32 * -3);
    b.push(PointsItem::OwnGoals, stats.own_goals, stats.own_goals as i32 * -2);
    b.push(PointsItem::Bonus, stats.bonus, stats.bonus as i32);

    b
}

/// Breakdown from the live snapshot when present, the archived row otherwise.
pub fn calculate_gw_points_breakdown(
    player: &Player,
    live: Option<&GameweekStats>,
    archived: Option<&GameweekStats>,
) -> PointsBreakdown {
    match live.or(archived) {
        Some(stats) => breakdown_for_position(player.position, stats),
        None => PointsBreakdown::default(),
    }
}
