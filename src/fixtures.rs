//! Fixture queries relative to an explicit reference gameweek.
//!
//! A fixture is *future* only when its gameweek is strictly greater than the
//! reference and *past* only when strictly less, so the fixture being played
//! in the reference gameweek never shows up in either list. When the fixture
//! list or team names are not available, queries degrade to neutral defaults
//! ("TBD", difficulty 3, empty vectors) instead of failing.

use serde::Serialize;
use std::fmt;

use crate::fpl::types::Fixture;
use crate::fpl::FixtureSource;
use crate::{Gameweek, TeamId};


/// Difficulty used when a fixture side is unrated or data is missing.
pub const NEUTRAL_DIFFICULTY: u8 = 3;

/// Opponent label used for placeholders and blank gameweeks.
pub const TBD: &str = "TBD";

/// Swing magnitude below which a change in difficulty is treated as noise.
pub const SWING_THRESHOLD: f64 = 0.5;

/// One row of a team's fixture strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureView {
    /// Opponent short name with venue, e.g. `"ARS (H)"`.
    pub opponent: String,
    pub difficulty: u8,
    pub gameweek: Gameweek,
    pub is_home: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opponent {
    pub name: String,
    pub difficulty: u8,
    pub is_home: bool,
}

impl Opponent {
    fn tbd() -> Self {
        Self {
            name: TBD.to_string(),
            difficulty: NEUTRAL_DIFFICULTY,
            is_home: false,
        }
    }
}

/// Fixture difficulty band for an average FDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FdrClass {
    Excellent,
    Good,
    Average,
    Tough,
    #[serde(rename = "Very Tough")]
    VeryTough,
}

impl FdrClass {
    /// Band boundaries are inclusive on the upper end.
    pub fn from_average(avg: f64) -> Self {
        if avg <= 2.0 {
            FdrClass::Excellent
        } else if avg <= 2.5 {
            FdrClass::Good
        } else if avg <= 3.5 {
            FdrClass::Average
        } else if avg <= 4.0 {
            FdrClass::Tough
        } else {
            FdrClass::VeryTough
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FdrClass::Excellent => "Excellent",
            FdrClass::Good => "Good",
            FdrClass::Average => "Average",
            FdrClass::Tough => "Tough",
            FdrClass::VeryTough => "Very Tough",
        }
    }
}

impl fmt::Display for FdrClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for an average difficulty.
pub fn fdr_class(avg_difficulty: f64) -> &'static str {
    FdrClass::from_average(avg_difficulty).label()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixtureSwing {
    pub next_avg: f64,
    pub after_avg: f64,
    /// `after_avg - next_avg`; negative means the run gets easier.
    pub swing: f64,
    pub improving: bool,
    pub worsening: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoubleGameweek {
    pub gameweek: Gameweek,
    pub fixtures: usize,
}

/// Query layer over a [`FixtureSource`].
#[derive(Debug, Clone, Copy)]
pub struct FixtureResolver<'a, S: FixtureSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: FixtureSource + ?Sized> FixtureResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// The team's fixtures with a gameweek, sorted ascending by gameweek.
    fn team_fixtures(&self, team: TeamId) -> Option<Vec<(Gameweek, &'a Fixture)>> {
        let fixtures = self.source.fixtures()?;
        let mut out: Vec<_> = fixtures
            .iter()
            .filter(|f| f.involves(team))
            .filter_map(|f| f.event.map(|gw| (gw, f)))
            .collect();
        out.sort_by_key(|(gw, _)| *gw);
        Some(out)
    }

    /// `count` past (`is_past`) or upcoming fixtures around `reference_gw`,
    /// in chronological order.
    pub fn get_fixtures(
        &self,
        team: TeamId,
        count: usize,
        is_past: bool,
        reference_gw: Gameweek,
    ) -> Vec<FixtureView> {
        let Some(team_fixtures) = self.team_fixtures(team) else {
            return placeholders(count, reference_gw);
        };
        if self.source.team_short_name(team).is_none() {
            return placeholders(count, reference_gw);
        }

        let selected: Vec<_> = if is_past {
            let past: Vec<_> = team_fixtures
                .into_iter()
                .filter(|(gw, _)| *gw < reference_gw)
                .collect();
            let skip = past.len().saturating_sub(count);
            past.into_iter().skip(skip).collect()
        } else {
            team_fixtures
                .into_iter()
                .filter(|(gw, _)| *gw > reference_gw)
                .take(count)
                .collect()
        };

        selected
            .into_iter()
            .map(|(gw, f)| {
                let side = side_of(f, team);
                let name = self.source.team_short_name(side.opponent).unwrap_or(TBD);
                FixtureView {
                    opponent: format!("{} ({})", name, if side.is_home { "H" } else { "A" }),
                    difficulty: side.difficulty,
                    gameweek: gw,
                    is_home: side.is_home,
                }
            })
            .collect()
    }

    /// Opponent in exactly `gameweek`. The first fixture wins in a double.
    pub fn gw_opponent(&self, team: TeamId, gameweek: Gameweek) -> Opponent {
        let Some(fixtures) = self.source.fixtures() else {
            return Opponent::tbd();
        };
        let Some(f) = fixtures
            .iter()
            .find(|f| f.event == Some(gameweek) && f.involves(team))
        else {
            return Opponent::tbd();
        };

        let side = side_of(f, team);
        match self.source.team_short_name(side.opponent) {
            Some(name) => Opponent {
                name: name.to_string(),
                difficulty: side.difficulty,
                is_home: side.is_home,
            },
            None => Opponent::tbd(),
        }
    }

    /// Mean difficulty of the next `count` fixtures after `reference_gw`.
    pub fn fixture_difficulty(&self, team: TeamId, count: usize, reference_gw: Gameweek) -> f64 {
        let upcoming: Vec<u8> = self
            .team_fixtures(team)
            .unwrap_or_default()
            .into_iter()
            .filter(|(gw, _)| *gw > reference_gw)
            .take(count)
            .map(|(_, f)| side_of(f, team).difficulty)
            .collect();
        mean_or_neutral(&upcoming)
    }

    /// Compare the next `next_count` fixtures with the `after_count` after them.
    pub fn fixture_swing(
        &self,
        team: TeamId,
        next_count: usize,
        after_count: usize,
        reference_gw: Gameweek,
    ) -> FixtureSwing {
        let upcoming: Vec<u8> = self
            .team_fixtures(team)
            .unwrap_or_default()
            .into_iter()
            .filter(|(gw, _)| *gw > reference_gw)
            .take(next_count + after_count)
            .map(|(_, f)| side_of(f, team).difficulty)
            .collect();

        let split = next_count.min(upcoming.len());
        let next_avg = mean_or_neutral(&upcoming[..split]);
        let after_avg = mean_or_neutral(&upcoming[split..]);
        let swing = after_avg - next_avg;

        FixtureSwing {
            next_avg,
            after_avg,
            swing,
            improving: swing < -SWING_THRESHOLD,
            worsening: swing > SWING_THRESHOLD,
        }
    }

    /// Gameweeks in `reference+1 ..= min(reference+look_ahead, 38)` without a fixture.
    pub fn blank_gameweeks(
        &self,
        team: TeamId,
        look_ahead: u8,
        reference_gw: Gameweek,
    ) -> Vec<Gameweek> {
        let Some(fixtures) = self.source.fixtures() else {
            return Vec::new();
        };
        scan_window(look_ahead, reference_gw)
            .filter(|gw| fixtures_in(fixtures, team, *gw) == 0)
            .collect()
    }

    /// Gameweeks in the same window with more than one fixture.
    pub fn double_gameweeks(
        &self,
        team: TeamId,
        look_ahead: u8,
        reference_gw: Gameweek,
    ) -> Vec<DoubleGameweek> {
        let Some(fixtures) = self.source.fixtures() else {
            return Vec::new();
        };
        scan_window(look_ahead, reference_gw)
            .filter_map(|gw| {
                let n = fixtures_in(fixtures, team, gw);
                (n > 1).then_some(DoubleGameweek {
                    gameweek: gw,
                    fixtures: n,
                })
            })
            .collect()
    }
}

struct Side {
    opponent: TeamId,
    difficulty: u8,
    is_home: bool,
}

fn side_of(f: &Fixture, team: TeamId) -> Side {
    if f.team_h == team {
        Side {
            opponent: f.team_a,
            difficulty: f.team_h_difficulty.unwrap_or(NEUTRAL_DIFFICULTY),
            is_home: true,
        }
    } else {
        Side {
            opponent: f.team_h,
            difficulty: f.team_a_difficulty.unwrap_or(NEUTRAL_DIFFICULTY),
            is_home: false,
        }
    }
}

fn placeholders(count: usize, reference_gw: Gameweek) -> Vec<FixtureView> {
    (1..=count)
        .map(|i| FixtureView {
            opponent: TBD.to_string(),
            difficulty: NEUTRAL_DIFFICULTY,
            gameweek: reference_gw.plus(i.min(u8::MAX as usize) as u8),
            is_home: false,
        })
        .collect()
}

fn mean_or_neutral(values: &[u8]) -> f64 {
    if values.is_empty() {
        return NEUTRAL_DIFFICULTY as f64;
    }
    values.iter().map(|&d| d as f64).sum::<f64>() / values.len() as f64
}

fn scan_window(look_ahead: u8, reference_gw: Gameweek) -> impl Iterator<Item = Gameweek> {
    let start = reference_gw.as_u8().saturating_add(1);
    let end = reference_gw
        .as_u8()
        .saturating_add(look_ahead)
        .min(Gameweek::LAST.as_u8());
    (start..=end).map(Gameweek::new)
}

fn fixtures_in(fixtures: &[Fixture], team: TeamId, gw: Gameweek) -> usize {
    fixtures
        .iter()
        .filter(|f| f.event == Some(gw) && f.involves(team))
        .count()
}
