//! Builders shared by unit tests.

use crate::fpl::types::{Fixture, Pick, Player, Team};
use crate::fpl::FixtureSource;
use crate::{Gameweek, PlayerId, Position, TeamId};
use std::collections::HashMap;

pub fn player(id: u32, position: Position, team: u32, now_cost: i32) -> Player {
    Player {
        id: PlayerId::new(id),
        web_name: format!("Player{}", id),
        position,
        team: TeamId::new(team),
        now_cost,
        total_points: 0,
        form: 0.0,
        selected_by_percent: 0.0,
        status: "a".to_string(),
        live: None,
        archived: None,
    }
}

pub fn fixture(id: u32, gw: u8, home: u32, away: u32, home_fdr: u8, away_fdr: u8) -> Fixture {
    Fixture {
        id,
        event: Some(Gameweek::new(gw)),
        team_h: TeamId::new(home),
        team_a: TeamId::new(away),
        team_h_difficulty: Some(home_fdr),
        team_a_difficulty: Some(away_fdr),
        kickoff_time: None,
        finished: false,
    }
}

pub fn team(id: u32, short_name: &str) -> Team {
    Team {
        id: TeamId::new(id),
        name: short_name.to_string(),
        short_name: short_name.to_string(),
    }
}

/// Picks in slot order 1..=n for the given player ids.
pub fn picks(ids: &[u32]) -> Vec<Pick> {
    ids.iter()
        .enumerate()
        .map(|(i, &id)| Pick {
            element: PlayerId::new(id),
            position: (i + 1) as u8,
            multiplier: if i < 11 { 1 } else { 0 },
            is_captain: i == 0,
            is_vice_captain: i == 1,
        })
        .collect()
}

/// In-memory [`FixtureSource`] for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticFixtures {
    pub fixtures: Option<Vec<Fixture>>,
    pub teams: HashMap<TeamId, String>,
}

impl StaticFixtures {
    pub fn new(fixtures: Vec<Fixture>, teams: &[(u32, &str)]) -> Self {
        Self {
            fixtures: Some(fixtures),
            teams: teams
                .iter()
                .map(|(id, name)| (TeamId::new(*id), name.to_string()))
                .collect(),
        }
    }
}

impl FixtureSource for StaticFixtures {
    fn fixtures(&self) -> Option<&[Fixture]> {
        self.fixtures.as_deref()
    }

    fn team_short_name(&self, team: TeamId) -> Option<&str> {
        self.teams.get(&team).map(String::as_str)
    }
}
