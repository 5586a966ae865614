//! Normalized game data: player pool, team names, fixtures and the
//! current/active gameweek pointers.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::fpl::http::FplClient;
use crate::fpl::types::{BootstrapStatic, Event, EventLive, Fixture, HistoryEntry, Player, Team};
use crate::{Gameweek, PlayerId, Result, TeamId};

#[cfg(test)]
mod tests;

/// Read access to the player pool.
pub trait PlayerPool {
    fn players(&self) -> &[Player];

    fn player(&self, id: PlayerId) -> Option<&Player>;
}

impl PlayerPool for [Player] {
    fn players(&self) -> &[Player] {
        self
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.iter().find(|p| p.id == id)
    }
}

impl PlayerPool for Vec<Player> {
    fn players(&self) -> &[Player] {
        self
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.as_slice().player(id)
    }
}

/// Fixture list and team names, either of which may not have loaded yet.
pub trait FixtureSource {
    fn fixtures(&self) -> Option<&[Fixture]>;

    fn team_short_name(&self, team: TeamId) -> Option<&str>;
}

#[derive(Debug, Clone, Default)]
pub struct GameData {
    players: Vec<Player>,
    player_index: HashMap<PlayerId, usize>,
    teams: HashMap<TeamId, Team>,
    events: Vec<Event>,
    fixtures: Option<Vec<Fixture>>,
    current_gameweek: Gameweek,
    active_gameweek: Gameweek,
}

impl GameData {
    /// Build from already-fetched payloads. `now_epoch` is unix seconds and
    /// only decides whether the active gameweek lags the current one.
    pub fn from_parts(
        bootstrap: BootstrapStatic,
        fixtures: Option<Vec<Fixture>>,
        now_epoch: i64,
    ) -> Self {
        let current_gameweek = current_gameweek(&bootstrap.events);
        let active_gameweek = active_gameweek(&bootstrap.events, current_gameweek, now_epoch);

        let player_index = bootstrap
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        let teams = bootstrap.teams.into_iter().map(|t| (t.id, t)).collect();

        debug!(
            "Game data: {} players, current GW {}, active GW {}",
            bootstrap.players.len(),
            current_gameweek,
            active_gameweek
        );

        Self {
            players: bootstrap.players,
            player_index,
            teams,
            events: bootstrap.events,
            fixtures,
            current_gameweek,
            active_gameweek,
        }
    }

    /// Fetch bootstrap-static and the fixture list.
    ///
    /// A failed fixture fetch leaves the fixture list unavailable rather than
    /// failing the load, so fixture queries fall back to their defaults.
    pub async fn load(client: &FplClient) -> Result<Self> {
        let (bootstrap, fixtures) = tokio::join!(client.bootstrap_static(), client.fixtures());
        let bootstrap = bootstrap?;
        let fixtures = match fixtures {
            Ok(f) => Some(f),
            Err(e) => {
                warn!("Fixture list unavailable: {}", e);
                None
            }
        };

        let data = Self::from_parts(bootstrap, fixtures, unix_now());
        info!(
            "Loaded {} players and {} fixtures",
            data.players.len(),
            data.fixtures.as_ref().map_or(0, Vec::len)
        );
        Ok(data)
    }

    pub fn current_gameweek(&self) -> Gameweek {
        self.current_gameweek
    }

    pub fn active_gameweek(&self) -> Gameweek {
        self.active_gameweek
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    /// Store live stats on every player present in `live`.
    pub fn attach_live(&mut self, live: &EventLive) {
        for element in &live.elements {
            if let Some(&idx) = self.player_index.get(&element.id) {
                self.players[idx].live = Some(element.stats.clone());
            }
        }
    }

    /// Store the archived row for `gw` from a player's summary history.
    pub fn attach_history(&mut self, player: PlayerId, history: &[HistoryEntry], gw: Gameweek) {
        let Some(&idx) = self.player_index.get(&player) else {
            return;
        };
        self.players[idx].archived = history
            .iter()
            .find(|h| h.round == gw)
            .map(|h| h.stats.clone());
    }
}

impl PlayerPool for GameData {
    fn players(&self) -> &[Player] {
        &self.players
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_index.get(&id).map(|&i| &self.players[i])
    }
}

impl FixtureSource for GameData {
    fn fixtures(&self) -> Option<&[Fixture]> {
        self.fixtures.as_deref()
    }

    fn team_short_name(&self, team: TeamId) -> Option<&str> {
        self.teams.get(&team).map(|t| t.short_name.as_str())
    }
}

/// Gameweek flagged current; else the one before the next; else 1.
pub fn current_gameweek(events: &[Event]) -> Gameweek {
    if let Some(e) = events.iter().find(|e| e.is_current) {
        return e.id;
    }
    events
        .iter()
        .find(|e| e.is_next)
        .map(|e| e.id.prev())
        .unwrap_or_default()
}

/// Lags `current` by one while its deadline has not passed yet.
pub fn active_gameweek(events: &[Event], current: Gameweek, now_epoch: i64) -> Gameweek {
    match events.iter().find(|e| e.id == current) {
        Some(e) if e.deadline_time_epoch > now_epoch => current.prev(),
        _ => current,
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
