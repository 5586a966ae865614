use crate::cli::types::{EntryId, Gameweek, PlayerId, Position, TeamId};
use serde::{Deserialize, Deserializer, Serialize};


/// FPL sends some decimals (form, ownership) as strings.
fn de_str_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(f64),
    }

    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Num(n) => Ok(n),
        StrOrNum::Str(s) if s.trim().is_empty() => Ok(0.0),
        StrOrNum::Str(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// One round of fixtures (`events` in bootstrap-static).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default)]
    pub deadline_time_epoch: i64,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub data_checked: bool,
    #[serde(default)]
    pub is_previous: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

/// Player data from bootstrap-static (`elements`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub web_name: String,
    #[serde(rename = "element_type")]
    pub position: Position,
    pub team: TeamId,
    /// Price in tenths of a million.
    pub now_cost: i32,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default, deserialize_with = "de_str_f64")]
    pub form: f64,
    #[serde(default, deserialize_with = "de_str_f64")]
    pub selected_by_percent: f64,
    #[serde(default)]
    pub status: String,
    /// Snapshot for the gameweek in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<GameweekStats>,
    /// Archived stats once the gameweek has been scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<GameweekStats>,
}

/// Raw per-gameweek counters.
///
/// Shared by `event/{gw}/live` stats and `element-summary` history rows,
/// which use the same field names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GameweekStats {
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub goals_conceded: u32,
    #[serde(default)]
    pub own_goals: u32,
    #[serde(default)]
    pub penalties_saved: u32,
    #[serde(default)]
    pub penalties_missed: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default)]
    pub bonus: u32,
    #[serde(default)]
    pub clearances_blocks_interceptions: u32,
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub recoveries: u32,
    #[serde(default)]
    pub total_points: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    pub id: u32,
    /// `None` while the fixture is unscheduled.
    #[serde(default)]
    pub event: Option<Gameweek>,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub team_h_difficulty: Option<u8>,
    #[serde(default)]
    pub team_a_difficulty: Option<u8>,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    #[serde(default)]
    pub finished: bool,
}

impl Fixture {
    pub fn involves(&self, team: TeamId) -> bool {
        self.team_h == team || self.team_a == team
    }
}

/// Top-level envelope for `bootstrap-static/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapStatic {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(rename = "elements", default)]
    pub players: Vec<Player>,
}

/// One of the 15 squad slots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    /// Slot 1..=11 starting, 12..=15 bench.
    pub position: u8,
    #[serde(default)]
    pub multiplier: u8,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub event: Option<Gameweek>,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub bank: i32,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub event_transfers: u32,
    #[serde(default)]
    pub event_transfers_cost: i32,
}

/// Envelope for `entry/{id}/event/{gw}/picks/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntryPicks {
    #[serde(default)]
    pub entry: Option<EntryId>,
    #[serde(default)]
    pub active_chip: Option<String>,
    pub entry_history: EntryHistory,
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveElement {
    pub id: PlayerId,
    #[serde(default)]
    pub stats: GameweekStats,
}

/// Envelope for `event/{gw}/live/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EventLive {
    #[serde(default)]
    pub elements: Vec<LiveElement>,
}

/// A played gameweek in `element-summary` history.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub round: Gameweek,
    #[serde(default)]
    pub opponent_team: Option<TeamId>,
    #[serde(default)]
    pub was_home: bool,
    #[serde(flatten)]
    pub stats: GameweekStats,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryFixture {
    #[serde(default)]
    pub event: Option<Gameweek>,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub is_home: bool,
    #[serde(default)]
    pub difficulty: Option<u8>,
}

/// Envelope for `element-summary/{id}/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerSummary {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub fixtures: Vec<SummaryFixture>,
}
