//! Command implementations for the FPL planner CLI

pub mod fixtures;
pub mod lists;
pub mod plan;
pub mod points;
pub mod replacements;

#[cfg(test)]
mod tests;

use crate::fpl::types::{EntryPicks, Player};
use crate::fpl::{FplClient, GameData, PlayerPool};
use crate::{EntryId, FplError, Gameweek, PlayerId, Result, ENTRY_ID_ENV_VAR};

/// `--entry` if given, otherwise `FPL_ENTRY_ID`.
pub fn resolve_entry_id(entry_id: Option<EntryId>) -> Result<EntryId> {
    entry_id
        .or_else(|| {
            std::env::var(ENTRY_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<EntryId>().ok())
                .filter(|id| id.as_u32() != 0)
        })
        .ok_or_else(|| FplError::MissingEntryId {
            env_var: ENTRY_ID_ENV_VAR.to_string(),
        })
}

/// Client plus loaded game data, shared by every command.
pub struct CommandContext {
    pub client: FplClient,
    pub data: GameData,
}

impl CommandContext {
    pub async fn new() -> Result<Self> {
        let client = FplClient::new();
        let data = GameData::load(&client).await?;
        Ok(Self { client, data })
    }

    /// Picks for `entry` in `gw` (default: current gameweek).
    pub async fn entry_picks(&self, entry: EntryId, gw: Option<Gameweek>) -> Result<EntryPicks> {
        let gw = gw.unwrap_or_else(|| self.data.current_gameweek());
        let picks = self.client.entry_picks(entry, gw).await?;
        if picks.picks.is_empty() {
            return Err(FplError::NoData);
        }
        Ok(picks)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.data
            .player(id)
            .ok_or(FplError::PlayerNotFound { id: id.as_u32() })
    }

    /// `web_name`, or the id when the player is unknown.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.data
            .player(id)
            .map(|p| p.web_name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Tenths of a million as `£x.ym`.
pub fn format_price(tenths: i32) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{}£{}.{}m", sign, abs / 10, abs % 10)
}
