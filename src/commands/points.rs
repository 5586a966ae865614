//! Points command implementation

use log::debug;
use serde::Serialize;

use super::CommandContext;
use crate::core::PlayerDataCache;
use crate::fpl::PlayerPool;
use crate::points::{calculate_gw_points_breakdown, PointsBreakdown};
use crate::{FplError, Gameweek, PlayerId, Result};

#[derive(Debug, Serialize)]
pub struct PointsReport {
    pub player: PlayerId,
    pub name: String,
    pub gameweek: Gameweek,
    pub breakdown: PointsBreakdown,
    pub total: i32,
}

/// Handle the points command
pub async fn handle_points(player_id: PlayerId, gw: Option<Gameweek>, as_json: bool) -> Result<()> {
    let mut ctx = CommandContext::new().await?;
    let current = ctx.data.current_gameweek();
    let gw = gw.unwrap_or(current);

    if gw == current {
        let live = ctx.client.event_live(gw).await?;
        ctx.data.attach_live(&live);
    } else {
        debug!("GW{} is not current, using archived history", gw);
        let cache = PlayerDataCache::new();
        let history = cache.history(&ctx.client, player_id).await;
        ctx.data.attach_history(player_id, &history, gw);
    }

    let player = ctx
        .data
        .player(player_id)
        .ok_or(FplError::PlayerNotFound {
            id: player_id.as_u32(),
        })?;
    // Live stats only describe the current gameweek.
    let live = if gw == current { player.live.as_ref() } else { None };
    let breakdown = calculate_gw_points_breakdown(player, live, player.archived.as_ref());
    let report = PointsReport {
        player: player_id,
        name: player.web_name.clone(),
        gameweek: gw,
        total: breakdown.total(),
        breakdown,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} ({}) GW{}", report.name, player.position, gw);
    if report.breakdown.is_empty() {
        println!("  No stats for this gameweek");
        return Ok(());
    }
    for (item, line) in report.breakdown.iter() {
        println!("  {:<24} {:>4} {:>+4}", format!("{:?}", item), line.value, line.points);
    }
    println!("  {:<24} {:>9}", "Total", report.total);

    Ok(())
}
