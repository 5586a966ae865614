//! Fixtures command implementation

use serde::Serialize;

use super::CommandContext;
use crate::fixtures::{fdr_class, DoubleGameweek, FixtureResolver, FixtureSwing, FixtureView};
use crate::{Gameweek, Result, TeamId};

#[derive(Debug, Serialize)]
pub struct FixturesReport {
    pub team: TeamId,
    pub reference_gameweek: Gameweek,
    pub fixtures: Vec<FixtureView>,
    pub avg_difficulty: f64,
    pub fdr_class: &'static str,
    pub swing: FixtureSwing,
    pub blanks: Vec<Gameweek>,
    pub doubles: Vec<DoubleGameweek>,
}

/// Lookahead for blank/double detection.
const SCAN_AHEAD: u8 = 8;

pub fn build_report<S: crate::fpl::FixtureSource + ?Sized>(
    source: &S,
    team: TeamId,
    count: usize,
    past: bool,
    reference_gw: Gameweek,
) -> FixturesReport {
    let resolver = FixtureResolver::new(source);
    let avg_difficulty = resolver.fixture_difficulty(team, count, reference_gw);

    FixturesReport {
        team,
        reference_gameweek: reference_gw,
        fixtures: resolver.get_fixtures(team, count, past, reference_gw),
        avg_difficulty,
        fdr_class: fdr_class(avg_difficulty),
        swing: resolver.fixture_swing(team, count, count, reference_gw),
        blanks: resolver.blank_gameweeks(team, SCAN_AHEAD, reference_gw),
        doubles: resolver.double_gameweeks(team, SCAN_AHEAD, reference_gw),
    }
}

/// Handle the fixtures command
pub async fn handle_fixtures(
    team: TeamId,
    count: usize,
    past: bool,
    gw: Option<Gameweek>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let reference_gw = gw.unwrap_or_else(|| ctx.data.active_gameweek());
    let report = build_report(&ctx.data, team, count, past, reference_gw);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let team_name = ctx.data.team(team).map_or("Unknown team", |t| t.name.as_str());
    println!(
        "{} fixtures {} GW{}:",
        team_name,
        if past { "before" } else { "after" },
        reference_gw
    );
    for f in &report.fixtures {
        println!("  GW{:<3} {:<10} FDR {}", f.gameweek, f.opponent, f.difficulty);
    }
    println!(
        "Next {} average FDR: {:.2} ({})",
        count, report.avg_difficulty, report.fdr_class
    );

    if report.swing.improving {
        println!("Fixtures improve after the next {} ({:+.2})", count, report.swing.swing);
    } else if report.swing.worsening {
        println!("Fixtures worsen after the next {} ({:+.2})", count, report.swing.swing);
    }
    if !report.blanks.is_empty() {
        let gws: Vec<String> = report.blanks.iter().map(|g| format!("GW{}", g)).collect();
        println!("Blank: {}", gws.join(", "));
    }
    for d in &report.doubles {
        println!("Double: GW{} ({} fixtures)", d.gameweek, d.fixtures);
    }

    Ok(())
}
