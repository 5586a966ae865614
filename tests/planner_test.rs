//! End-to-end planner tests over game data parsed from API-shaped JSON

use fpl_planner::fixtures::FixtureResolver;
use fpl_planner::fpl::types::{BootstrapStatic, EntryPicks, Fixture};
use fpl_planner::fpl::{GameData, PlayerPool};
use fpl_planner::planner::PlannerSandbox;
use fpl_planner::replacements::{find_replacements, ReplacementOptions};
use fpl_planner::{Gameweek, PlayerId, TeamId};
use serde_json::json;

fn game_data() -> GameData {
    let bootstrap: BootstrapStatic = serde_json::from_value(json!({
        "events": [
            {"id": 1, "deadline_time_epoch": 1000, "finished": true, "is_previous": true},
            {"id": 2, "deadline_time_epoch": 2000, "is_current": true},
            {"id": 3, "deadline_time_epoch": 3000, "is_next": true}
        ],
        "teams": [
            {"id": 1, "name": "Arsenal", "short_name": "ARS"},
            {"id": 2, "name": "Chelsea", "short_name": "CHE"},
            {"id": 3, "name": "Liverpool", "short_name": "LIV"}
        ],
        "elements": [
            {"id": 10, "web_name": "Saka", "element_type": 3, "team": 1, "now_cost": 100, "total_points": 80, "form": "6.0", "selected_by_percent": "40.1"},
            {"id": 11, "web_name": "Palmer", "element_type": 3, "team": 2, "now_cost": 105, "total_points": 90, "form": "7.5", "selected_by_percent": "55.0"},
            {"id": 12, "web_name": "Salah", "element_type": 3, "team": 3, "now_cost": 130, "total_points": 120, "form": "7.0", "selected_by_percent": "60.0"},
            {"id": 13, "web_name": "Raya", "element_type": 1, "team": 1, "now_cost": 55, "total_points": 50, "form": "4.0", "selected_by_percent": "20.0"},
            {"id": 14, "web_name": "Haaland", "element_type": 4, "team": 2, "now_cost": 150, "total_points": 100, "form": "5.0", "selected_by_percent": "70.0"}
        ]
    }))
    .unwrap();

    let fixtures: Vec<Fixture> = serde_json::from_value(json!([
        {"id": 1, "event": 3, "team_h": 1, "team_a": 2, "team_h_difficulty": 3, "team_a_difficulty": 4},
        {"id": 2, "event": 4, "team_h": 3, "team_a": 1, "team_h_difficulty": 4, "team_a_difficulty": 5},
        {"id": 3, "event": 4, "team_h": 2, "team_a": 3, "team_h_difficulty": 2, "team_a_difficulty": 2},
        {"id": 4, "event": null, "team_h": 1, "team_a": 3}
    ]))
    .unwrap();

    // Current GW deadline has passed
    GameData::from_parts(bootstrap, Some(fixtures), 2500)
}

fn squad() -> EntryPicks {
    serde_json::from_value(json!({
        "active_chip": null,
        "entry_history": {"event": 2, "points": 60, "bank": 15, "value": 1000},
        "picks": [
            {"element": 13, "position": 1, "multiplier": 1},
            {"element": 10, "position": 2, "multiplier": 2, "is_captain": true},
            {"element": 14, "position": 3, "multiplier": 1, "is_vice_captain": true}
        ]
    }))
    .unwrap()
}

#[test]
fn test_gameweeks_resolved_from_events() {
    let data = game_data();
    assert_eq!(data.current_gameweek(), Gameweek::new(2));
    assert_eq!(data.active_gameweek(), Gameweek::new(2));
}

#[test]
fn test_plan_swap_and_cost() {
    let data = game_data();
    let squad = squad();
    let mut sandbox = PlannerSandbox::new();

    assert!(sandbox.initialize(
        &squad,
        &squad.picks,
        squad.entry_history.bank,
        squad.entry_history.value
    ));
    sandbox.add_change(PlayerId::new(10), PlayerId::new(11));

    let current = sandbox.current_squad();
    assert_eq!(current[1].element, PlayerId::new(11));
    assert!(current[1].is_captain);

    let cost = sandbox.current_cost_summary(&data);
    assert_eq!(cost.transfer_count, 1);
    assert_eq!(cost.points_hit, 0);
    assert_eq!(cost.total_cost, 5);
    assert_eq!(cost.new_bank, 10);

    // Second swap costs a hit
    sandbox.add_change(PlayerId::new(14), PlayerId::new(12));
    let cost = sandbox.current_cost_summary(&data);
    assert_eq!(cost.transfer_count, 2);
    assert_eq!(cost.points_hit, -4);

    // Same squad keeps the plan
    assert!(!sandbox.initialize(&squad, &squad.picks, 15, 1000));
    assert_eq!(sandbox.changes().len(), 2);
}

#[test]
fn test_fixtures_from_loaded_data() {
    let data = game_data();
    let resolver = FixtureResolver::new(&data);

    let upcoming = resolver.get_fixtures(TeamId::new(1), 5, false, data.active_gameweek());
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].opponent, "CHE (H)");
    assert_eq!(upcoming[1].opponent, "LIV (A)");
    assert_eq!(upcoming[1].difficulty, 5);

    let avg = resolver.fixture_difficulty(TeamId::new(1), 2, data.active_gameweek());
    assert!((avg - 4.0).abs() < 1e-9);
}

#[test]
fn test_replacements_exclude_squad_players() {
    let data = game_data();
    let squad = squad();

    let candidates = find_replacements(
        PlayerId::new(10),
        &squad.picks,
        &data,
        &data,
        data.active_gameweek(),
        &ReplacementOptions::default(),
    );

    let ids: Vec<PlayerId> = candidates.iter().map(|c| c.player.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&PlayerId::new(10)));
    assert!(!ids.contains(&PlayerId::new(13)));
    // Palmer: 7.5 + (3 - 3.0) = 7.5; Salah: 7.0 + (3 - 3.0) = 7.0
    assert_eq!(ids[0], PlayerId::new(11));
    assert!(data.player(ids[1]).is_some());
}
