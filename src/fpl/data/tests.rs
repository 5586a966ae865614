//! Unit tests for game data normalization

use super::*;
use crate::testing::{fixture, player, team};
use crate::fpl::types::{GameweekStats, LiveElement};
use crate::Position;

fn event(id: u8, deadline: i64, is_current: bool, is_next: bool) -> Event {
    Event {
        id: Gameweek::new(id),
        deadline_time_epoch: deadline,
        finished: false,
        data_checked: false,
        is_previous: false,
        is_current,
        is_next,
    }
}

fn bootstrap(events: Vec<Event>) -> BootstrapStatic {
    BootstrapStatic {
        events,
        teams: vec![team(1, "ARS"), team(2, "CHE")],
        players: vec![
            player(10, Position::Midfielder, 1, 80),
            player(20, Position::Forward, 2, 90),
        ],
    }
}

#[test]
fn test_current_gameweek_from_flag() {
    let events = vec![event(4, 0, false, false), event(5, 0, true, false), event(6, 0, false, true)];
    assert_eq!(current_gameweek(&events), Gameweek::new(5));
}

#[test]
fn test_current_gameweek_before_season_uses_next() {
    let events = vec![event(1, 0, false, true), event(2, 0, false, false)];
    assert_eq!(current_gameweek(&events), Gameweek::new(1));

    let events = vec![event(7, 0, false, true)];
    assert_eq!(current_gameweek(&events), Gameweek::new(6));
}

#[test]
fn test_current_gameweek_no_events() {
    assert_eq!(current_gameweek(&[]), Gameweek::new(1));
}

#[test]
fn test_active_gameweek_lags_before_deadline() {
    let events = vec![event(8, 1_000, false, false), event(9, 2_000, true, false)];
    let current = current_gameweek(&events);

    assert_eq!(active_gameweek(&events, current, 1_500), Gameweek::new(8));
    assert_eq!(active_gameweek(&events, current, 2_000), Gameweek::new(9));
    assert_eq!(active_gameweek(&events, current, 2_500), Gameweek::new(9));
}

#[test]
fn test_from_parts_builds_lookups() {
    let data = GameData::from_parts(
        bootstrap(vec![event(3, 100, true, false)]),
        Some(vec![fixture(1, 4, 1, 2, 3, 4)]),
        200,
    );

    assert_eq!(data.current_gameweek(), Gameweek::new(3));
    assert_eq!(data.active_gameweek(), Gameweek::new(3));
    assert_eq!(data.players().len(), 2);
    assert_eq!(data.player(PlayerId::new(20)).unwrap().now_cost, 90);
    assert!(data.player(PlayerId::new(99)).is_none());
    assert_eq!(data.team_short_name(TeamId::new(2)), Some("CHE"));
    assert_eq!(data.fixtures().map(|f| f.len()), Some(1));
}

#[test]
fn test_from_parts_without_fixtures() {
    let data = GameData::from_parts(bootstrap(vec![]), None, 0);
    assert!(data.fixtures().is_none());
}

#[test]
fn test_attach_live_and_history() {
    let mut data = GameData::from_parts(bootstrap(vec![event(3, 0, true, false)]), None, 0);

    let live = EventLive {
        elements: vec![
            LiveElement {
                id: PlayerId::new(10),
                stats: GameweekStats {
                    minutes: 90,
                    goals_scored: 1,
                    ..Default::default()
                },
            },
            LiveElement {
                id: PlayerId::new(999),
                stats: GameweekStats::default(),
            },
        ],
    };
    data.attach_live(&live);
    assert_eq!(data.player(PlayerId::new(10)).unwrap().live.as_ref().unwrap().goals_scored, 1);
    assert!(data.player(PlayerId::new(20)).unwrap().live.is_none());

    let history = vec![HistoryEntry {
        round: Gameweek::new(2),
        opponent_team: Some(TeamId::new(1)),
        was_home: false,
        stats: GameweekStats {
            minutes: 70,
            ..Default::default()
        },
    }];
    data.attach_history(PlayerId::new(20), &history, Gameweek::new(2));
    assert_eq!(data.player(PlayerId::new(20)).unwrap().archived.as_ref().unwrap().minutes, 70);

    data.attach_history(PlayerId::new(20), &history, Gameweek::new(3));
    assert!(data.player(PlayerId::new(20)).unwrap().archived.is_none());
}

#[test]
fn test_slice_player_pool() {
    let players = vec![player(1, Position::Goalkeeper, 1, 45)];
    assert!(players.player(PlayerId::new(1)).is_some());
    assert!(players.as_slice().player(PlayerId::new(2)).is_none());
}
