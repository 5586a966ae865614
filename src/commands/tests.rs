//! Unit tests for command helpers

use super::*;

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_resolve_entry_id_from_option() {
        let result = resolve_entry_id(Some(EntryId::new(12345)));
        assert_eq!(result.unwrap().as_u32(), 12345);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "£0.0m");
        assert_eq!(format_price(65), "£6.5m");
        assert_eq!(format_price(1023), "£102.3m");
        assert_eq!(format_price(-5), "-£0.5m");
        assert_eq!(format_price(-15), "-£1.5m");
    }
}

#[cfg(test)]
mod plan_tests {
    use crate::cli::types::Swap;
    use crate::commands::plan::apply_swaps;
    use crate::fpl::types::{EntryHistory, EntryPicks};
    use crate::planner::PlannerSandbox;
    use crate::testing::{picks, player};
    use crate::{FplError, PlayerId, Position};

    fn setup() -> (PlannerSandbox, Vec<crate::fpl::types::Player>) {
        let pool = vec![
            player(1, Position::Midfielder, 1, 80),
            player(2, Position::Midfielder, 2, 75),
            player(3, Position::Forward, 3, 90),
        ];
        let squad = EntryPicks {
            entry_history: EntryHistory {
                bank: 10,
                value: 1000,
                ..Default::default()
            },
            picks: picks(&[1, 3]),
            ..Default::default()
        };
        let mut sandbox = PlannerSandbox::new();
        sandbox.initialize(&squad, &squad.picks, 10, 1000);
        (sandbox, pool)
    }

    #[test]
    fn test_apply_swaps_adds_changes() {
        let (mut sandbox, pool) = setup();
        let swaps: Vec<Swap> = vec!["1:2".parse().unwrap()];

        apply_swaps(&mut sandbox, &swaps, &pool).unwrap();

        assert_eq!(sandbox.changes().len(), 1);
        assert!(sandbox.squad_contains(PlayerId::new(2)));
        assert!(!sandbox.squad_contains(PlayerId::new(1)));

        let cost = sandbox.current_cost_summary(&pool);
        assert_eq!(cost.points_hit, 0);
        assert_eq!(cost.new_bank, 15);
    }

    #[test]
    fn test_apply_swaps_unknown_player() {
        let (mut sandbox, pool) = setup();
        let swaps: Vec<Swap> = vec!["1:99".parse().unwrap()];

        match apply_swaps(&mut sandbox, &swaps, &pool) {
            Err(FplError::PlayerNotFound { id }) => assert_eq!(id, 99),
            other => panic!("Expected PlayerNotFound, got {:?}", other),
        }
        assert!(sandbox.changes().is_empty());
    }
}

#[cfg(test)]
mod fixtures_report_tests {
    use crate::commands::fixtures::build_report;
    use crate::testing::{fixture, StaticFixtures};
    use crate::{Gameweek, TeamId};

    #[test]
    fn test_build_report_summarizes_upcoming_run() {
        let source = StaticFixtures::new(
            vec![
                fixture(1, 2, 1, 2, 2, 4),
                fixture(2, 3, 3, 1, 3, 4),
                fixture(3, 5, 1, 2, 2, 4),
                fixture(4, 5, 3, 1, 3, 2),
            ],
            &[(1, "ARS"), (2, "CHE"), (3, "LIV")],
        );

        let report = build_report(&source, TeamId::new(1), 3, false, Gameweek::new(1));

        assert_eq!(report.fixtures.len(), 3);
        assert_eq!(report.fixtures[0].opponent, "CHE (H)");
        assert_eq!(report.fixtures[1].opponent, "LIV (A)");
        assert_eq!(report.blanks[0], Gameweek::new(4));
        assert!(!report.blanks.contains(&Gameweek::new(5)));
        assert_eq!(report.doubles.len(), 1);
        assert_eq!(report.doubles[0].gameweek, Gameweek::new(5));
    }
}

#[cfg(test)]
mod list_tests {
    use crate::commands::lists::edit_list;
    use crate::lists::{ListKind, PlayerList};
    use crate::PlayerId;

    #[test]
    fn test_edit_list_add_then_remove() {
        let mut list = PlayerList::in_memory(ListKind::Wishlist);

        edit_list(&mut list, Some(PlayerId::new(7)), None);
        edit_list(&mut list, Some(PlayerId::new(9)), None);
        assert_eq!(list.len(), 2);

        edit_list(&mut list, None, Some(PlayerId::new(7)));
        assert!(!list.contains(PlayerId::new(7)));
        assert!(list.contains(PlayerId::new(9)));
    }
}
