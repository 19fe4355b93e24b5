//! Property-based tests for the grid invariants.

use points_core::{Round, ScoreGrid, Side};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Point(usize, Side, String),
    Extra(usize, Side, String),
    AddRound,
    RemoveRound,
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Team1), Just(Side::Team2)]
}

fn entry_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..=11).prop_map(|v| v.to_string()),
        (12u32..1000).prop_map(|v| v.to_string()),
        Just(String::new()),
        "[a-z-]{1,4}",
    ]
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..12, side(), entry_text()).prop_map(|(i, s, t)| Edit::Point(i, s, t)),
        (0usize..12, side(), entry_text()).prop_map(|(i, s, t)| Edit::Extra(i, s, t)),
        Just(Edit::AddRound),
        Just(Edit::RemoveRound),
    ]
}

fn apply(grid: &mut ScoreGrid, edit: &Edit) {
    match edit {
        Edit::Point(i, side, text) => {
            let _ = grid.set_point(*i, *side, text);
        }
        Edit::Extra(i, side, text) => {
            let _ = grid.set_extra(*i, *side, text);
        }
        Edit::AddRound => grid.add_round(),
        Edit::RemoveRound => {
            grid.remove_last_round();
        }
    }
}

fn expected_total(grid: &ScoreGrid, side: Side) -> u64 {
    grid.iter()
        .map(|round| u64::from(round.points(side)) + u64::from(round.extra(side)))
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A valid entry sets the complement on the other side.
    #[test]
    fn prop_valid_point_sets_complement(index in 0usize..8, side in side(), value in 0u32..=11) {
        let mut grid = ScoreGrid::new();
        grid.set_point(index, side, &value.to_string()).unwrap();

        let round = grid.round(index).unwrap();
        prop_assert_eq!(round.points(side), value);
        prop_assert_eq!(round.points(side.opponent()), 11 - value);
    }

    /// Entries above 11 or non-numeric text zero both point fields.
    #[test]
    fn prop_invalid_point_zeroes_both(
        index in 0usize..8,
        side in side(),
        text in prop_oneof![(12u32..100_000).prop_map(|v| v.to_string()), "[a-z ]{0,5}"],
    ) {
        let mut grid = ScoreGrid::new();
        grid.set_point(index, side.opponent(), "3").unwrap();
        grid.set_point(index, side, &text).unwrap();

        let round = grid.round(index).unwrap();
        prop_assert_eq!(round.team1_points(), 0);
        prop_assert_eq!(round.team2_points(), 0);
    }

    /// Totals always match a direct sum, and the grid never drops below six rounds.
    #[test]
    fn prop_totals_track_edits(edits in prop::collection::vec(edit(), 0..60)) {
        let mut grid = ScoreGrid::new();
        for edit in &edits {
            apply(&mut grid, edit);
            prop_assert!(grid.len() >= 6);
        }

        let model = grid.model();
        prop_assert_eq!(model.team1_total(), expected_total(&grid, Side::Team1));
        prop_assert_eq!(model.team2_total(), expected_total(&grid, Side::Team2));
    }

    /// Clearing zeroes both totals and keeps the length.
    #[test]
    fn prop_clear_keeps_length(edits in prop::collection::vec(edit(), 0..40)) {
        let mut grid = ScoreGrid::new();
        for edit in &edits {
            apply(&mut grid, edit);
        }
        let len = grid.len();

        grid.clear();
        prop_assert_eq!(grid.len(), len);
        prop_assert_eq!(grid.model().team1_total(), 0);
        prop_assert_eq!(grid.model().team2_total(), 0);
    }

    /// Encoding then decoding reproduces every round field for field.
    #[test]
    fn prop_encoding_restores_grid(rounds in prop::collection::vec(any::<[u32; 4]>(), 6..40)) {
        let grid = ScoreGrid::from_rounds(rounds.into_iter().map(Round::from).collect());
        let restored = ScoreGrid::from_encoding(&grid.encode().unwrap()).unwrap();
        prop_assert_eq!(restored, grid);
    }
}
