//! Matching game integration tests.
//!
//! These drive full rounds through the public API, including a scripted
//! walkthrough over a known layout and a solver that plays shuffled
//! grids to completion.

use recall_games::{
    GameError, MatchingGame, RoundId, RoundLifecycle, SelectOutcome, Symbol,
};

/// Play a game to completion by pairing cells off the known grid.
///
/// Returns how many selections reported `complete: true`.
fn solve(game: &mut MatchingGame) -> usize {
    let cells: Vec<Symbol> = game.cells().to_vec();
    let mut completions = 0;

    for first in 0..cells.len() {
        if game.revealed()[first] {
            continue;
        }
        let partner = (first + 1..cells.len())
            .find(|&i| cells[i] == cells[first] && !game.revealed()[i])
            .expect("every symbol appears exactly twice");

        assert_eq!(
            game.select_cell(first).unwrap(),
            SelectOutcome::Revealed {
                index: first,
                symbol: cells[first]
            }
        );
        match game.select_cell(partner).unwrap() {
            SelectOutcome::Matched {
                first: a,
                second: b,
                complete,
            } => {
                assert_eq!((a, b), (first, partner));
                if complete {
                    completions += 1;
                }
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    completions
}

#[test]
fn test_spec_walkthrough_on_known_layout() {
    let cells = vec![
        Symbol::new(1),
        Symbol::new(2),
        Symbol::new(1),
        Symbol::new(2),
    ];
    let mut game = MatchingGame::from_layout(2, 2, cells).unwrap();

    assert_eq!(
        game.select_cell(0).unwrap(),
        SelectOutcome::Revealed {
            index: 0,
            symbol: Symbol::new(1)
        }
    );
    assert_eq!(
        game.select_cell(1).unwrap(),
        SelectOutcome::Mismatched {
            first: 0,
            second: 1,
            generation: RoundId::new(1)
        }
    );
    assert_eq!(
        game.select_cell(0).unwrap(),
        SelectOutcome::Revealed {
            index: 0,
            symbol: Symbol::new(1)
        }
    );
    assert_eq!(
        game.select_cell(2).unwrap(),
        SelectOutcome::Matched {
            first: 0,
            second: 2,
            complete: false
        }
    );
    assert_eq!(
        game.select_cell(1).unwrap(),
        SelectOutcome::Revealed {
            index: 1,
            symbol: Symbol::new(2)
        }
    );
    assert_eq!(
        game.select_cell(3).unwrap(),
        SelectOutcome::Matched {
            first: 1,
            second: 3,
            complete: true
        }
    );
    assert!(game.is_complete());
}

#[test]
fn test_shuffled_game_plays_to_completion() {
    let mut game = MatchingGame::new(4, 4, 42).unwrap();

    let completions = solve(&mut game);

    assert_eq!(completions, 1);
    assert!(game.is_complete());
    assert!(!game.is_active());
    assert!(game.revealed().iter().all(|&r| r));
}

#[test]
fn test_matched_cells_survive_later_mismatches() {
    let cells = vec![
        Symbol::new(1),
        Symbol::new(1),
        Symbol::new(2),
        Symbol::new(3),
        Symbol::new(2),
        Symbol::new(3),
    ];
    let mut game = MatchingGame::from_layout(2, 3, cells).unwrap();

    // Match the first pair.
    game.select_cell(0).unwrap();
    game.select_cell(1).unwrap();
    assert!(game.revealed()[0] && game.revealed()[1]);

    // A later mismatch must not touch them.
    game.select_cell(2).unwrap();
    assert_eq!(
        game.select_cell(3).unwrap(),
        SelectOutcome::Mismatched {
            first: 2,
            second: 3,
            generation: RoundId::new(1)
        }
    );
    assert!(game.revealed()[0] && game.revealed()[1]);
    assert!(!game.revealed()[2] && !game.revealed()[3]);
}

#[test]
fn test_selections_after_completion_are_informational() {
    let mut game = MatchingGame::new(2, 2, 7).unwrap();
    solve(&mut game);

    for index in 0..game.cell_count() {
        assert_eq!(
            game.select_cell(index).unwrap(),
            SelectOutcome::AlreadyRevealed { index }
        );
    }
}

#[test]
fn test_reset_invalidates_previous_round() {
    let mut game = MatchingGame::new(2, 2, 11).unwrap();
    let first_generation = game.generation();

    // Leave a mismatch "in flight", as if its hide timer were pending.
    let cells: Vec<Symbol> = game.cells().to_vec();
    let other = (1..cells.len()).find(|&i| cells[i] != cells[0]).unwrap();
    game.select_cell(0).unwrap();
    let outcome = game.select_cell(other).unwrap();

    game.reset();

    // The stale callback's generation no longer matches the game's, so
    // the caller drops it.
    match outcome {
        SelectOutcome::Mismatched { generation, .. } => {
            assert_eq!(generation, first_generation);
            assert!(game.generation() > generation);
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }

    assert!(game.revealed().iter().all(|&r| !r));
    assert_eq!(game.pending(), None);

    // The fresh round is fully playable.
    assert_eq!(solve(&mut game), 1);
}

#[test]
fn test_dimension_and_index_errors() {
    assert_eq!(
        MatchingGame::new(1, 1, 0).unwrap_err(),
        GameError::InvalidGridDimensions { rows: 1, cols: 1 }
    );

    let mut game = MatchingGame::new(2, 2, 0).unwrap();
    assert_eq!(
        game.select_cell(99).unwrap_err(),
        GameError::CellOutOfRange {
            index: 99,
            cell_count: 4
        }
    );
}
