//! Bolt tests - stack behavior through the public API

use screw_sort::core::{Board, BoardSnapshot};
use screw_sort::types::BOLT_CAPACITY;

fn board_with(colors: &[u8]) -> Board {
    Board::load(&BoardSnapshot::from_colors(&[(1, colors)])).unwrap()
}

#[test]
fn test_top_is_most_recently_placed() {
    let board = board_with(&[1, 2, 3]);
    let bolt = board.bolt(1).unwrap();

    assert_eq!(bolt.len(), 3);
    assert_eq!(bolt.top().map(|s| s.color), Some(3));
    assert_eq!(bolt.slots_available(), BOLT_CAPACITY - 3);
}

#[test]
fn test_capacity_invariant_holds_after_load() {
    let board = board_with(&[1, 1, 1, 1, 1]);
    let bolt = board.bolt(1).unwrap();

    assert!(bolt.is_full());
    assert_eq!(bolt.slots_available(), 0);
    assert!(bolt.len() <= BOLT_CAPACITY);
}

#[test]
fn test_run_is_measured_from_the_top() {
    // Top-to-bottom colors are 1,1,2,1: the run of color 1 has length 2.
    let board = board_with(&[1, 2, 1, 1]);
    assert_eq!(board.bolt(1).unwrap().top_run_len(), 2);

    // A uniform stack's run is its whole length.
    let board = board_with(&[4, 4, 4]);
    assert_eq!(board.bolt(1).unwrap().top_run_len(), 3);

    // Empty bolt has no run.
    let board = board_with(&[]);
    assert_eq!(board.bolt(1).unwrap().top_run_len(), 0);
}

#[test]
fn test_complete_is_cosmetic_not_lock() {
    // 3 uniform screws: complete (milestone) but not full, so not locked.
    let board = board_with(&[2, 2, 2]);
    let bolt = board.bolt(1).unwrap();
    assert!(bolt.is_complete());
    assert!(!bolt.is_full());

    // 5 mixed screws: full but neither complete nor uniform.
    let board = board_with(&[1, 1, 1, 1, 2]);
    let bolt = board.bolt(1).unwrap();
    assert!(bolt.is_full());
    assert!(!bolt.is_complete());
    assert!(!bolt.is_uniform());
}
