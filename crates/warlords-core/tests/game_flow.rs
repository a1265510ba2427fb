use std::collections::HashSet;

use warlords_core::game::engine::{GameState, TurnOutcome};
use warlords_core::game::moves::Move;
use warlords_core::model::deck::Deck;

/// Drives a full four-player game over a fixed (unshuffled) deck, always
/// playing the first non-pass move on offer. Checks that the dealt cards
/// stay partitioned across hands at every turn and that the game ends with
/// the winner's hand empty.
#[test]
fn fixed_deck_game_runs_to_a_winner() {
    let mut game = GameState::new(Deck::standard(), 4).unwrap();
    let mut played = 0usize;
    let mut turns = 0u32;

    let winner = loop {
        turns += 1;
        assert!(turns < 10_000, "game failed to terminate");

        let start = game.begin_turn().expect("a legal move always exists");
        let mv = start
            .moves
            .iter()
            .find(|m| !m.is_pass())
            .or_else(|| start.moves.first())
            .cloned()
            .expect("move list is never empty");
        played += mv.count();

        let outcome = game.play(mv).expect("offered moves are accepted");

        let mut seen = HashSet::new();
        let mut held = 0usize;
        for player in game.players() {
            for card in player.hand().iter() {
                assert!(seen.insert(*card), "{card} appears in two hands");
            }
            held += player.hand().len();
        }
        assert_eq!(held + played, 52, "cards were lost or duplicated");

        if let TurnOutcome::Won { seat } = outcome {
            break seat;
        }
    };

    assert!(game.hand(winner).is_empty());
    assert_eq!(game.winner(), Some(winner));
    for (seat, player) in game.players().iter().enumerate() {
        if seat != winner {
            assert!(!player.hand().is_empty());
        }
    }
}

/// Replaying the same seed deals identical games.
#[test]
fn seeded_deals_are_reproducible() {
    let a = GameState::new(Deck::shuffled_with_seed(21), 5).unwrap();
    let b = GameState::new(Deck::shuffled_with_seed(21), 5).unwrap();
    assert_eq!(a.active_seat(), b.active_seat());
    for seat in 0..5 {
        assert_eq!(a.hand(seat).cards(), b.hand(seat).cards());
    }
}

/// The generator offered through `begin_turn` never hands out a move the
/// engine would then reject.
#[test]
fn every_offered_move_is_accepted() {
    let mut game = GameState::new(Deck::shuffled_with_seed(3), 4).unwrap();
    let start = game.begin_turn().unwrap();
    for mv in &start.moves {
        let mut probe = game.clone();
        probe.play(mv.clone()).expect("offered move rejected");
    }
    // And a pass fabricated for the opening seat is still refused.
    let pass = Move::pass(start.table.clone());
    assert!(game.play(pass).is_err());
}
