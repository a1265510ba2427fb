use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use warlords_bot::{MoveChooser, Strategy, TurnView};
use warlords_core::game::engine::{GameState, TurnOutcome};
use warlords_core::game::moves::{Move, MoveMenu};
use warlords_core::model::deck::Deck;

struct NoHuman;

impl MoveChooser for NoHuman {
    fn choose(&mut self, _view: &TurnView<'_>) -> Move {
        unreachable!("automated strategies never defer to an external chooser")
    }
}

/// Four automated seats over a fixed deal: the game must terminate with a
/// winner, every selected move must be accepted by the engine unmodified,
/// and the 52 dealt cards must stay partitioned across hands throughout.
#[test]
fn automated_game_terminates_and_conserves_cards() {
    let mut game = GameState::new(Deck::standard(), 4).unwrap();
    let strategies: Vec<Strategy> = (0..4).map(|_| Strategy::automated()).collect();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut chooser = NoHuman;
    let mut played = 0usize;
    let mut turns = 0u32;

    let winner = loop {
        turns += 1;
        assert!(turns < 10_000, "game failed to terminate");

        let start = game.begin_turn().expect("a legal move always exists");
        let seat = start.seat;
        let mv = {
            let menu = MoveMenu::build(game.hand(seat), start.moves.clone());
            let view = TurnView {
                seat,
                hand: game.hand(seat),
                table: &start.table,
                menu,
            };
            strategies[seat].select_move(&view, &mut rng, &mut chooser)
        };
        played += mv.count();
        let outcome = game.play(mv).expect("tactics only emit legal moves");

        let mut seen = HashSet::new();
        let mut held = 0usize;
        for player in game.players() {
            for card in player.hand().iter() {
                assert!(seen.insert(*card), "{card} appears in two hands");
            }
            held += player.hand().len();
        }
        assert_eq!(held + played, 52);

        if let TurnOutcome::Won { seat } = outcome {
            break seat;
        }
    };

    assert!(game.hand(winner).is_empty());
    assert_eq!(game.winner(), Some(winner));
}

/// Same seed, same deal, same tactic sampling: identical games.
#[test]
fn seeded_automated_games_replay_identically() {
    let run = |seed: u64| -> (usize, u32) {
        let mut game = GameState::new(Deck::shuffled_with_seed(11), 4).unwrap();
        let strategies: Vec<Strategy> = (0..4).map(|_| Strategy::automated()).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut chooser = NoHuman;
        let mut turns = 0u32;
        loop {
            turns += 1;
            assert!(turns < 10_000);
            let start = game.begin_turn().unwrap();
            let seat = start.seat;
            let mv = {
                let menu = MoveMenu::build(game.hand(seat), start.moves.clone());
                let view = TurnView {
                    seat,
                    hand: game.hand(seat),
                    table: &start.table,
                    menu,
                };
                strategies[seat].select_move(&view, &mut rng, &mut chooser)
            };
            if let TurnOutcome::Won { seat } = game.play(mv).unwrap() {
                return (seat, turns);
            }
        }
    };

    assert_eq!(run(5), run(5));
}
