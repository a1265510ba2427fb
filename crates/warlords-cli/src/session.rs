use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use warlords_bot::{MoveChooser, Strategy, TurnView};
use warlords_core::game::engine::{EngineError, GameState, TurnOutcome};
use warlords_core::game::moves::{Move, MoveMenu};
use warlords_core::model::card::{Card, CardParseError};
use warlords_core::model::deck::Deck;

use crate::cli::Cli;

const DIVIDER: &str = "--------------------------------------------------";

#[derive(Debug, Serialize)]
struct GameSummary {
    winner_seat: usize,
    turns: u32,
    hands: Vec<Vec<Card>>,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let deck = match cli.seed {
        Some(seed) => Deck::shuffled_with_seed(seed),
        None => Deck::shuffled(&mut rand::thread_rng()),
    };
    tracing::debug!(seed = ?cli.seed, "deck prepared");

    let mut game = GameState::new(deck, cli.num_players).context("setting up the table")?;

    let humans: HashSet<usize> = cli.human_seats().into_iter().collect();
    for &seat in &humans {
        if seat >= cli.num_players {
            bail!(
                "human seat {seat} is out of range for {} players",
                cli.num_players
            );
        }
    }
    let strategies: Vec<Strategy> = (0..cli.num_players)
        .map(|seat| {
            if humans.contains(&seat) {
                Strategy::human()
            } else {
                Strategy::automated()
            }
        })
        .collect();

    println!("Cards dealt.");
    for player in game.players() {
        println!("{player}");
    }
    println!("{DIVIDER}");

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut prompter = StdinPrompter;
    let mut turns: u32 = 0;

    let winner = loop {
        if cli.delay_ms > 0 {
            thread::sleep(Duration::from_millis(cli.delay_ms));
        }
        turns += 1;

        let start = game.begin_turn().context("advancing the turn")?;
        let seat = start.seat;
        let is_human = humans.contains(&seat);

        let (outcome, played) = loop {
            let mv = {
                let menu = MoveMenu::build(game.hand(seat), start.moves.clone());
                let view = TurnView {
                    seat,
                    hand: game.hand(seat),
                    table: &start.table,
                    menu,
                };
                strategies[seat].select_move(&view, &mut rng, &mut prompter)
            };
            let played = mv.clone();
            match game.play(mv) {
                Ok(outcome) => break (outcome, played),
                Err(err @ (EngineError::IllegalMove(_) | EngineError::CardNotInHand { .. }))
                    if is_human =>
                {
                    // Recoverable at the boundary: ask the human again.
                    println!("Rejected: {err}");
                }
                Err(err) => bail!("turn aborted for seat {seat}: {err}"),
            }
        };

        println!("{} plays: {played}", game.players()[seat]);

        if let TurnOutcome::Won { seat } = outcome {
            break seat;
        }
        if game.active_seat() == 0 {
            println!("{DIVIDER}");
        }
    };

    println!("{} won!", game.players()[winner]);
    println!("{DIVIDER}");
    println!("Final hands:");
    for player in game.players() {
        let cards: Vec<String> = player.hand().iter().map(Card::to_string).collect();
        println!("{player}: {}", cards.join(" "));
    }

    if cli.summary_json {
        let summary = GameSummary {
            winner_seat: winner,
            turns,
            hands: game
                .players()
                .iter()
                .map(|p| p.hand().cards().to_vec())
                .collect(),
        };
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}

/// Blocking stdin prompter for human seats. Accepts a menu index, the word
/// `pass`, or freshly typed card tokens (which the engine re-validates).
struct StdinPrompter;

impl MoveChooser for StdinPrompter {
    fn choose(&mut self, view: &TurnView<'_>) -> Move {
        let menu = &view.menu;
        if menu.len() == 1 {
            if let Some(only) = menu.get(0) {
                return only.clone();
            }
        }

        loop {
            println!("Your turn.");
            let hand: Vec<String> = view.hand.iter().map(Card::to_string).collect();
            println!("Hand: {}", hand.join(" "));
            if !view.table.is_empty() {
                let table: Vec<String> = view.table.iter().map(Card::to_string).collect();
                println!("Table: {}", table.join(" "));
            }
            println!("Available moves:");
            for (index, mv) in menu.iter().enumerate() {
                if menu.first_partial_index() == Some(index) {
                    println!("  ---");
                }
                println!("  ({index}) {mv}");
            }
            print!("Play which move? ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    // Input closed under us: fall back to the safest offer.
                    return menu
                        .pass()
                        .or_else(|| menu.get(0))
                        .cloned()
                        .expect("menu is never empty");
                }
                Ok(_) => {}
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("pass") {
                match menu.pass() {
                    Some(pass) => return pass.clone(),
                    None => {
                        println!("Passing is not allowed on the opening move.");
                        continue;
                    }
                }
            }
            if let Ok(index) = input.parse::<usize>() {
                match menu.get(index) {
                    Some(mv) => return mv.clone(),
                    None => {
                        println!("No move numbered {index}.");
                        continue;
                    }
                }
            }
            match parse_card_tokens(input) {
                Ok(cards) => return Move::new(cards, view.table.to_vec()),
                Err(err) => println!("Invalid input: {err}"),
            }
        }
    }
}

fn parse_card_tokens(input: &str) -> Result<Vec<Card>, CardParseError> {
    input.split_whitespace().map(str::parse).collect()
}
