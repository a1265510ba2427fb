use warlords_core::game::moves::{Move, MoveMenu};
use warlords_core::model::card::Card;
use warlords_core::model::hand::Hand;
use warlords_core::model::rank::Rank;

/// Ranks at or below this count as "low" for the holding heuristic.
const MIDPOINT: Rank = Rank::Nine;

/// Everything a tactic may consult when choosing a move for one turn.
pub struct TurnView<'a> {
    pub seat: usize,
    pub hand: &'a Hand,
    pub table: &'a [Card],
    pub menu: MoveMenu,
}

/// Blocking seam to an external move selector: the terminal prompter for a
/// human seat, a script in tests. Automated tactics never call it.
pub trait MoveChooser {
    fn choose(&mut self, view: &TurnView<'_>) -> Move;
}

/// The closed set of move-selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    /// Defer entirely to an external chooser (human seats).
    ExternalChoice,
    /// Play the first legal move on offer; pass only when nothing else is.
    /// Deliberately the weakest heuristic — it leans on generator order.
    FirstLegal,
    /// Like FirstLegal, but withhold high cards while the hand is low-heavy.
    BalanceHolding,
}

impl Tactic {
    pub fn select_move(self, view: &TurnView<'_>, chooser: &mut dyn MoveChooser) -> Move {
        match self {
            Tactic::ExternalChoice => chooser.choose(view),
            Tactic::FirstLegal => first_legal(view),
            Tactic::BalanceHolding => balance_holding(view),
        }
    }
}

fn fallback_pass(view: &TurnView<'_>) -> Move {
    view.menu
        .pass()
        .cloned()
        .unwrap_or_else(|| Move::pass(view.table.to_vec()))
}

fn first_legal(view: &TurnView<'_>) -> Move {
    view.menu
        .non_pass()
        .next()
        .cloned()
        .unwrap_or_else(|| fallback_pass(view))
}

/// Keeps the hand balanced between low and high cards: while at least half
/// the hand sits at or below the midpoint, moves that would spend a high
/// rank are skipped. The first skipped move is remembered as an override so
/// an opening turn is never surrendered — in particular the forced opening
/// move always dominates the heuristic.
fn balance_holding(view: &TurnView<'_>) -> Move {
    let low_cards = view.hand.iter().filter(|c| c.rank <= MIDPOINT).count();
    let hold = low_cards >= view.hand.len() / 2;
    tracing::debug!(seat = view.seat, low_cards, hold, "balance check");

    let mut hold_override: Option<&Move> = None;
    for mv in view.menu.non_pass() {
        let Some(rank) = mv.cardinality() else {
            continue;
        };
        if !hold || rank <= MIDPOINT {
            return mv.clone();
        }
        if hold_override.is_none() {
            hold_override = Some(mv);
        }
    }

    if view.table.is_empty() {
        if let Some(mv) = hold_override {
            tracing::debug!(seat = view.seat, play = %mv, "hold override");
            return mv.clone();
        }
    }

    fallback_pass(view)
}
