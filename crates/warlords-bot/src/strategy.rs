use crate::tactic::{MoveChooser, Tactic, TurnView};
use rand::Rng;
use rand::seq::SliceRandom;
use warlords_core::game::moves::Move;

/// A weighted mix of tactics. One tactic is sampled with replacement per
/// turn, which gives automated opponents bounded unpredictability without
/// touching the legality contract.
#[derive(Debug, Clone)]
pub struct Strategy {
    tactics: Vec<(Tactic, u32)>,
}

impl Strategy {
    pub fn new(tactics: Vec<(Tactic, u32)>) -> Self {
        assert!(!tactics.is_empty(), "a strategy needs at least one tactic");
        assert!(
            tactics.iter().any(|(_, weight)| *weight > 0),
            "a strategy needs a positive weight"
        );
        Self { tactics }
    }

    /// A single human-controlled seat.
    pub fn human() -> Self {
        Self::new(vec![(Tactic::ExternalChoice, 1)])
    }

    /// The stock automated opponent.
    pub fn automated() -> Self {
        Self::new(vec![(Tactic::BalanceHolding, 2), (Tactic::FirstLegal, 1)])
    }

    pub fn choose_tactic<R: Rng + ?Sized>(&self, rng: &mut R) -> Tactic {
        self.tactics
            .choose_weighted(rng, |(_, weight)| *weight)
            .map(|(tactic, _)| *tactic)
            .expect("strategy holds at least one positively weighted tactic")
    }

    pub fn select_move<R: Rng + ?Sized>(
        &self,
        view: &TurnView<'_>,
        rng: &mut R,
        chooser: &mut dyn MoveChooser,
    ) -> Move {
        let tactic = self.choose_tactic(rng);
        tracing::debug!(seat = view.seat, ?tactic, "tactic chosen");
        tactic.select_move(view, chooser)
    }
}

#[cfg(test)]
mod tests {
    use super::Strategy;
    use crate::tactic::Tactic;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn human_strategy_always_defers() {
        let strategy = Strategy::human();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..32 {
            assert_eq!(strategy.choose_tactic(&mut rng), Tactic::ExternalChoice);
        }
    }

    #[test]
    fn automated_strategy_mixes_its_tactics() {
        let strategy = Strategy::automated();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut balance = 0usize;
        let mut first = 0usize;
        for _ in 0..300 {
            match strategy.choose_tactic(&mut rng) {
                Tactic::BalanceHolding => balance += 1,
                Tactic::FirstLegal => first += 1,
                Tactic::ExternalChoice => panic!("automated strategy deferred externally"),
            }
        }
        // Weighted 2:1, both must show up over a long sample.
        assert!(balance > first);
        assert!(first > 0);
    }

    #[test]
    #[should_panic(expected = "at least one tactic")]
    fn empty_strategy_is_refused() {
        let _ = Strategy::new(Vec::new());
    }
}
