use clap::Parser;

/// Terminal table for Scumbags & Warlords.
#[derive(Debug, Parser)]
#[command(name = "warlords", version, about = "Scumbags & Warlords card game")]
pub struct Cli {
    /// Number of players at the table (2-52).
    pub num_players: usize,

    /// Comma-separated 0-based seats controlled by human input.
    #[arg(long, value_delimiter = ',', default_value = "0")]
    pub humans: Vec<usize>,

    /// Run every seat on the automated strategy (overrides --humans).
    #[arg(long)]
    pub all_cpu: bool,

    /// Seed the shuffle and tactic sampling for a reproducible game.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Pause between turns, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub delay_ms: u64,

    /// Print a JSON summary line when the game ends.
    #[arg(long)]
    pub summary_json: bool,
}

impl Cli {
    pub fn human_seats(&self) -> Vec<usize> {
        if self.all_cpu {
            Vec::new()
        } else {
            self.humans.clone()
        }
    }
}
