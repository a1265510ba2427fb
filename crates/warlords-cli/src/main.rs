mod cli;
mod logging;
mod session;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init();
    session::run(&cli)
}
