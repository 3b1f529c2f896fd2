use std::path::PathBuf;

use clap::Parser;

use landlord_cli::config::RunConfig;
use landlord_cli::logging::init_logging;
use landlord_cli::runner::Runner;
use landlord_core::model::seat::Seat;

/// Headless Dou Dizhu driver: three greedy bots play seeded rounds.
#[derive(Debug, Parser)]
#[command(
    name = "landlord-cli",
    author,
    version,
    about = "Headless Dou Dizhu round driver"
)]
struct Cli {
    /// Number of rounds to play.
    #[arg(long, value_name = "ROUNDS", default_value_t = 1)]
    rounds: usize,

    /// RNG seed for the deal sequence; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Turn countdown length in time units.
    #[arg(long, value_name = "UNITS", default_value_t = 30)]
    turn_seconds: u8,

    /// Cosmetic delay before bot turns, in ticks.
    #[arg(long, value_name = "TICKS", default_value_t = 1)]
    bot_delay: u8,

    /// Write decision telemetry as JSON lines to this file.
    #[arg(long, value_name = "FILE")]
    telemetry: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let config = RunConfig {
        rounds: cli.rounds,
        seed,
        turn_seconds: cli.turn_seconds,
        bot_delay_ticks: cli.bot_delay,
        telemetry_path: cli.telemetry,
    };
    config.validate()?;

    let _logging_guard = init_logging(config.telemetry_path.as_deref())?;

    println!("Playing {} round(s) with seed {seed}", config.rounds);
    let mut runner = Runner::new(&config);
    let summary = runner.run()?;

    for seat in Seat::LOOP {
        println!("{seat}: {} win(s)", summary.wins[seat.index()]);
    }
    println!(
        "Landlord won {} of {} round(s)",
        summary.landlord_wins, summary.rounds
    );
    Ok(())
}
