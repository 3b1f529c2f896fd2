use landlord_cli::config::RunConfig;
use landlord_cli::runner::Runner;
use landlord_core::model::seat::Seat;

fn config(rounds: usize, seed: u64) -> RunConfig {
    RunConfig {
        rounds,
        seed,
        turn_seconds: 30,
        bot_delay_ticks: 1,
        telemetry_path: None,
    }
}

#[test]
fn seeded_rounds_run_to_completion() {
    let mut runner = Runner::new(&config(3, 4242));
    let summary = runner.run().expect("all rounds complete");

    assert_eq!(summary.rounds, 3);
    assert_eq!(summary.wins.iter().sum::<usize>(), 3);
    assert!(summary.landlord_wins <= 3);
    assert_eq!(runner.engine().round_number(), 3);
}

#[test]
fn identical_seeds_produce_identical_outcomes() {
    let outcome_a = Runner::new(&config(1, 77)).play_round().unwrap();
    let outcome_b = Runner::new(&config(1, 77)).play_round().unwrap();
    assert_eq!(outcome_a, outcome_b);
}

#[test]
fn the_winning_seat_finishes_with_an_empty_hand() {
    let mut runner = Runner::new(&config(1, 9));
    let outcome = runner.play_round().unwrap();

    assert!(runner.engine().hand(outcome.winner).is_empty());
    let remaining: usize = Seat::LOOP
        .iter()
        .map(|seat| runner.engine().hand(*seat).len())
        .sum();
    assert!(remaining < 54, "cards actually left the table");
}
