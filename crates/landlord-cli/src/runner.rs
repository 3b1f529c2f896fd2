use anyhow::{Context, Result, bail};
use landlord_bot::policy::{GreedyPolicy, PlayDecision, Policy, PolicyContext};
use landlord_core::game::engine::{EngineConfig, GameEngine, Phase};
use landlord_core::game::events::EngineEvent;
use landlord_core::game::schedule::{ScheduledTask, TaskAction};
use landlord_core::model::player::PlayerKind;
use landlord_core::model::seat::Seat;
use tracing::{debug, info};

use crate::config::RunConfig;

/// Hard ceiling on driver steps per round. A legal round finishes in far
/// fewer; hitting this means the engine and policies stopped converging.
const MAX_STEPS_PER_ROUND: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: Seat,
    pub landlord: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds: usize,
    pub wins: [usize; 3],
    pub landlord_wins: usize,
}

/// Headless driver: the reference collaborator for the engine. It drains
/// events, executes scheduled bot turns through the greedy policy, and
/// advances the countdown when nothing is pending.
pub struct Runner {
    engine: GameEngine,
    policies: [GreedyPolicy; 3],
    rounds: usize,
}

impl Runner {
    pub fn new(config: &RunConfig) -> Self {
        let engine_config = EngineConfig {
            turn_seconds: config.turn_seconds,
            bot_delay_ticks: config.bot_delay_ticks,
        };
        let engine =
            GameEngine::with_seed_kinds(engine_config, config.seed, [PlayerKind::Bot; 3]);
        Self {
            engine,
            policies: [GreedyPolicy::new(); 3],
            rounds: config.rounds,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            rounds: 0,
            wins: [0; 3],
            landlord_wins: 0,
        };
        for _ in 0..self.rounds {
            let outcome = self.play_round()?;
            summary.rounds += 1;
            summary.wins[outcome.winner.index()] += 1;
            if outcome.winner == outcome.landlord {
                summary.landlord_wins += 1;
            }
        }
        Ok(summary)
    }

    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        self.engine
            .request_start_round()
            .context("starting a round")?;

        let mut winner = None;
        for _ in 0..MAX_STEPS_PER_ROUND {
            for event in self.engine.drain_events() {
                log_event(&event);
                if let EngineEvent::RoundEnded { winner: seat, .. } = event {
                    winner = Some(seat);
                }
            }
            if self.engine.phase() == Phase::Ended {
                break;
            }
            match self.engine.take_scheduled_task() {
                Some(task) if self.engine.is_task_current(&task) => self.run_task(task)?,
                Some(_) => {} // stale task from a superseded turn
                None => self.engine.tick(),
            }
        }

        let winner = match winner {
            Some(winner) => winner,
            None => bail!("round did not terminate within {MAX_STEPS_PER_ROUND} steps"),
        };
        let landlord = match self.engine.landlord() {
            Some(landlord) => landlord,
            None => bail!("round ended without a landlord"),
        };
        Ok(RoundOutcome { winner, landlord })
    }

    fn run_task(&mut self, task: ScheduledTask) -> Result<()> {
        let TaskAction::BotTurn(seat) = task.action;
        match self.engine.phase() {
            Phase::Calling => {
                let calls = {
                    let ctx = PolicyContext {
                        seat,
                        hand: self.engine.hand(seat),
                        standing: None,
                    };
                    self.policies[seat.index()].choose_call(&ctx)
                };
                if calls {
                    self.engine.request_call_landlord(seat)?;
                } else {
                    self.engine.request_pass_call(seat)?;
                }
            }
            Phase::Playing => {
                let decision = {
                    let standing = self.engine.standing().map(|play| &play.pattern);
                    let ctx = PolicyContext {
                        seat,
                        hand: self.engine.hand(seat),
                        standing,
                    };
                    self.policies[seat.index()].choose_play(&ctx)
                };
                match decision {
                    PlayDecision::Pass => self.engine.request_pass_play(seat)?,
                    PlayDecision::Play(cards) => {
                        let ids: Vec<u8> = cards.iter().map(|card| card.id).collect();
                        self.engine.request_play_cards(seat, &ids)?;
                    }
                }
            }
            Phase::Waiting | Phase::Ended => {}
        }
        Ok(())
    }
}

fn log_event(event: &EngineEvent) {
    match event {
        EngineEvent::StatusChanged { phase, message } => {
            info!(target: "landlord_cli::round", phase = %phase, "{message}");
        }
        EngineEvent::HandsChanged { seat } => {
            debug!(target: "landlord_cli::round", seat = %seat, "hand changed");
        }
        EngineEvent::HiddenCardsRevealed { cards } => {
            let cards = cards
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<_>>()
                .join(",");
            info!(target: "landlord_cli::round", %cards, "hidden cards revealed");
        }
        EngineEvent::TimerTick { seconds_left } => {
            debug!(target: "landlord_cli::round", seconds_left, "timer tick");
        }
        EngineEvent::RoundEnded { winner, .. } => {
            info!(target: "landlord_cli::round", winner = %winner, "round ended");
        }
    }
}
