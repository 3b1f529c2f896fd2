use crate::game::events::EngineEvent;
use crate::game::schedule::{ScheduledTask, TaskAction};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::{Player, PlayerKind};
use crate::model::seat::Seat;
use crate::pattern::{self, Pattern};
use core::fmt;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const CARDS_PER_HAND: usize = 17;
const HIDDEN_CARDS: usize = 3;
/// Bidding always opens at seat 0; a silent lap back to it forces a landlord.
const BIDDING_LEAD: Seat = Seat::South;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Countdown length per turn, in time units fed through `tick`.
    pub turn_seconds: u8,
    /// Cosmetic delay before a scheduled bot turn should run.
    pub bot_delay_ticks: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_seconds: 30,
            bot_delay_ticks: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Calling,
    Playing,
    Ended,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Waiting => "waiting",
            Phase::Calling => "calling",
            Phase::Playing => "playing",
            Phase::Ended => "ended",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recent accepted play and who made it. Cleared whenever a full
/// lap passes without a new accepted play.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingPlay {
    pub pattern: Pattern,
    pub owner: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    PhaseMismatch { actual: Phase },
    OutOfTurn { expected: Seat, actual: Seat },
    CardNotInHand(u8),
    InvalidPattern,
    IllegalOverplay,
    SelfPassViolation,
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentError::PhaseMismatch { actual } => {
                write!(f, "intent is not valid during the {actual} phase")
            }
            IntentError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to act next but got {actual}")
            }
            IntentError::CardNotInHand(id) => {
                write!(f, "card id {id} is not in the acting player's hand")
            }
            IntentError::InvalidPattern => write!(f, "cards do not form a recognized pattern"),
            IntentError::IllegalOverplay => {
                write!(f, "pattern does not beat the standing pattern")
            }
            IntentError::SelfPassViolation => {
                write!(f, "the standing-pattern owner must play, not pass")
            }
        }
    }
}

impl std::error::Error for IntentError {}

/// Authoritative game state machine. Exactly one instance per session;
/// every transition runs to completion before the next intent is handled,
/// and the only asynchronous sources (the countdown and bot turns) are
/// reified as engine-owned data the driver executes.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [Player; 3],
    hidden: Vec<Card>,
    current: Seat,
    landlord: Option<Seat>,
    standing: Option<StandingPlay>,
    phase: Phase,
    rng: StdRng,
    seed: u64,
    round_number: u32,
    generation: u64,
    seconds_left: Option<u8>,
    pending_task: Option<ScheduledTask>,
    events: Vec<EngineEvent>,
    config: EngineConfig,
}

impl GameEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_seed_kinds(config, seed, [PlayerKind::Human, PlayerKind::Bot, PlayerKind::Bot])
    }

    pub fn with_seed_kinds(config: EngineConfig, seed: u64, kinds: [PlayerKind; 3]) -> Self {
        let players = Seat::LOOP.map(|seat| Player::new(seat.to_string(), kinds[seat.index()], seat));
        Self {
            players,
            hidden: Vec::new(),
            current: BIDDING_LEAD,
            landlord: None,
            standing: None,
            phase: Phase::Waiting,
            rng: StdRng::seed_from_u64(seed),
            seed,
            round_number: 0,
            generation: 0,
            seconds_left: None,
            pending_task: None,
            events: Vec::new(),
            config,
        }
    }

    /// Reconstruct an engine at the start of a given round of a seeded
    /// session, replaying the shuffles of the earlier rounds. Returns in
    /// the calling phase of that round.
    pub fn with_seed_round(config: EngineConfig, seed: u64, round_number: u32) -> Self {
        let normalized_round = round_number.max(1);
        let mut engine = Self::with_seed(config, seed);
        for _ in 1..normalized_round {
            let _ = Deck::shuffled(&mut engine.rng);
        }
        engine.round_number = normalized_round - 1;
        engine.begin_round();
        engine
    }

    /// Scenario constructor for tests and drivers: jump straight into the
    /// playing phase with exact hands, the hidden cards already merged.
    pub fn from_hands(
        hands: [Hand; 3],
        kinds: [PlayerKind; 3],
        landlord: Seat,
        standing: Option<StandingPlay>,
        config: EngineConfig,
    ) -> Self {
        let mut engine = Self::with_seed_kinds(config, 0, kinds);
        for (player, hand) in engine.players.iter_mut().zip(hands) {
            player.hand = hand;
        }
        engine.players[landlord.index()].is_landlord = true;
        engine.landlord = Some(landlord);
        engine.standing = standing;
        engine.phase = Phase::Playing;
        engine.current = landlord;
        engine.round_number = 1;
        engine.generation = 1;
        engine.restart_timer();
        engine.schedule_bot_turn(engine.config.bot_delay_ticks);
        engine
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn landlord(&self) -> Option<Seat> {
        self.landlord
    }

    pub fn standing(&self) -> Option<&StandingPlay> {
        self.standing.as_ref()
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.players[seat.index()].hand
    }

    /// The undealt pool between dealing and the landlord assignment;
    /// empty at all other times.
    pub fn hidden_cards(&self) -> &[Card] {
        &self.hidden
    }

    pub fn seconds_left(&self) -> Option<u8> {
        self.seconds_left
    }

    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn take_scheduled_task(&mut self) -> Option<ScheduledTask> {
        self.pending_task.take()
    }

    /// Stale-task fence: a task issued before any reset, phase entry or
    /// turn advance fails this check and must be dropped by the driver.
    pub fn is_task_current(&self, task: &ScheduledTask) -> bool {
        task.generation == self.generation
    }

    pub fn request_start_round(&mut self) -> Result<(), IntentError> {
        match self.phase {
            Phase::Waiting | Phase::Ended => {
                self.begin_round();
                Ok(())
            }
            actual => Err(IntentError::PhaseMismatch { actual }),
        }
    }

    pub fn request_call_landlord(&mut self, seat: Seat) -> Result<(), IntentError> {
        self.expect_phase(Phase::Calling)?;
        self.expect_turn(seat)?;
        self.assign_landlord(seat);
        Ok(())
    }

    pub fn request_pass_call(&mut self, seat: Seat) -> Result<(), IntentError> {
        self.expect_phase(Phase::Calling)?;
        self.expect_turn(seat)?;
        self.current = self.current.next();
        self.invalidate_tasks();
        if self.current == BIDDING_LEAD {
            // Nobody called in a full lap; pick a landlord at random so the
            // bidding phase always terminates.
            let forced = Seat::from_index(self.rng.gen_range(0..Seat::LOOP.len()))
                .expect("seat index in range");
            self.assign_landlord(forced);
        } else {
            let message = format!("{} to call", self.players[self.current.index()].name);
            self.emit_status(message);
            self.restart_timer();
            self.schedule_bot_turn(self.config.bot_delay_ticks);
        }
        Ok(())
    }

    pub fn request_play_cards(&mut self, seat: Seat, card_ids: &[u8]) -> Result<(), IntentError> {
        self.expect_phase(Phase::Playing)?;
        self.expect_turn(seat)?;

        let cards = self.players[seat.index()]
            .hand
            .select_ids(card_ids)
            .map_err(IntentError::CardNotInHand)?;
        let candidate = pattern::classify(&cards);
        if !candidate.is_playable() {
            return Err(IntentError::InvalidPattern);
        }
        if let Some(standing) = &self.standing {
            if standing.owner != seat && !pattern::beats(&candidate, &standing.pattern) {
                return Err(IntentError::IllegalOverplay);
            }
        }

        let _ = self.players[seat.index()]
            .hand
            .remove_ids(card_ids)
            .map_err(IntentError::CardNotInHand)?;
        self.push(EngineEvent::HandsChanged { seat });
        self.standing = Some(StandingPlay {
            pattern: candidate,
            owner: seat,
        });

        if self.players[seat.index()].hand.is_empty() {
            self.finish_round(seat);
        } else {
            self.advance_turn();
        }
        Ok(())
    }

    pub fn request_pass_play(&mut self, seat: Seat) -> Result<(), IntentError> {
        self.expect_phase(Phase::Playing)?;
        self.expect_turn(seat)?;
        if let Some(standing) = &self.standing {
            if standing.owner == seat {
                return Err(IntentError::SelfPassViolation);
            }
        }
        self.advance_turn();
        Ok(())
    }

    /// Advance the countdown by one time unit. Expiry auto-passes the
    /// current seat (bidding), forces a human pass, or turns a bot's
    /// pending decision into an immediate one.
    pub fn tick(&mut self) {
        let Some(seconds) = self.seconds_left else {
            return;
        };
        let seconds = seconds.saturating_sub(1);
        self.seconds_left = Some(seconds);
        self.push(EngineEvent::TimerTick {
            seconds_left: seconds,
        });
        if seconds == 0 {
            self.expire_turn();
        }
    }

    fn expire_turn(&mut self) {
        let seat = self.current;
        match self.phase {
            Phase::Calling => {
                let _ = self.request_pass_call(seat);
            }
            Phase::Playing => {
                if self.players[seat.index()].is_bot() {
                    self.schedule_bot_turn(0);
                    self.restart_timer();
                } else if self.request_pass_play(seat).is_err() {
                    // The standing-pattern owner cannot be passed out;
                    // re-arm the countdown and keep prompting.
                    self.restart_timer();
                }
            }
            Phase::Waiting | Phase::Ended => {}
        }
    }

    fn begin_round(&mut self) {
        self.invalidate_tasks();
        self.round_number += 1;
        for player in &mut self.players {
            player.hand = Hand::new();
            player.is_landlord = false;
        }
        self.hidden.clear();
        self.landlord = None;
        self.standing = None;

        let deck = Deck::shuffled(&mut self.rng);
        for (index, card) in deck.cards().iter().enumerate() {
            if index < CARDS_PER_HAND * 3 {
                let seat = Seat::from_index(index % 3).expect("seat index in range");
                self.players[seat.index()].hand.add(*card);
            } else {
                self.hidden.push(*card);
            }
        }
        debug_assert_eq!(self.hidden.len(), HIDDEN_CARDS);

        self.current = BIDDING_LEAD;
        self.phase = Phase::Calling;
        for seat in Seat::LOOP {
            self.push(EngineEvent::HandsChanged { seat });
        }
        let message = format!("{} to call", self.players[self.current.index()].name);
        self.emit_status(message);
        self.restart_timer();
        self.schedule_bot_turn(self.config.bot_delay_ticks);
    }

    fn assign_landlord(&mut self, seat: Seat) {
        self.landlord = Some(seat);
        self.players[seat.index()].is_landlord = true;
        let hidden: Vec<Card> = self.hidden.drain(..).collect();
        for card in &hidden {
            self.players[seat.index()].hand.add(*card);
        }
        self.push(EngineEvent::HiddenCardsRevealed { cards: hidden });
        self.push(EngineEvent::HandsChanged { seat });

        self.phase = Phase::Playing;
        self.standing = None;
        self.current = seat;
        self.invalidate_tasks();
        let message = format!(
            "{} takes the hidden cards and leads",
            self.players[seat.index()].name
        );
        self.emit_status(message);
        self.restart_timer();
        self.schedule_bot_turn(self.config.bot_delay_ticks);
    }

    fn advance_turn(&mut self) {
        self.current = self.current.next();
        let mut trick_cleared = false;
        if let Some(standing) = &self.standing {
            if standing.owner == self.current {
                // A full lap with no new accepted play clears the trick.
                self.standing = None;
                trick_cleared = true;
            }
        }
        self.invalidate_tasks();
        let name = &self.players[self.current.index()].name;
        let message = if trick_cleared {
            format!("{name} leads")
        } else {
            format!("{name} to play")
        };
        self.emit_status(message);
        self.restart_timer();
        self.schedule_bot_turn(self.config.bot_delay_ticks);
    }

    fn finish_round(&mut self, winner: Seat) {
        self.phase = Phase::Ended;
        self.invalidate_tasks();
        self.seconds_left = None;
        let winner_is_human = matches!(self.players[winner.index()].kind, PlayerKind::Human);
        let message = format!("{} wins the round", self.players[winner.index()].name);
        self.emit_status(message);
        self.push(EngineEvent::RoundEnded {
            winner,
            winner_is_human,
        });
    }

    fn expect_phase(&self, phase: Phase) -> Result<(), IntentError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(IntentError::PhaseMismatch { actual: self.phase })
        }
    }

    fn expect_turn(&self, seat: Seat) -> Result<(), IntentError> {
        if self.current == seat {
            Ok(())
        } else {
            Err(IntentError::OutOfTurn {
                expected: self.current,
                actual: seat,
            })
        }
    }

    fn invalidate_tasks(&mut self) {
        self.generation += 1;
        self.pending_task = None;
    }

    fn schedule_bot_turn(&mut self, delay_ticks: u8) {
        if self.players[self.current.index()].is_bot() {
            self.pending_task = Some(ScheduledTask {
                generation: self.generation,
                delay_ticks,
                action: TaskAction::BotTurn(self.current),
            });
        }
    }

    fn restart_timer(&mut self) {
        self.seconds_left = Some(self.config.turn_seconds);
        self.push(EngineEvent::TimerTick {
            seconds_left: self.config.turn_seconds,
        });
    }

    fn emit_status(&mut self, message: String) {
        self.events.push(EngineEvent::StatusChanged {
            phase: self.phase,
            message,
        });
    }

    fn push(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, GameEngine, IntentError, Phase, StandingPlay};
    use crate::game::events::EngineEvent;
    use crate::game::schedule::TaskAction;
    use crate::model::card::Card;
    use crate::model::hand::Hand;
    use crate::model::player::PlayerKind;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;
    use crate::pattern::classify;

    const HUMANS: [PlayerKind; 3] = [PlayerKind::Human; 3];

    fn card(id: u8, rank: Rank) -> Card {
        Card::new(id, rank, Suit::Spades)
    }

    fn started_engine(seed: u64) -> GameEngine {
        let mut engine = GameEngine::with_seed_kinds(EngineConfig::default(), seed, HUMANS);
        engine.request_start_round().unwrap();
        engine
    }

    fn card_total(engine: &GameEngine) -> usize {
        let in_hands: usize = Seat::LOOP.iter().map(|seat| engine.hand(*seat).len()).sum();
        in_hands + engine.hidden_cards().len()
    }

    /// Three tiny hands for scripted playing-phase scenarios; South leads.
    fn scripted_engine(standing: Option<StandingPlay>) -> GameEngine {
        let hands = [
            Hand::with_cards(vec![card(0, Rank::Five), card(1, Rank::Nine), card(2, Rank::Nine)]),
            Hand::with_cards(vec![card(3, Rank::Three), card(4, Rank::Ten)]),
            Hand::with_cards(vec![card(5, Rank::Four), card(6, Rank::Ace)]),
        ];
        GameEngine::from_hands(hands, HUMANS, Seat::South, standing, EngineConfig::default())
    }

    #[test]
    fn start_round_deals_17_each_and_3_hidden() {
        let engine = started_engine(7);
        for seat in Seat::LOOP {
            assert_eq!(engine.hand(seat).len(), 17);
        }
        assert_eq!(engine.hidden_cards().len(), 3);
        assert_eq!(card_total(&engine), 54);
        assert_eq!(engine.phase(), Phase::Calling);
        assert_eq!(engine.current_seat(), Seat::South);
        assert_eq!(engine.round_number(), 1);
    }

    #[test]
    fn start_round_is_rejected_mid_round() {
        let mut engine = started_engine(7);
        assert!(matches!(
            engine.request_start_round(),
            Err(IntentError::PhaseMismatch { actual: Phase::Calling })
        ));
    }

    #[test]
    fn calling_lands_the_hidden_cards_on_the_landlord() {
        let mut engine = started_engine(11);
        engine.drain_events();
        engine.request_call_landlord(Seat::South).unwrap();

        assert_eq!(engine.phase(), Phase::Playing);
        assert_eq!(engine.landlord(), Some(Seat::South));
        assert_eq!(engine.current_seat(), Seat::South);
        assert_eq!(engine.hand(Seat::South).len(), 20);
        assert!(engine.hidden_cards().is_empty());
        assert!(engine.player(Seat::South).is_landlord);
        assert_eq!(card_total(&engine), 54);

        let events = engine.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            EngineEvent::HiddenCardsRevealed { cards } if cards.len() == 3
        )));
    }

    #[test]
    fn out_of_turn_call_is_rejected_without_mutation() {
        let mut engine = started_engine(11);
        assert!(matches!(
            engine.request_call_landlord(Seat::West),
            Err(IntentError::OutOfTurn { expected: Seat::South, actual: Seat::West })
        ));
        assert_eq!(engine.phase(), Phase::Calling);
        assert_eq!(engine.hand(Seat::West).len(), 17);
    }

    #[test]
    fn a_silent_bidding_lap_force_assigns_a_landlord() {
        let mut engine = started_engine(13);
        engine.request_pass_call(Seat::South).unwrap();
        assert_eq!(engine.current_seat(), Seat::East);
        engine.request_pass_call(Seat::East).unwrap();
        assert_eq!(engine.current_seat(), Seat::West);
        engine.request_pass_call(Seat::West).unwrap();

        assert_eq!(engine.phase(), Phase::Playing);
        let landlord = engine.landlord().expect("a landlord was forced");
        assert_eq!(engine.current_seat(), landlord);
        assert_eq!(engine.hand(landlord).len(), 20);
    }

    #[test]
    fn play_intents_are_rejected_during_calling() {
        let mut engine = started_engine(13);
        let id = engine.hand(Seat::South).cards()[0].id;
        assert!(matches!(
            engine.request_play_cards(Seat::South, &[id]),
            Err(IntentError::PhaseMismatch { actual: Phase::Calling })
        ));
        assert!(matches!(
            engine.request_pass_play(Seat::South),
            Err(IntentError::PhaseMismatch { actual: Phase::Calling })
        ));
    }

    #[test]
    fn invalid_pattern_is_rejected_without_mutation() {
        let mut engine = scripted_engine(None);
        // 5 + 9 is no recognized shape.
        assert_eq!(
            engine.request_play_cards(Seat::South, &[0, 1]),
            Err(IntentError::InvalidPattern)
        );
        assert_eq!(engine.hand(Seat::South).len(), 3);
        assert!(engine.standing().is_none());
    }

    #[test]
    fn an_empty_play_is_an_invalid_pattern() {
        let mut engine = scripted_engine(None);
        assert_eq!(
            engine.request_play_cards(Seat::South, &[]),
            Err(IntentError::InvalidPattern)
        );
        assert!(engine.standing().is_none(), "a null pattern never stands");
        assert_eq!(engine.current_seat(), Seat::South);
        assert_eq!(engine.hand(Seat::South).len(), 3);
    }

    #[test]
    fn unowned_card_ids_are_rejected() {
        let mut engine = scripted_engine(None);
        assert_eq!(
            engine.request_play_cards(Seat::South, &[99]),
            Err(IntentError::CardNotInHand(99))
        );
    }

    #[test]
    fn overplay_must_beat_the_standing_pattern() {
        let mut engine = scripted_engine(None);
        engine.request_play_cards(Seat::South, &[1, 2]).unwrap(); // pair of nines
        assert_eq!(engine.current_seat(), Seat::East);

        // East's single ten does not answer a pair.
        assert_eq!(
            engine.request_play_cards(Seat::East, &[4]),
            Err(IntentError::IllegalOverplay)
        );
        assert_eq!(engine.hand(Seat::East).len(), 2);
    }

    #[test]
    fn a_lap_of_passes_clears_the_trick_back_to_the_owner() {
        let mut engine = scripted_engine(None);
        engine.request_play_cards(Seat::South, &[0]).unwrap(); // single five
        assert!(engine.standing().is_some());

        engine.request_pass_play(Seat::East).unwrap();
        engine.request_pass_play(Seat::West).unwrap();

        assert_eq!(engine.current_seat(), Seat::South);
        assert!(engine.standing().is_none(), "full lap clears the trick");
        // The owner now leads anything, even a weaker card.
        engine.request_play_cards(Seat::South, &[1, 2]).unwrap();
    }

    #[test]
    fn standing_owner_cannot_pass_on_their_own_lead() {
        let standing = StandingPlay {
            pattern: classify(&[card(40, Rank::Six)]),
            owner: Seat::South,
        };
        let mut engine = scripted_engine(Some(standing));
        assert_eq!(
            engine.request_pass_play(Seat::South),
            Err(IntentError::SelfPassViolation)
        );
        assert_eq!(engine.current_seat(), Seat::South);
    }

    #[test]
    fn emptying_a_hand_ends_the_round() {
        let hands = [
            Hand::with_cards(vec![card(0, Rank::Five)]),
            Hand::with_cards(vec![card(1, Rank::Three), card(2, Rank::Ten)]),
            Hand::with_cards(vec![card(3, Rank::Four), card(4, Rank::Ace)]),
        ];
        let mut engine =
            GameEngine::from_hands(hands, HUMANS, Seat::South, None, EngineConfig::default());
        engine.drain_events();

        engine.request_play_cards(Seat::South, &[0]).unwrap();
        assert_eq!(engine.phase(), Phase::Ended);
        assert_eq!(engine.seconds_left(), None, "timer stops on round end");

        let events = engine.drain_events();
        assert!(events.contains(&EngineEvent::RoundEnded {
            winner: Seat::South,
            winner_is_human: true,
        }));

        // Further play intents are phase mismatches now.
        assert!(matches!(
            engine.request_pass_play(Seat::East),
            Err(IntentError::PhaseMismatch { actual: Phase::Ended })
        ));

        // A fresh round starts cleanly from the terminal state.
        engine.request_start_round().unwrap();
        assert_eq!(engine.phase(), Phase::Calling);
        assert_eq!(engine.round_number(), 2);
        assert_eq!(card_total(&engine), 54);
    }

    #[test]
    fn ticking_counts_down_and_expiry_passes_the_call() {
        let config = EngineConfig {
            turn_seconds: 2,
            bot_delay_ticks: 1,
        };
        let mut engine = GameEngine::with_seed_kinds(config, 5, HUMANS);
        engine.request_start_round().unwrap();
        engine.drain_events();

        engine.tick();
        assert_eq!(engine.seconds_left(), Some(1));
        let events = engine.drain_events();
        assert!(events.contains(&EngineEvent::TimerTick { seconds_left: 1 }));

        engine.tick();
        // Expiry auto-passed South's call and restarted the countdown.
        assert_eq!(engine.current_seat(), Seat::East);
        assert_eq!(engine.seconds_left(), Some(2));
    }

    #[test]
    fn bot_turns_are_scheduled_and_fenced_by_generation() {
        let mut engine = GameEngine::with_seed_kinds(
            EngineConfig::default(),
            3,
            [PlayerKind::Bot, PlayerKind::Human, PlayerKind::Human],
        );
        engine.request_start_round().unwrap();

        let task = engine.take_scheduled_task().expect("bot lead is scheduled");
        assert_eq!(task.action, TaskAction::BotTurn(Seat::South));
        assert!(engine.is_task_current(&task));
        assert!(engine.take_scheduled_task().is_none(), "tasks are handed out once");

        // A reset supersedes the outstanding task.
        engine.request_start_round().unwrap_err();
        assert!(engine.is_task_current(&task));
        engine.request_pass_call(Seat::South).unwrap();
        assert!(!engine.is_task_current(&task), "turn advance staled the task");
    }

    #[test]
    fn seeded_engines_deal_identically() {
        let engine_a = started_engine(99);
        let engine_b = started_engine(99);
        for seat in Seat::LOOP {
            assert_eq!(engine_a.hand(seat).cards(), engine_b.hand(seat).cards());
        }
        assert_eq!(engine_a.hidden_cards(), engine_b.hidden_cards());
    }
}
