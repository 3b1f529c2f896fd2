use crate::game::engine::Phase;
use crate::model::card::Card;
use crate::model::seat::Seat;

/// Notifications the engine emits for the presentation layer. The engine
/// knows nothing about rendering; it queues these and the collaborator
/// drains them after every intent or tick.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Phase label plus human-readable status text.
    StatusChanged { phase: Phase, message: String },
    /// A player's hand contents changed (count and/or composition).
    HandsChanged { seat: Seat },
    /// The three hidden cards, revealed once a landlord is assigned.
    HiddenCardsRevealed { cards: Vec<Card> },
    /// Countdown display update, once per time unit.
    TimerTick { seconds_left: u8 },
    /// Round completion with outcome.
    RoundEnded { winner: Seat, winner_is_human: bool },
}
