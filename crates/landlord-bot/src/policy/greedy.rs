use super::{PlayDecision, Policy, PolicyContext};
use crate::candidates;
use landlord_core::pattern::{self, Pattern};
use tracing::{Level, event};

/// Call landlord when at least this many cards are queen-or-better.
const CALL_HIGH_CARD_MIN: usize = 3;
/// Queen, king, ace, two and the jokers all sit at or above this value.
const CALL_VALUE_FLOOR: u8 = 12;

/// The reference heuristic: never overplays more than needed, leads with
/// the cheapest shape it holds, and bids on raw high-card density. Simple
/// by intent; stronger policies can sit behind the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyPolicy {
    fn choose_call(&mut self, ctx: &PolicyContext) -> bool {
        let high_cards = ctx
            .hand
            .iter()
            .filter(|card| card.value() >= CALL_VALUE_FLOOR)
            .count();
        let calls = high_cards >= CALL_HIGH_CARD_MIN;
        log_call_decision(ctx, high_cards, calls);
        calls
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> PlayDecision {
        let candidates = candidates::enumerate(ctx.hand);
        let candidate_count = candidates.len();

        let chosen = match ctx.standing {
            // Greedy minimal overplay: the weakest candidate that beats.
            Some(standing) => candidates
                .into_iter()
                .filter(|candidate| pattern::beats(candidate, standing))
                .min_by_key(|candidate| candidate.value),
            // Leading: cheapest shape first, smallest rank within a shape.
            None => candidates
                .into_iter()
                .min_by_key(|candidate| (candidate.kind, candidate.value)),
        };

        match chosen {
            Some(play) => {
                log_play_decision(ctx, candidate_count, Some(&play));
                PlayDecision::Play(play.cards)
            }
            None => {
                log_play_decision(ctx, candidate_count, None);
                PlayDecision::Pass
            }
        }
    }
}

fn log_call_decision(ctx: &PolicyContext, high_cards: usize, calls: bool) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }
    event!(
        target: "landlord_bot::call",
        Level::INFO,
        seat = %ctx.seat,
        hand_size = ctx.hand.len(),
        high_cards,
        calls,
    );
}

fn log_play_decision(ctx: &PolicyContext, candidate_count: usize, play: Option<&Pattern>) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }
    let chosen = play
        .map(|play| {
            play.cards
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_else(|| "pass".to_string());
    event!(
        target: "landlord_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        hand_size = ctx.hand.len(),
        answering = ctx.standing.is_some(),
        candidate_count,
        chosen = %chosen,
    );
}
