mod greedy;

pub use greedy::GreedyPolicy;

use landlord_core::model::card::Card;
use landlord_core::model::hand::Hand;
use landlord_core::model::seat::Seat;
use landlord_core::pattern::Pattern;

/// Context handed to a policy for one decision. `standing` is the pattern
/// the seat must beat, or `None` when the table is clear and the seat leads.
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub standing: Option<&'a Pattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayDecision {
    Pass,
    Play(Vec<Card>),
}

/// Unified interface for seat-driving policies. The engine never calls
/// these directly; the driver runs the policy for scheduled bot turns and
/// feeds the decision back through the engine's intent entry points.
pub trait Policy: Send {
    /// Decide whether to call landlord during the bidding phase.
    fn choose_call(&mut self, ctx: &PolicyContext) -> bool;

    /// Decide what to put on the table, or pass.
    fn choose_play(&mut self, ctx: &PolicyContext) -> PlayDecision;
}
