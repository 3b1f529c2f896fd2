use crate::model::hand::Hand;
use crate::model::seat::Seat;

/// Who drives a seat. The decision logic for `Bot` seats lives entirely
/// outside the core; the engine only needs the tag to know when to hand
/// out a scheduled bot-turn task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub hand: Hand,
    pub is_landlord: bool,
    pub seat: Seat,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind, seat: Seat) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Hand::new(),
            is_landlord: false,
            seat,
        }
    }

    pub fn human(name: impl Into<String>, seat: Seat) -> Self {
        Self::new(name, PlayerKind::Human, seat)
    }

    pub fn bot(name: impl Into<String>, seat: Seat) -> Self {
        Self::new(name, PlayerKind::Bot, seat)
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, PlayerKind::Bot)
    }
}
