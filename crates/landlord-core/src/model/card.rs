use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// One physical card. `id` is unique per dealt instance (0..=53) so that
/// play intents can reference exact cards rather than rank/suit lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u8,
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(id: u8, rank: Rank, suit: Suit) -> Self {
        Self { id, rank, suit }
    }

    /// Strict total-order value used everywhere gameplay compares cards.
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    pub const fn is_joker(self) -> bool {
        self.rank.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            write!(f, "{}", self.rank)
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn value_follows_rank() {
        let card = Card::new(0, Rank::Two, Suit::Spades);
        assert_eq!(card.value(), 15);
    }

    #[test]
    fn jokers_display_without_suit() {
        let card = Card::new(53, Rank::RedJoker, Suit::Joker);
        assert!(card.is_joker());
        assert_eq!(card.to_string(), "RJ");
    }

    #[test]
    fn suited_card_displays_rank_then_suit() {
        let card = Card::new(9, Rank::Queen, Suit::Hearts);
        assert_eq!(card.to_string(), "QH");
    }
}
