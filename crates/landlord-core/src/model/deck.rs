use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Full 54-card Dou Dizhu deck: 13 ranks in 4 suits plus both jokers.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(54);
        let mut id = 0u8;
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::SUITED.iter().copied() {
                cards.push(Card::new(id, rank, suit));
                id += 1;
            }
        }
        cards.push(Card::new(id, Rank::BlackJoker, Suit::Joker));
        cards.push(Card::new(id + 1, Rank::RedJoker, Suit::Joker));
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
