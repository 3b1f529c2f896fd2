use landlord_core::model::card::Card;
use landlord_core::model::hand::Hand;
use landlord_core::pattern::{Pattern, PatternKind, classify};

/// Enumerate every candidate play the reference heuristic considers:
/// singletons, same-rank pairs, exact triples, each triple crossed with
/// every spare card as a kicker, four-of-a-kind bombs, and the rocket.
/// Straights and double-straights are deliberately not generated even
/// though classification supports them; the heuristic never plays runs.
pub fn enumerate(hand: &Hand) -> Vec<Pattern> {
    let cards = hand.cards();
    let mut plays = Vec::new();

    for &card in cards {
        plays.push(classify(&[card]));
    }

    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            if cards[i].rank == cards[j].rank {
                plays.push(classify(&[cards[i], cards[j]]));
            }
        }
    }

    let groups = rank_groups(cards);
    for group in groups.iter().filter(|group| group.len() == 3) {
        plays.push(classify(group));
        for &card in cards {
            if !group.iter().any(|member| member.id == card.id) {
                let mut with_kicker = group.clone();
                with_kicker.push(card);
                plays.push(classify(&with_kicker));
            }
        }
    }

    for group in groups.iter().filter(|group| group.len() == 4) {
        plays.push(classify(group));
    }

    let jokers: Vec<Card> = cards.iter().copied().filter(|card| card.is_joker()).collect();
    if jokers.len() == 2 {
        plays.push(classify(&jokers));
    }

    plays.retain(|play| play.kind != PatternKind::Error);
    plays
}

/// Group a sorted card slice into runs of equal rank.
fn rank_groups(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &card in cards {
        match groups.last_mut() {
            Some(group) if group[0].rank == card.rank => group.push(card),
            _ => groups.push(vec![card]),
        }
    }
    groups
}
