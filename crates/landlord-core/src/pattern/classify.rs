use super::{BOMB_SCALE, Pattern, PatternKind, ROCKET_VALUE};
use crate::model::card::Card;
use crate::model::rank::Rank;

/// Classify a duplicate-free card set into a pattern. Rules are checked in
/// priority order and the first match wins; the order matters because some
/// sizes overlap (a four-card set could be a bomb or a triple-with-single).
/// Input order is irrelevant: the cards are sorted into a copy first.
pub fn classify(cards: &[Card]) -> Pattern {
    if cards.is_empty() {
        return Pattern::null();
    }

    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| card.value());
    let counts = value_counts(&sorted);
    let max_count = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);

    if sorted.len() == 2 && sorted.iter().all(|card| card.is_joker()) {
        return pattern(PatternKind::Rocket, ROCKET_VALUE, sorted);
    }

    if sorted.len() == 4 && max_count == 4 {
        let value = sorted[0].value() * BOMB_SCALE;
        return pattern(PatternKind::Bomb, value, sorted);
    }

    match sorted.len() {
        1 => {
            let value = sorted[0].value();
            return pattern(PatternKind::Single, value, sorted);
        }
        2 if max_count == 2 => {
            let value = sorted[0].value();
            return pattern(PatternKind::Pair, value, sorted);
        }
        3 if max_count == 3 => {
            let value = sorted[0].value();
            return pattern(PatternKind::Triple, value, sorted);
        }
        4 if max_count == 3 => {
            let value = tripled_value(&counts);
            return pattern(PatternKind::TripleWithSingle, value, sorted);
        }
        5 if max_count == 3 && counts.len() == 2 => {
            let value = tripled_value(&counts);
            return pattern(PatternKind::TripleWithPair, value, sorted);
        }
        _ => {}
    }

    if sorted.len() >= 5 && max_count == 1 && is_run(&counts) && tops_at_ace(&counts) {
        let value = sorted[sorted.len() - 1].value();
        return pattern(PatternKind::Straight, value, sorted);
    }

    if sorted.len() >= 6
        && sorted.len() % 2 == 0
        && counts.len() >= 3
        && counts.iter().all(|&(_, count)| count == 2)
        && is_run(&counts)
    {
        let value = sorted[sorted.len() - 1].value();
        return pattern(PatternKind::DoubleStraight, value, sorted);
    }

    pattern(PatternKind::Error, 0, sorted)
}

fn pattern(kind: PatternKind, value: u8, cards: Vec<Card>) -> Pattern {
    Pattern { kind, value, cards }
}

/// Per-value occurrence counts, ascending by value. Input must be sorted.
fn value_counts(sorted: &[Card]) -> Vec<(u8, u8)> {
    let mut counts: Vec<(u8, u8)> = Vec::new();
    for card in sorted {
        match counts.last_mut() {
            Some((value, count)) if *value == card.value() => *count += 1,
            _ => counts.push((card.value(), 1)),
        }
    }
    counts
}

/// Contiguous ascending values, one step per entry.
fn is_run(counts: &[(u8, u8)]) -> bool {
    counts
        .windows(2)
        .all(|window| window[1].0 == window[0].0 + 1)
}

/// Straights stop at the Ace: the Two and the jokers never join one.
/// Pair runs have no such ceiling, so a pair of Twos may cap one; the
/// jokers cannot pair at all.
fn tops_at_ace(counts: &[(u8, u8)]) -> bool {
    !counts.last().is_some_and(|&(value, _)| value > Rank::Ace.value())
}

fn tripled_value(counts: &[(u8, u8)]) -> u8 {
    counts
        .iter()
        .find(|&&(_, count)| count == 3)
        .map(|&(value, _)| value)
        .unwrap_or(0)
}
