use super::{Pattern, PatternKind};

/// Does `candidate` legally supersede `standing`?
///
/// Pure decision function; the engine queries it fresh on every play
/// because the standing pattern changes whenever a play is accepted.
pub fn beats(candidate: &Pattern, standing: &Pattern) -> bool {
    if !candidate.is_playable() {
        return false;
    }

    // A clear table is beaten by any playable candidate.
    if standing.kind == PatternKind::Null {
        return true;
    }

    // Standing rocket first: nothing beats it, a second rocket included
    // (only one rocket exists per deck, so that case never arises in play).
    if standing.kind == PatternKind::Rocket {
        return false;
    }
    if candidate.kind == PatternKind::Rocket {
        return true;
    }

    let candidate_bomb = candidate.kind == PatternKind::Bomb;
    let standing_bomb = standing.kind == PatternKind::Bomb;
    if candidate_bomb != standing_bomb {
        return candidate_bomb;
    }
    if candidate_bomb {
        return candidate.value > standing.value;
    }

    // Everything else compares only within the same kind and card count.
    candidate.kind == standing.kind
        && candidate.cards.len() == standing.cards.len()
        && candidate.value > standing.value
}
