use core::fmt;
use serde::{Deserialize, Serialize};

/// The three table positions. Turn order always advances South → East →
/// West and wraps; seat order never changes within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    South = 0,
    East = 1,
    West = 2,
}

impl Seat {
    pub const LOOP: [Seat; 3] = [Seat::South, Seat::East, Seat::West];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::South),
            1 => Some(Seat::East),
            2 => Some(Seat::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        match self {
            Seat::South => Seat::East,
            Seat::East => Seat::West,
            Seat::West => Seat::South,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::South => "South",
            Seat::East => "East",
            Seat::West => "West",
        };
        f.write_str(label)
    }
}
