//! Edge adjacency of the frame
//!
//! The frame is a rhombic dodecahedron: every edge joins a 3-valent vertex to
//! a 4-valent one. In wiring order even edges run from a 3-valent vertex to a
//! 4-valent one and odd edges the other way round, so the direction of travel
//! and the parity of the edge tell which kind of vertex a particle reaches.
//!
//! - At a 4-valent vertex the particle keeps going straight through onto the
//!   opposite edge ([`Junction::PassThrough`]).
//! - At a 3-valent vertex it has two genuine choices ([`Junction::Branch`]).

use crate::topology::{EDGE_COUNT, first_led, last_led};

/// Direction of travel along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards higher LED indices
    #[default]
    Forward,
    /// Towards lower LED indices
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// Continuation options at the vertex ahead of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    /// Straight through a 4-valent vertex
    PassThrough(u8),
    /// Two-way choice at a 3-valent vertex
    Branch(u8, u8),
}

impl Junction {
    /// Number of edges to choose from
    pub const fn arity(self) -> u32 {
        match self {
            Self::PassThrough(_) => 1,
            Self::Branch(_, _) => 2,
        }
    }

    /// Edge for the given choice, `choice` is taken modulo [`Self::arity`]
    pub const fn edge(self, choice: u32) -> usize {
        match self {
            Self::PassThrough(next) => next as usize,
            Self::Branch(first, second) => {
                if choice % 2 == 0 {
                    first as usize
                } else {
                    second as usize
                }
            }
        }
    }

    /// Check if the edge is reachable through this junction
    pub const fn contains(self, edge: usize) -> bool {
        match self {
            Self::PassThrough(next) => next as usize == edge,
            Self::Branch(first, second) => first as usize == edge || second as usize == edge,
        }
    }
}

use Junction::{Branch as B, PassThrough as P};

/// Junction ahead of a particle travelling forward, indexed by edge
pub const FORWARD: [Junction; EDGE_COUNT] = [
    P(12),
    B(2, 17),
    P(20),
    B(0, 4),
    P(10),
    B(19, 20),
    P(18),
    B(8, 23),
    P(14),
    B(6, 10),
    P(4),
    B(13, 14),
    P(0),
    B(11, 14),
    P(8),
    B(12, 16),
    P(22),
    B(1, 2),
    P(6),
    B(5, 20),
    P(2),
    B(18, 22),
    P(16),
    B(7, 8),
];

/// Junction ahead of a particle travelling backward, indexed by edge
pub const BACKWARD: [Junction; EDGE_COUNT] = [
    B(3, 4),
    P(13),
    B(1, 17),
    P(21),
    B(0, 3),
    P(11),
    B(9, 10),
    P(19),
    B(7, 23),
    P(15),
    B(6, 9),
    P(5),
    B(15, 16),
    P(1),
    B(11, 13),
    P(9),
    B(12, 15),
    P(23),
    B(21, 22),
    P(7),
    B(5, 19),
    P(3),
    B(18, 21),
    P(17),
];

/// Parity bit of an edge
///
/// `true` for even edges, which point away from a 3-valent vertex and
/// towards a 4-valent one.
#[inline]
pub const fn parity(edge: usize) -> bool {
    edge % 2 == 0
}

/// Junction a particle meets when it runs off the end of `edge`
pub const fn junction(edge: usize, direction: Direction) -> Junction {
    match direction {
        Direction::Forward => FORWARD[edge],
        Direction::Backward => BACKWARD[edge],
    }
}

/// Direction of travel after crossing from `from` onto `to`
///
/// Two edges with the same parity bit both point at the shared vertex (or
/// both away from it), so entering the second one reverses the index
/// direction. Edges of differing parity continue the same way.
pub const fn crossing_direction(from: usize, to: usize, direction: Direction) -> Direction {
    if parity(from) == parity(to) {
        direction.flipped()
    } else {
        direction
    }
}

/// LED a particle lands on when it enters `edge` travelling `direction`
pub const fn entry_led(edge: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => first_led(edge),
        Direction::Backward => last_led(edge),
    }
}
