//! Per-player occupancy graph and win detection.

use super::board::Coord;
use std::collections::HashSet;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{instrument, trace};

/// One of the four undirected axes a run can lie along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum LineFamily {
    /// Up and down.
    Vertical,
    /// Left and right.
    Horizontal,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Bottom-left to top-right (`/`).
    AntiDiagonal,
}

impl LineFamily {
    /// The two opposite unit steps `(d_row, d_col)` that walk this axis.
    pub fn directions(self) -> [(isize, isize); 2] {
        match self {
            LineFamily::Vertical => [(-1, 0), (1, 0)],
            LineFamily::Horizontal => [(0, -1), (0, 1)],
            LineFamily::Diagonal => [(-1, -1), (1, 1)],
            LineFamily::AntiDiagonal => [(-1, 1), (1, -1)],
        }
    }
}

/// The set of coordinates one player occupies.
///
/// Kept in lockstep with the board by [`Game`](super::Game): a coordinate is
/// added in the same critical section that fills the board cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerGraph {
    coins: HashSet<Coord>,
}

impl PlayerGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a set of occupied coordinates.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            coins: coords.into_iter().collect(),
        }
    }

    /// Marks a coordinate as occupied.
    pub fn add(&mut self, coord: Coord) {
        self.coins.insert(coord);
    }

    /// Returns true if the coordinate is occupied.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coins.contains(&coord)
    }

    /// Number of occupied coordinates.
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Returns true if nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Returns true if a straight run of at least `required` occupied
    /// coordinates passes through `origin`.
    ///
    /// Each line family is walked outward in both directions from the
    /// origin. Coordinates traversed are recorded per family for the
    /// duration of this call only.
    #[instrument(skip(self), fields(occupied = self.coins.len()))]
    pub fn find_consecutive(&self, origin: Coord, required: usize) -> bool {
        let mut seen: HashSet<(Coord, LineFamily)> = HashSet::new();

        for family in LineFamily::iter() {
            if seen.contains(&(origin, family)) {
                continue;
            }

            let [forward, backward] = family.directions();
            let run = 1
                + self.walk(origin, family, forward, &mut seen)
                + self.walk(origin, family, backward, &mut seen);

            trace!(%family, run, "Measured run");
            if run >= required {
                return true;
            }
        }

        false
    }

    /// Counts occupied coordinates stepping away from `origin` along one
    /// direction, stopping at the first gap.
    fn walk(
        &self,
        origin: Coord,
        family: LineFamily,
        (d_row, d_col): (isize, isize),
        seen: &mut HashSet<(Coord, LineFamily)>,
    ) -> usize {
        seen.insert((origin, family));

        let mut steps = 0;
        let mut current = origin;
        while let Some(next) = current.step(d_row, d_col) {
            if !self.contains(next) || !seen.insert((next, family)) {
                break;
            }
            steps += 1;
            current = next;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(coords: &[(usize, usize)]) -> PlayerGraph {
        PlayerGraph::from_coords(coords.iter().map(|&(r, c)| Coord::new(r, c)))
    }

    #[test]
    fn test_anti_diagonal_run() {
        // a _ _ a
        // _ _ a _
        // _ a a _
        // a _ _ _
        let g = graph(&[(0, 0), (0, 3), (1, 2), (2, 1), (2, 2), (3, 0)]);
        for (r, c) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            assert!(g.find_consecutive(Coord::new(r, c), 4));
        }
        assert!(g.find_consecutive(Coord::new(0, 3), 3));
        assert!(!g.find_consecutive(Coord::new(0, 3), 5));
    }

    #[test]
    fn test_horizontal_run() {
        // a _ _ a
        // _ _ a _
        // _ _ a _
        // a a a a
        let g = graph(&[(0, 0), (0, 3), (1, 2), (2, 2), (3, 0), (3, 1), (3, 2), (3, 3)]);
        for c in 0..4 {
            assert!(g.find_consecutive(Coord::new(3, c), 4));
        }
        assert!(g.find_consecutive(Coord::new(3, 3), 3));
        assert!(!g.find_consecutive(Coord::new(3, 2), 5));
    }

    #[test]
    fn test_diagonal_run() {
        // a _ _ a
        // _ a a _
        // _ _ a _
        // a a _ a
        let g = graph(&[(0, 0), (0, 3), (1, 1), (1, 2), (2, 2), (3, 0), (3, 1), (3, 3)]);
        for i in 0..4 {
            assert!(g.find_consecutive(Coord::new(i, i), 4));
        }
        assert!(g.find_consecutive(Coord::new(0, 0), 3));
        assert!(!g.find_consecutive(Coord::new(0, 0), 5));
    }

    #[test]
    fn test_vertical_run() {
        // a _ _ a
        // _ _ a a
        // _ _ a a
        // a _ _ a
        let g = graph(&[(0, 0), (0, 3), (1, 2), (1, 3), (2, 2), (2, 3), (3, 0), (3, 3)]);
        for r in 0..4 {
            assert!(g.find_consecutive(Coord::new(r, 3), 4));
        }
        assert!(g.find_consecutive(Coord::new(0, 3), 3));
        assert!(!g.find_consecutive(Coord::new(0, 0), 5));
    }

    #[test]
    fn test_gap_breaks_run() {
        let g = graph(&[(3, 0), (3, 1), (3, 3), (3, 4)]);
        assert!(!g.find_consecutive(Coord::new(3, 1), 3));
        assert!(g.find_consecutive(Coord::new(3, 1), 2));
    }

    #[test]
    fn test_single_coin_satisfies_length_one() {
        let g = graph(&[(2, 2)]);
        assert!(g.find_consecutive(Coord::new(2, 2), 1));
        assert!(!g.find_consecutive(Coord::new(2, 2), 2));
    }

    #[test]
    fn test_walk_from_edge_does_not_underflow() {
        let g = graph(&[(0, 0), (1, 1), (2, 2)]);
        assert!(g.find_consecutive(Coord::new(0, 0), 3));
        assert!(!g.find_consecutive(Coord::new(0, 0), 4));
    }
}
