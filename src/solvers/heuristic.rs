use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::maze::Position;

/// Distance estimate used by A* and greedy best-first search.
///
/// On a 4-connected grid every variant is admissible. A diagonal move costs
/// one step like any other, so with diagonal moves only Chebyshev is exact on
/// an open grid and the rest overestimate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
        Heuristic::Octile,
    ];

    /// Estimated cost from `from` to `to`.
    pub fn estimate(self, from: Position, to: Position) -> f64 {
        let dr = f64::from(from.row.abs_diff(to.row));
        let dc = f64::from(from.col.abs_diff(to.col));
        match self {
            Heuristic::Manhattan => dr + dc,
            Heuristic::Euclidean => dr.hypot(dc),
            Heuristic::Chebyshev => dr.max(dc),
            Heuristic::Octile => dr.max(dc) + (std::f64::consts::SQRT_2 - 1.0) * dr.min(dc),
        }
    }

    /// Whether the estimate never exceeds the true step cost under the given
    /// movement rule.
    pub fn is_admissible(self, diagonal: bool) -> bool {
        !diagonal || self == Heuristic::Chebyshev
    }

    fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == needle)
            .ok_or_else(|| MazeError::UnknownName {
                kind: "heuristic",
                name: s.to_string(),
                expected: Heuristic::ALL.map(Heuristic::name).join(", "),
            })
    }
}
