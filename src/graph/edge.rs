use std::fmt;

pub type Weight = u64;

/// Value the network files and the matrix dump use for "no edge".
pub const NO_EDGE: i64 = -1;

/// One cell of the adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Weighted(Weight),
    Absent,
}

impl Edge {
    /// Negative values, the `-1` sentinel included, mean no edge.
    pub fn from_signed(value: i64) -> Self {
        if value < 0 {
            Edge::Absent
        } else {
            Edge::Weighted(value as Weight)
        }
    }

    pub fn weight(self) -> Option<Weight> {
        match self {
            Edge::Weighted(weight) => Some(weight),
            Edge::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Edge::Absent)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Weighted(weight) => write!(f, "{weight}"),
            Edge::Absent => write!(f, "{NO_EDGE}"),
        }
    }
}
