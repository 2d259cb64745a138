use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::index_vec::Idx;

/// Index of a vertex, i.e. a row (or column) of the adjacency matrix.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Every spanning tree is grown from this vertex.
    pub const ROOT: VertexId = VertexId(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Idx for VertexId {
    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_usize(idx: usize) -> Self {
        Self(idx as u32)
    }
}
