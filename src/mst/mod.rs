//! Minimum spanning tree engines.
//!
//! All engines grow or assemble a tree over a validated [`Graph`] and fail
//! with [`MstError::DisconnectedGraph`] when no spanning tree exists.
//!
//! [`CutScan`] is the reference: Prim's algorithm rooted at vertex 0 that,
//! for each of the `n - 1` steps, scans every visited/unvisited pair and takes
//! the strictly lightest edge, first found on ties (visited vertex ascending,
//! then unvisited vertex ascending). [`Frontier`] keeps the crossing edges in
//! a binary heap ordered by `(weight, from, to)` and therefore accepts the
//! very same edges in the same order. [`Kruskal`] delegates to petgraph and
//! only agrees with the others on the total.

pub mod frontier;
pub mod kruskal;
pub mod scan;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Graph, Weight};

pub use frontier::Frontier;
pub use kruskal::Kruskal;
pub use scan::CutScan;
pub use tree::{SpanningTree, TreeEdge};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MstError {
    #[error(
        "the network is disconnected: only {placed} of the {needed} spanning tree edges could be placed"
    )]
    DisconnectedGraph { placed: usize, needed: usize },
    #[error("the spanning tree weight does not fit in a 64-bit total after {placed} edges")]
    WeightOverflow { placed: usize },
}

pub trait SpanningTreeEngine {
    fn kind(&self) -> EngineKind;

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// [`MstError::DisconnectedGraph`] if some vertex cannot be reached,
    /// [`MstError::WeightOverflow`] if the tree weight exceeds [`Weight`].
    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError>;
}

/// Total weight of the minimum spanning tree, computed by the reference scan.
pub fn mst_weight(graph: &Graph) -> Result<Weight, MstError> {
    CutScan
        .spanning_tree(graph)
        .map(|tree| tree.total_weight())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Scan,
    Frontier,
    Kruskal,
}

impl EngineKind {
    pub const NAMES: [&'static str; 3] = ["scan", "frontier", "kruskal"];

    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Scan => "scan",
            EngineKind::Frontier => "frontier",
            EngineKind::Kruskal => "kruskal",
        }
    }

    pub fn engine(self) -> &'static dyn SpanningTreeEngine {
        match self {
            EngineKind::Scan => &CutScan,
            EngineKind::Frontier => &Frontier,
            EngineKind::Kruskal => &Kruskal,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown engine {0:?}, expected one of scan, frontier, kruskal")]
pub struct UnknownEngine(pub String);

impl FromStr for EngineKind {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(EngineKind::Scan),
            "frontier" => Ok(EngineKind::Frontier),
            "kruskal" => Ok(EngineKind::Kruskal),
            other => Err(UnknownEngine(other.to_string())),
        }
    }
}
