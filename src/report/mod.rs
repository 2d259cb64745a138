//! Cost reduction of a network once it is cut down to a minimum spanning tree.
pub mod io;

use std::fmt;
use std::time::{Duration, Instant};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{Graph, Weight, WeightOverflow, edge_count, total_weight};
use crate::mst::{EngineKind, MstError, SpanningTree, TreeEdge};

pub use io::{ReportError, ReportFormat};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReductionError {
    #[error(transparent)]
    Mst(#[from] MstError),
    #[error(transparent)]
    Weight(#[from] WeightOverflow),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    pub vertices: usize,
    pub edges: usize,
    /// Sum of every edge in the original network.
    pub total_weight: Weight,
    /// Sum of the minimum spanning tree, the cost of the reduced network.
    pub mst_weight: Weight,
    /// `total_weight - mst_weight`.
    pub savings: Weight,
    pub engine: EngineKind,
    pub elapsed: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<Vec<TreeEdge>>,
}

impl Reduction {
    /// Runs the selected engine over `graph` and measures the savings.
    ///
    /// The spanning tree is returned alongside the report so callers can
    /// render it further.
    pub fn compute(
        graph: &Graph,
        engine: EngineKind,
    ) -> Result<(Self, SpanningTree), ReductionError> {
        let start_time = Instant::now();
        let tree = engine.engine().spanning_tree(graph)?;
        let elapsed = start_time.elapsed();
        info!(
            "{} engine finished in {:?}, tree weight {}",
            engine,
            elapsed,
            tree.total_weight()
        );

        let reduction = Self::from_parts(graph, &tree, engine, elapsed)?;
        Ok((reduction, tree))
    }

    pub fn from_parts(
        graph: &Graph,
        tree: &SpanningTree,
        engine: EngineKind,
        elapsed: Duration,
    ) -> Result<Self, WeightOverflow> {
        let total = total_weight(graph)?;
        let mst = tree.total_weight();
        // Only reachable when an asymmetric matrix slipped past non-strict
        // validation and the tree used lower-triangle weights.
        let savings = total.checked_sub(mst).unwrap_or_else(|| {
            warn!("tree weight {mst} exceeds network weight {total}; is the matrix symmetric?");
            0
        });
        Ok(Self {
            vertices: graph.vertex_count(),
            edges: edge_count(graph),
            total_weight: total,
            mst_weight: mst,
            savings,
            engine,
            elapsed,
            tree: None,
        })
    }

    /// Keeps the accepted edges so they are printed and serialized.
    pub fn with_trace(mut self, tree: &SpanningTree) -> Self {
        self.tree = Some(tree.edges().to_vec());
        self
    }

    pub fn new_cost(&self) -> Weight {
        self.mst_weight
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total matrix weight: {}", self.total_weight)?;
        writeln!(f, "New network cost: {}", self.new_cost())?;
        writeln!(f, "Total savings: {}", self.savings)?;
        writeln!(f, "Computation time: {}ms", self.elapsed.as_millis())?;

        if let Some(edges) = &self.tree {
            writeln!(f, "\nSpanning tree ({} engine, {} edges):", self.engine, edges.len())?;
            for edge in edges {
                writeln!(f, "  {} -> {} ({})", edge.from, edge.to, edge.weight)?;
            }
        }
        Ok(())
    }
}
