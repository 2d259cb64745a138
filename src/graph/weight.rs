use thiserror::Error;

use crate::graph::edge::Weight;
use crate::graph::matrix::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the network weight does not fit in a 64-bit total")]
pub struct WeightOverflow;

/// Sum of all edge weights, each undirected edge counted once.
pub fn total_weight(graph: &Graph) -> Result<Weight, WeightOverflow> {
    graph
        .edges()
        .try_fold(0, |total: Weight, (_, _, weight)| {
            total.checked_add(weight).ok_or(WeightOverflow)
        })
}

/// Number of undirected edges present in the graph.
pub fn edge_count(graph: &Graph) -> usize {
    graph.edges().count()
}
