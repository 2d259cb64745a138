use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;

use crate::graph::interop::to_petgraph;
use crate::graph::{Graph, Idx, VertexId};
use crate::mst::tree::{SpanningTree, TreeEdge};
use crate::mst::{EngineKind, MstError, SpanningTreeEngine};

/// petgraph's Kruskal implementation. Edges come out in acceptance order,
/// so only the total is comparable with the Prim engines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl SpanningTreeEngine for Kruskal {
    fn kind(&self) -> EngineKind {
        EngineKind::Kruskal
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let n = graph.vertex_count();
        let pg = to_petgraph(graph);
        let mut tree = SpanningTree::new(n);

        for element in min_spanning_tree(&pg) {
            if let Element::Edge {
                source,
                target,
                weight,
                ..
            } = element
            {
                tree.push(TreeEdge {
                    from: VertexId::from_usize(source),
                    to: VertexId::from_usize(target),
                    weight,
                })?;
            }
        }

        // min_spanning_tree yields a spanning forest on disconnected input
        if !tree.is_complete() {
            return Err(MstError::DisconnectedGraph {
                placed: tree.len(),
                needed: n - 1,
            });
        }
        Ok(tree)
    }
}
