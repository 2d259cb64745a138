use petgraph::dot::{Config, Dot};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};

use crate::graph::interop::node;
use crate::graph::{Idx, VertexId, Weight};
use crate::mst::MstError;

/// One edge accepted into the tree, `from` already in the tree and `to`
/// joining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

/// Edges of a spanning tree in the order the engine accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    vertices: usize,
    edges: Vec<TreeEdge>,
    total: Weight,
}

impl SpanningTree {
    pub(crate) fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::with_capacity(vertices.saturating_sub(1)),
            total: 0,
        }
    }

    pub(crate) fn push(&mut self, edge: TreeEdge) -> Result<(), MstError> {
        self.total = self
            .total
            .checked_add(edge.weight)
            .ok_or(MstError::WeightOverflow {
                placed: self.edges.len(),
            })?;
        self.edges.push(edge);
        Ok(())
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Weight {
        self.total
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Spans every vertex: `n - 1` edges for `n` vertices.
    pub fn is_complete(&self) -> bool {
        self.edges.len() + 1 == self.vertices
    }

    pub fn to_petgraph(&self) -> UnGraph<VertexId, Weight> {
        let mut pg = UnGraph::with_capacity(self.vertices, self.edges.len());
        for idx in 0..self.vertices {
            pg.add_node(VertexId::from_usize(idx));
        }
        for edge in &self.edges {
            pg.add_edge(node(edge.from), node(edge.to), edge.weight);
        }
        pg
    }

    /// Graphviz rendering, vertices labelled by index and edges by weight.
    pub fn to_dot(&self) -> String {
        let pg = self.to_petgraph();
        format!(
            "graph MST {{\n{}}}\n",
            Dot::with_config(&pg, &[Config::GraphContentOnly])
        )
    }
}
