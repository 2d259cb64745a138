//! Conversions into `petgraph` so the usual graph tooling (DOT output,
//! reference algorithms) can be pointed at a network.
use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::edge::Weight;
use crate::graph::ids::VertexId;
use crate::graph::index_vec::Idx;
use crate::graph::matrix::Graph;

/// Undirected petgraph with one node per vertex; node `i` has index `i`.
pub fn to_petgraph(graph: &Graph) -> UnGraph<VertexId, Weight> {
    let mut pg = UnGraph::with_capacity(graph.vertex_count(), graph.vertex_count());
    for vertex in graph.vertices() {
        pg.add_node(vertex);
    }
    for (from, to, weight) in graph.edges() {
        pg.add_edge(node(from), node(to), weight);
    }
    pg
}

pub(crate) fn node(vertex: VertexId) -> NodeIndex {
    NodeIndex::new(vertex.index())
}
