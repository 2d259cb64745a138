use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::graph::{Graph, IndexVec, VertexId, Weight};
use crate::mst::tree::{SpanningTree, TreeEdge};
use crate::mst::{EngineKind, MstError, SpanningTreeEngine};

type Candidate = Reverse<(Weight, VertexId, VertexId)>;

/// Lazy Prim's algorithm over a min-heap of crossing edges.
///
/// Heap keys are `(weight, from, to)`. Scanning the cut seen-vertex first,
/// then unseen-vertex, and keeping the first strict minimum picks exactly the
/// lexicographically smallest such key, so this engine accepts the same edges
/// as [`CutScan`](crate::mst::CutScan) in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frontier;

impl SpanningTreeEngine for Frontier {
    fn kind(&self) -> EngineKind {
        EngineKind::Frontier
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let n = graph.vertex_count();
        let mut seen = IndexVec::<VertexId, bool>::from_elem(false, n);
        let mut heap: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut tree = SpanningTree::new(n);

        seen[VertexId::ROOT] = true;
        extend_cut(&mut heap, graph, &seen, VertexId::ROOT);

        for step in 1..n {
            let next = loop {
                match heap.pop() {
                    Some(Reverse((weight, from, to))) if !seen[to] => {
                        break TreeEdge { from, to, weight };
                    }
                    // stale: `to` joined the tree after this entry was pushed
                    Some(_) => continue,
                    None => {
                        return Err(MstError::DisconnectedGraph {
                            placed: step - 1,
                            needed: n - 1,
                        });
                    }
                }
            };
            debug!(
                "step {step}: {:?} -> {:?} weight {} ({} queued)",
                next.from,
                next.to,
                next.weight,
                heap.len()
            );
            seen[next.to] = true;
            extend_cut(&mut heap, graph, &seen, next.to);
            tree.push(next)?;
        }

        Ok(tree)
    }
}

fn extend_cut(
    heap: &mut BinaryHeap<Candidate>,
    graph: &Graph,
    seen: &IndexVec<VertexId, bool>,
    from: VertexId,
) {
    heap.extend(
        graph
            .neighbours(from)
            .filter(|(to, _)| !seen[*to])
            .map(|(to, weight)| Reverse((weight, from, to))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RawMatrix;
    use crate::mst::CutScan;

    #[test]
    fn matches_scan_on_tied_weights() {
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 5, 1, 5, -1],
            vec![5, -1, 5, 2, 2],
            vec![1, 5, -1, 5, 2],
            vec![5, 2, 5, -1, 2],
            vec![-1, 2, 2, 2, -1],
        ]))
        .unwrap();
        let scanned = CutScan.spanning_tree(&graph).unwrap();
        let queued = Frontier.spanning_tree(&graph).unwrap();
        assert_eq!(queued, scanned);
        assert_eq!(queued.total_weight(), 7);
    }

    #[test]
    fn disconnected_pair_of_components() {
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 1, -1, -1],
            vec![1, -1, -1, -1],
            vec![-1, -1, -1, 3],
            vec![-1, -1, 3, -1],
        ]))
        .unwrap();
        assert_eq!(
            Frontier.spanning_tree(&graph),
            Err(MstError::DisconnectedGraph {
                placed: 1,
                needed: 3
            })
        );
    }
}
