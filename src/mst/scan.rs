use log::debug;

use crate::graph::{Graph, IndexVec, VertexId};
use crate::mst::tree::{SpanningTree, TreeEdge};
use crate::mst::{EngineKind, MstError, SpanningTreeEngine};

/// Prim's algorithm in its plain form: every step rescans the whole cut.
/// O(n^3) on `n` vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct CutScan;

impl SpanningTreeEngine for CutScan {
    fn kind(&self) -> EngineKind {
        EngineKind::Scan
    }

    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let n = graph.vertex_count();
        let mut seen = IndexVec::<VertexId, bool>::from_elem(false, n);
        seen[VertexId::ROOT] = true;
        let mut tree = SpanningTree::new(n);

        for step in 1..n {
            let lightest = lightest_crossing_edge(graph, &seen).ok_or(
                MstError::DisconnectedGraph {
                    placed: step - 1,
                    needed: n - 1,
                },
            )?;
            debug!(
                "step {step}: {:?} -> {:?} weight {}",
                lightest.from, lightest.to, lightest.weight
            );
            seen[lightest.to] = true;
            tree.push(lightest)?;
        }

        Ok(tree)
    }
}

/// Strictly lightest edge from a seen vertex to an unseen one; the first one
/// encountered wins a tie.
fn lightest_crossing_edge(graph: &Graph, seen: &IndexVec<VertexId, bool>) -> Option<TreeEdge> {
    let mut lightest: Option<TreeEdge> = None;
    for (from, _) in seen.iter_enumerated().filter(|(_, inside)| **inside) {
        for (to, weight) in graph.neighbours(from) {
            if seen[to] {
                continue;
            }
            if lightest.is_none_or(|best| weight < best.weight) {
                lightest = Some(TreeEdge { from, to, weight });
            }
        }
    }
    lightest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RawMatrix;

    fn edge(from: u32, to: u32, weight: u64) -> TreeEdge {
        TreeEdge {
            from: VertexId::new(from),
            to: VertexId::new(to),
            weight,
        }
    }

    #[test]
    fn grows_from_vertex_zero() {
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 12, 10, 9],
            vec![12, -1, 8, 7],
            vec![10, 8, -1, 14],
            vec![9, 7, 14, -1],
        ]))
        .unwrap();
        let tree = CutScan.spanning_tree(&graph).unwrap();
        assert_eq!(tree.edges(), &[edge(0, 3, 9), edge(3, 1, 7), edge(1, 2, 8)]);
        assert_eq!(tree.total_weight(), 24);
    }

    #[test]
    fn ties_go_to_the_first_pair_scanned() {
        // Every edge weighs 1: the lowest visited vertex and then the lowest
        // unvisited vertex win each step.
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 1, 1, 1],
            vec![1, -1, 1, 1],
            vec![1, 1, -1, 1],
            vec![1, 1, 1, -1],
        ]))
        .unwrap();
        let tree = CutScan.spanning_tree(&graph).unwrap();
        assert_eq!(tree.edges(), &[edge(0, 1, 1), edge(0, 2, 1), edge(0, 3, 1)]);
    }

    #[test]
    fn tie_against_a_later_visited_vertex_keeps_the_earlier_one() {
        // After 0-2 is taken, both 0-1 and 2-1 weigh 5: 0 is scanned first.
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 5, 1],
            vec![5, -1, 5],
            vec![1, 5, -1],
        ]))
        .unwrap();
        let tree = CutScan.spanning_tree(&graph).unwrap();
        assert_eq!(tree.edges(), &[edge(0, 2, 1), edge(0, 1, 5)]);
    }

    #[test]
    fn single_vertex_has_empty_tree() {
        let graph = Graph::new(RawMatrix::from_signed(vec![vec![-1]])).unwrap();
        let tree = CutScan.spanning_tree(&graph).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), 0);
    }

    #[test]
    fn isolated_last_vertex_is_reported() {
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 2, 3, -1],
            vec![2, -1, 4, -1],
            vec![3, 4, -1, -1],
            vec![-1, -1, -1, -1],
        ]))
        .unwrap();
        assert_eq!(
            CutScan.spanning_tree(&graph),
            Err(MstError::DisconnectedGraph {
                placed: 2,
                needed: 3
            })
        );
    }

    #[test]
    fn zero_weight_edges_are_real_edges() {
        let graph = Graph::new(RawMatrix::from_signed(vec![
            vec![-1, 0],
            vec![0, -1],
        ]))
        .unwrap();
        let tree = CutScan.spanning_tree(&graph).unwrap();
        assert_eq!(tree.edges(), &[edge(0, 1, 0)]);
    }
}
