//! Reading network files through to the savings report.
use std::path::PathBuf;

use edgeprune::graph::{Graph, StructuralError, VertexId, WeightOverflow, total_weight};
use edgeprune::input::{InputError, MatrixReader};
use edgeprune::mst::{EngineKind, MstError, TreeEdge, mst_weight};
use edgeprune::report::{Reduction, ReductionError, ReportFormat};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn load(name: &str) -> Graph {
    let raw = MatrixReader::default().read_path(data(name)).unwrap();
    Graph::new(raw).unwrap()
}

fn edge(from: u32, to: u32, weight: u64) -> TreeEdge {
    TreeEdge {
        from: VertexId::new(from),
        to: VertexId::new(to),
        weight,
    }
}

#[test]
fn euler_sample_network_saves_150() {
    let graph = load("euler_sample.txt");
    for engine in [EngineKind::Scan, EngineKind::Frontier, EngineKind::Kruskal] {
        let (reduction, _) = Reduction::compute(&graph, engine).unwrap();
        assert_eq!(reduction.total_weight, 243, "{engine}");
        assert_eq!(reduction.mst_weight, 93, "{engine}");
        assert_eq!(reduction.savings, 150, "{engine}");
    }
}

#[test]
fn euler_sample_tree_order() {
    let graph = load("euler_sample.txt");
    let (_, tree) = Reduction::compute(&graph, EngineKind::Frontier).unwrap();
    assert_eq!(
        tree.edges(),
        &[
            edge(0, 2, 12),
            edge(0, 1, 16),
            edge(1, 3, 17),
            edge(3, 4, 18),
            edge(4, 6, 11),
            edge(3, 5, 19),
        ]
    );
}

#[test]
fn four_vertex_network() {
    let graph = load("four_vertex.txt");
    assert_eq!(total_weight(&graph), Ok(60));
    assert_eq!(mst_weight(&graph), Ok(24));

    let (reduction, tree) = Reduction::compute(&graph, EngineKind::Scan).unwrap();
    assert_eq!(reduction.savings, 36);
    assert_eq!(reduction.new_cost(), 24);
    assert_eq!(tree.edges(), &[edge(0, 3, 9), edge(3, 1, 7), edge(1, 2, 8)]);
}

#[test]
fn isolated_vertex_aborts_the_computation() {
    let graph = load("isolated_vertex.txt");
    assert_eq!(
        mst_weight(&graph),
        Err(MstError::DisconnectedGraph {
            placed: 2,
            needed: 3
        })
    );
}

#[test]
fn ragged_file_fails_validation() {
    let raw = MatrixReader::default().read_path(data("ragged.txt")).unwrap();
    assert_eq!(
        Graph::new(raw),
        Err(StructuralError::AsymmetricSize {
            rows: 3,
            row: 2,
            len: 2
        })
    );
}

#[test]
fn weighted_diagonal_fails_validation() {
    let raw = MatrixReader::default()
        .read_path(data("bad_diagonal.txt"))
        .unwrap();
    assert!(matches!(
        Graph::new(raw),
        Err(StructuralError::InvalidDiagonal { vertex: 1, .. })
    ));
}

#[test]
fn bad_token_is_reported_with_its_position() {
    let err = MatrixReader::default()
        .read_path(data("bad_token.txt"))
        .unwrap_err();
    assert!(matches!(
        err,
        InputError::MalformedWeight {
            line: 2,
            column: 3,
            ..
        }
    ));
}

#[test]
fn missing_file_is_malformed_input() {
    let err = MatrixReader::default()
        .read_path(data("does_not_exist.txt"))
        .unwrap_err();
    assert!(matches!(err, InputError::Unreadable { .. }));
}

#[test]
fn weights_summing_past_u64_are_rejected() {
    let raw = MatrixReader::default()
        .read_str("-,18446744073709551615,1\n18446744073709551615,-,1\n1,1,-\n")
        .unwrap();
    let graph = Graph::new(raw).unwrap();
    assert_eq!(total_weight(&graph), Err(WeightOverflow));
    assert!(matches!(
        Reduction::compute(&graph, EngineKind::Scan),
        Err(ReductionError::Weight(WeightOverflow))
    ));
}

#[test]
fn report_written_to_disk() {
    let graph = load("four_vertex.txt");
    let (reduction, tree) = Reduction::compute(&graph, EngineKind::Scan).unwrap();
    let reduction = reduction.with_trace(&tree);

    let path = std::env::temp_dir().join(format!("edgeprune-report-{}.json", std::process::id()));
    ReportFormat::Json.write(&path, &reduction).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["total_weight"], 60);
    assert_eq!(value["mst_weight"], 24);
    assert_eq!(value["savings"], 36);
    assert_eq!(value["tree"].as_array().map(|edges| edges.len()), Some(3));
}

#[test]
fn bingo_card_of_the_sample() {
    let raw = MatrixReader::default()
        .read_path(data("four_vertex.txt"))
        .unwrap();
    assert_eq!(
        raw.to_string(),
        "| -1 | 12 | 10 |  9 |\n\
         | 12 | -1 |  8 |  7 |\n\
         | 10 |  8 | -1 | 14 |\n\
         |  9 |  7 | 14 | -1 |\n"
    );
}
