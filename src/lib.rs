//! Cost reduction of weighted networks.
//!
//! A network is read as an adjacency matrix, validated, and reduced to its
//! minimum spanning tree; the report states how much weight the reduction
//! saves.
//!
//! ```rust
//! use edgeprune::graph::{Graph, RawMatrix};
//! use edgeprune::mst::EngineKind;
//! use edgeprune::report::Reduction;
//!
//! let raw = RawMatrix::from_signed(vec![
//!     vec![-1, 12, 10, 9],
//!     vec![12, -1, 8, 7],
//!     vec![10, 8, -1, 14],
//!     vec![9, 7, 14, -1],
//! ]);
//! let graph = Graph::new(raw).unwrap();
//! let (reduction, _tree) = Reduction::compute(&graph, EngineKind::Scan).unwrap();
//! assert_eq!(reduction.savings, 36);
//! ```
#![warn(non_snake_case)]

pub mod config;
pub mod graph;
pub mod input;
pub mod mst;
pub mod options;
pub mod report;
