//! # Weighted network model
//!
//! A network of `n` vertices is an `n x n` adjacency matrix `M` where
//! `M[i][j]` is either the weight of the undirected edge `{i, j}` or
//! [`Edge::Absent`]. A [`RawMatrix`] is whatever a reader produced; a
//! [`Graph`] is a matrix that passed [`validate`](validate::validate):
//!
//! * `M` is non-empty and square;
//! * `M[i][i]` is absent for every `i`;
//! * with [`Graph::new_strict`], also `M[i][j] == M[j][i]`.
//!
//! ## Example
//!
//! ```rust
//! use edgeprune::graph::*;
//!
//! let raw = RawMatrix::from_signed(vec![
//!     vec![-1, 3, 1],
//!     vec![3, -1, 2],
//!     vec![1, 2, -1],
//! ]);
//! let graph = Graph::new(raw).unwrap();
//! assert_eq!(total_weight(&graph), Ok(6));
//! ```

pub mod edge;
pub mod ids;
pub mod index_vec;
pub mod interop;
pub mod matrix;
pub mod render;
pub mod validate;
pub mod weight;

pub use edge::{Edge, NO_EDGE, Weight};
pub use ids::VertexId;
pub use index_vec::{Idx, IndexVec};
pub use matrix::{Graph, RawMatrix};
pub use validate::{StructuralError, validate, validate_strict};
pub use weight::{WeightOverflow, edge_count, total_weight};
