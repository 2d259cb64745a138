//! Adjacency matrices before and after structural validation.
use std::fmt;

use crate::graph::edge::{Edge, Weight};
use crate::graph::ids::VertexId;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::render;
use crate::graph::validate::{self, StructuralError};

/// Rows exactly as a reader produced them. Nothing guarantees the matrix is
/// square or that its diagonal is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatrix {
    rows: Vec<Vec<Edge>>,
}

impl RawMatrix {
    pub fn from_rows(rows: Vec<Vec<Edge>>) -> Self {
        Self { rows }
    }

    /// Builds a matrix from signed cells where `-1` marks a missing edge.
    pub fn from_signed(rows: Vec<Vec<i64>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Edge::from_signed).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Edge>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Vec<Edge>> {
        self.rows
    }
}

impl fmt::Display for RawMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::bingo_card(&self.rows))
    }
}

/// Square, undirected weighted graph with an empty diagonal.
///
/// Only obtainable through [`Graph::new`] or [`Graph::new_strict`], so every
/// consumer can rely on the structural invariants without re-checking them.
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    rows: IndexVec<VertexId, Vec<Edge>>,
}

impl Graph {
    /// Validates shape and diagonal, then freezes the matrix.
    pub fn new(raw: RawMatrix) -> Result<Self, StructuralError> {
        validate::validate(&raw)?;
        Ok(Self::from_validated(raw))
    }

    /// Like [`Graph::new`], additionally rejecting asymmetric weights.
    pub fn new_strict(raw: RawMatrix) -> Result<Self, StructuralError> {
        validate::validate_strict(&raw)?;
        Ok(Self::from_validated(raw))
    }

    fn from_validated(raw: RawMatrix) -> Self {
        Self {
            rows: IndexVec::from_vec(raw.into_rows()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        self.rows.indices()
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Edge {
        self.rows[from][to.index()]
    }

    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.edge(from, to).weight()
    }

    /// Weighted neighbours of `vertex`, by ascending vertex index.
    pub fn neighbours(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.rows[vertex]
            .iter()
            .enumerate()
            .filter_map(|(to, edge)| edge.weight().map(|weight| (VertexId::from_usize(to), weight)))
    }

    /// Every undirected edge once, taken from the upper triangle.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.rows.iter_enumerated().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .skip(from.index() + 1)
                .filter_map(move |(to, edge)| {
                    edge.weight()
                        .map(|weight| (from, VertexId::from_usize(to), weight))
                })
        })
    }

    pub fn rows(&self) -> &[Vec<Edge>] {
        self.rows.as_slice()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertex_count())
            .field("rows", &self.rows())
            .finish()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::bingo_card(self.rows()))
    }
}
