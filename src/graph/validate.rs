//! Structural checks a matrix must pass before any weight is looked at.
use thiserror::Error;

use crate::graph::edge::Edge;
use crate::graph::matrix::RawMatrix;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("the input data contains no rows")]
    EmptyGraph,
    #[error("the input data does not represent sides of equal length: {rows} rows but row {row} has {len} entries")]
    AsymmetricSize { rows: usize, row: usize, len: usize },
    #[error("matrix diagonal must be empty, found {edge} at ({vertex}, {vertex})")]
    InvalidDiagonal { vertex: usize, edge: Edge },
    #[error("edge weights differ between ({from}, {to}) and ({to}, {from})")]
    Asymmetric { from: usize, to: usize },
}

/// Checks that the matrix is non-empty, square and carries no self edges.
///
/// Every row is measured, not only the first one, so a ragged file is caught
/// here rather than by an out-of-bounds access further down.
pub fn validate(raw: &RawMatrix) -> Result<(), StructuralError> {
    let rows = raw.len();
    if raw.is_empty() {
        return Err(StructuralError::EmptyGraph);
    }

    if let Some((row, cells)) = raw
        .rows()
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != rows)
    {
        return Err(StructuralError::AsymmetricSize {
            rows,
            row,
            len: cells.len(),
        });
    }

    for (vertex, cells) in raw.rows().iter().enumerate() {
        let edge = cells[vertex];
        if !edge.is_absent() {
            return Err(StructuralError::InvalidDiagonal { vertex, edge });
        }
    }

    Ok(())
}

/// [`validate`] plus `m[i][j] == m[j][i]` for every pair.
pub fn validate_strict(raw: &RawMatrix) -> Result<(), StructuralError> {
    validate(raw)?;

    let rows = raw.rows();
    for from in 0..rows.len() {
        for to in (from + 1)..rows.len() {
            if rows[from][to] != rows[to][from] {
                return Err(StructuralError::Asymmetric { from, to });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_square_matrix_with_empty_diagonal() {
        let raw = RawMatrix::from_signed(vec![vec![-1, 3], vec![3, -1]]);
        assert_eq!(validate(&raw), Ok(()));
        assert_eq!(validate_strict(&raw), Ok(()));
    }

    #[test]
    fn single_vertex_is_a_valid_graph() {
        let raw = RawMatrix::from_signed(vec![vec![-1]]);
        assert_eq!(validate(&raw), Ok(()));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            validate(&RawMatrix::default()),
            Err(StructuralError::EmptyGraph)
        );
    }

    #[test]
    fn rejects_ragged_row_after_the_first() {
        let raw = RawMatrix::from_signed(vec![
            vec![-1, 1, 2],
            vec![1, -1, 4],
            vec![2, 4],
        ]);
        assert_eq!(
            validate(&raw),
            Err(StructuralError::AsymmetricSize {
                rows: 3,
                row: 2,
                len: 2
            })
        );
    }

    #[test]
    fn rejects_more_columns_than_rows() {
        let raw = RawMatrix::from_signed(vec![vec![-1, 1, 2], vec![1, -1, 4]]);
        assert!(matches!(
            validate(&raw),
            Err(StructuralError::AsymmetricSize { rows: 2, row: 0, len: 3 })
        ));
    }

    #[test]
    fn rejects_weight_on_the_diagonal() {
        let raw = RawMatrix::from_signed(vec![
            vec![-1, 1, 2],
            vec![1, 5, 4],
            vec![2, 4, -1],
        ]);
        assert_eq!(
            validate(&raw),
            Err(StructuralError::InvalidDiagonal {
                vertex: 1,
                edge: Edge::Weighted(5)
            })
        );
    }

    #[test]
    fn strict_mode_rejects_mismatched_pair() {
        let raw = RawMatrix::from_signed(vec![
            vec![-1, 1, 2],
            vec![1, -1, 4],
            vec![2, 9, -1],
        ]);
        assert_eq!(validate(&raw), Ok(()));
        assert_eq!(
            validate_strict(&raw),
            Err(StructuralError::Asymmetric { from: 1, to: 2 })
        );
    }

    #[test]
    fn messages_name_the_offending_cell() {
        let err = StructuralError::InvalidDiagonal {
            vertex: 1,
            edge: Edge::Weighted(5),
        };
        assert_eq!(
            err.to_string(),
            "matrix diagonal must be empty, found 5 at (1, 1)"
        );
    }
}
