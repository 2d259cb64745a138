//! Reader for comma separated network files.
//!
//! One matrix row per line. A cell is a non-negative integer weight; an empty
//! cell, `-`, any configured placeholder, or anything that does not start
//! with a digit means "no edge". A cell that starts with a digit but is not a
//! number (`12x`, or too large for a weight) is rejected.
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map_res};
use nom::{IResult, Parser};
use thiserror::Error;

use crate::graph::{Edge, RawMatrix, Weight};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read the network file {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed weight {token:?} at line {line}, column {column}")]
    MalformedWeight {
        line: usize,
        column: usize,
        token: String,
    },
}

#[derive(Debug, Clone)]
pub struct MatrixReader {
    placeholders: Vec<String>,
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self::new(vec!["-".to_string()])
    }
}

impl MatrixReader {
    pub fn new(placeholders: Vec<String>) -> Self {
        Self { placeholders }
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<RawMatrix, InputError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let matrix = self.read_str(&content)?;
        info!("Read {} rows from {:?}", matrix.len(), path);
        Ok(matrix)
    }

    /// Blank lines are skipped; line and column numbers in errors are 1-based
    /// and count the skipped lines.
    pub fn read_str(&self, content: &str) -> Result<RawMatrix, InputError> {
        let mut rows = Vec::new();
        for (line_idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split(',')
                .enumerate()
                .map(|(col_idx, token)| self.parse_cell(token, line_idx + 1, col_idx + 1))
                .collect::<Result<Vec<_>, _>>()?;
            debug!("line {}: {} cells", line_idx + 1, row.len());
            rows.push(row);
        }
        Ok(RawMatrix::from_rows(rows))
    }

    fn parse_cell(&self, token: &str, line: usize, column: usize) -> Result<Edge, InputError> {
        let token = token.trim();
        let numeric = token.chars().next().is_some_and(|c| c.is_ascii_digit());
        if !numeric || self.placeholders.iter().any(|p| p == token) {
            return Ok(Edge::Absent);
        }
        match weight(token) {
            Ok((_, value)) => Ok(Edge::Weighted(value)),
            Err(_) => Err(InputError::MalformedWeight {
                line,
                column,
                token: token.to_string(),
            }),
        }
    }
}

fn weight(input: &str) -> IResult<&str, Weight> {
    all_consuming(map_res(digit1, |digits: &str| digits.parse::<Weight>())).parse(input)
}
