//! Human readable dump of a matrix, one `| a | b |` line per row.
use itertools::Itertools;

use crate::graph::edge::Edge;

/// Renders every cell right-aligned to the widest value in the matrix.
/// Missing edges show up as `-1`, the way they appear in network files.
pub fn bingo_card(rows: &[Vec<Edge>]) -> String {
    let pad = rows
        .iter()
        .flatten()
        .map(|edge| edge.to_string().len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|edge| format!(" {:>pad$} |", edge.to_string()))
                .join("");
            format!("|{cells}\n")
        })
        .join("")
}
