//! Help table listing every outcome, for a human deciding what to play.

use super::{resolve_positions, MoveSet, Outcome};
use std::fmt;

const CORNER: &str = "v PC\\User >";

/// N x N outcome matrix: row = computer's move, column = human's move,
/// each cell the outcome for the human.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpTable {
    labels: Vec<String>,
    cells: Vec<Vec<Outcome>>,
}

impl HelpTable {
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let cells = (0..n)
            .map(|computer| {
                (0..n)
                    .map(|human| resolve_positions(moves, human, computer))
                    .collect()
            })
            .collect();
        Self {
            labels: moves.labels().to_vec(),
            cells,
        }
    }

    /// Outcome for the human playing `human` against the computer playing `computer`
    pub fn cell(&self, computer: usize, human: usize) -> Option<Outcome> {
        self.cells.get(computer)?.get(human).copied()
    }

    /// N rows of N + 1 columns: the row's move label followed by its outcomes
    pub fn grid(&self) -> Vec<Vec<String>> {
        self.labels
            .iter()
            .zip(&self.cells)
            .map(|(label, row)| {
                std::iter::once(label.clone())
                    .chain(row.iter().map(|o| o.to_string()))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<&str> = std::iter::once(CORNER)
            .chain(self.labels.iter().map(String::as_str))
            .collect();
        let grid = self.grid();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &grid {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let rule = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let rule = format!("+{}+", rule);

        writeln!(f, "{}", rule)?;
        write_row(f, &header, &widths)?;
        writeln!(f, "{}", rule)?;
        for row in &grid {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(f, &cells, &widths)?;
        }
        write!(f, "{}", rule)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, " {:<width$} |", cell, width = width)?;
    }
    writeln!(f)
}
