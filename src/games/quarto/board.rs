//! The 4x4 Quarto board and its ten scoring lines.

use super::action::QuartoError;
use super::types::{BOARD_SIDE, CELL_COUNT, Cell, Piece};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which of the ten scoring lines a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A row, numbered top to bottom.
    Row(usize),
    /// A column, numbered left to right.
    Column(usize),
    /// Cells 0, 5, 10, 15.
    Diagonal,
    /// Cells 3, 6, 9, 12.
    AntiDiagonal,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row(n) => write!(f, "row {}", n),
            LineKind::Column(n) => write!(f, "column {}", n),
            LineKind::Diagonal => write!(f, "diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A scoring line: four cells that win when filled with pieces sharing an attribute.
///
/// Only the ten fixed lines exist. A line serializes as its [`LineKind`] and
/// deserializing resolves the kind against the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LineKind", into = "LineKind")]
pub struct Line {
    kind: LineKind,
    cells: [usize; BOARD_SIDE],
}

impl Line {
    /// Returns which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cell indices of the line, in board order.
    pub fn cells(&self) -> [Cell; BOARD_SIDE] {
        self.cells.map(Cell::from_line_index)
    }

    /// Returns the raw cell indices of the line.
    pub fn indices(&self) -> &[usize; BOARD_SIDE] {
        &self.cells
    }

    /// Returns true if `cell` lies on this line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell.index())
    }
}

impl TryFrom<LineKind> for Line {
    type Error = QuartoError;

    fn try_from(kind: LineKind) -> Result<Self, Self::Error> {
        LINES
            .into_iter()
            .find(|line| line.kind == kind)
            .ok_or(QuartoError::UnknownLine(kind))
    }
}

impl From<Line> for LineKind {
    fn from(line: Line) -> Self {
        line.kind
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.cells;
        write!(f, "{} {{{}, {}, {}, {}}}", self.kind, a, b, c, d)
    }
}

const LINES: [Line; 10] = [
    // Rows
    Line { kind: LineKind::Row(0), cells: [0, 1, 2, 3] },
    Line { kind: LineKind::Row(1), cells: [4, 5, 6, 7] },
    Line { kind: LineKind::Row(2), cells: [8, 9, 10, 11] },
    Line { kind: LineKind::Row(3), cells: [12, 13, 14, 15] },
    // Columns
    Line { kind: LineKind::Column(0), cells: [0, 4, 8, 12] },
    Line { kind: LineKind::Column(1), cells: [1, 5, 9, 13] },
    Line { kind: LineKind::Column(2), cells: [2, 6, 10, 14] },
    Line { kind: LineKind::Column(3), cells: [3, 7, 11, 15] },
    // Diagonals
    Line { kind: LineKind::Diagonal, cells: [0, 5, 10, 15] },
    Line { kind: LineKind::AntiDiagonal, cells: [3, 6, 9, 12] },
];

/// 4x4 Quarto board.
///
/// Cells are addressed row-major (index = row * 4 + column). A cell, once
/// filled, is never emptied or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-15).
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Places `piece` on the cell with index `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidCell`] for indices outside 0..16 and
    /// [`QuartoError::CellOccupied`] if the cell already holds a piece.
    #[instrument(skip(self), fields(piece = %piece))]
    pub fn place(&mut self, cell: usize, piece: Piece) -> Result<(), QuartoError> {
        let cell = Cell::new(cell)?;
        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return Err(QuartoError::CellOccupied(cell));
        }
        *slot = Some(piece);
        Ok(())
    }

    /// Returns the piece on the cell with index `cell`, if any.
    ///
    /// Out-of-range indices read as empty.
    pub fn piece_at(&self, cell: usize) -> Option<Piece> {
        self.cells.get(cell).copied().flatten()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Checks if every cell holds a piece.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Option<Piece>; CELL_COUNT] {
        &self.cells
    }

    /// Returns the empty cells in index order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|c| self.is_empty(*c)).collect()
    }

    /// Returns every piece on the board with its cell.
    pub fn placed(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(|c| self.cells[c.index()].map(|p| (c, p)))
    }

    /// Returns the number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The ten scoring lines: four rows, four columns, then both diagonals.
    pub fn lines() -> impl Iterator<Item = Line> {
        LINES.into_iter()
    }

    /// Returns the pieces on `line`, or `None` if any of its cells is empty.
    pub fn line_pieces(&self, line: &Line) -> Option<[Piece; BOARD_SIDE]> {
        let [a, b, c, d] = line.cells.map(|i| self.cells[i]);
        Some([a?, b?, c?, d?])
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their index, occupied cells show the piece code.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIDE {
            let cells: Vec<String> = (0..BOARD_SIDE)
                .map(|col| {
                    let pos = row * BOARD_SIDE + col;
                    match self.cells[pos] {
                        Some(piece) => piece.code(),
                        None => format!("{:^4}", pos),
                    }
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row < BOARD_SIDE - 1 {
                result.push_str("\n----+----+----+----\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
