//! Core domain types for Quarto: attribute axes, pieces, players and cells.

use super::action::QuartoError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;

/// Side length of the board.
pub const BOARD_SIDE: usize = 4;

/// Number of cells on the board (and of pieces in the game).
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

// ─────────────────────────────────────────────────────────────
//  Attribute axes
// ─────────────────────────────────────────────────────────────

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, derive_more::Display)]
#[repr(u8)]
pub enum Color {
    /// Dark wood (`D`).
    Dark = 0,
    /// Light wood (`L`).
    Light = 1,
}

/// Piece cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, derive_more::Display)]
#[repr(u8)]
pub enum Shape {
    /// Round piece (`C`).
    Circle = 0,
    /// Square piece (`S`).
    Square = 1,
}

/// Piece height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, derive_more::Display)]
#[repr(u8)]
pub enum Size {
    /// Tall piece (`B`).
    Big = 0,
    /// Short piece (`S`).
    Small = 1,
}

/// Piece top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, derive_more::Display)]
#[repr(u8)]
pub enum Top {
    /// Solid top (`F`).
    Flat = 0,
    /// Top with a dent (`H`).
    Hollow = 1,
}

/// One of the four independent binary properties of a piece.
///
/// The declaration order is the order of letters in a piece code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display)]
pub enum Axis {
    /// Dark or light.
    Color,
    /// Circle or square.
    Shape,
    /// Big or small.
    Size,
    /// Flat or hollow.
    Top,
}

impl Axis {
    /// Bit this axis occupies in a piece index.
    fn shift(self) -> u8 {
        match self {
            Axis::Color => 3,
            Axis::Shape => 2,
            Axis::Size => 1,
            Axis::Top => 0,
        }
    }

    /// The two code letters for this axis, in value order.
    fn letters(self) -> [char; 2] {
        match self {
            Axis::Color => ['D', 'L'],
            Axis::Shape => ['C', 'S'],
            Axis::Size => ['B', 'S'],
            Axis::Top => ['F', 'H'],
        }
    }
}

/// The value a piece carries on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Attribute {
    /// Value on the color axis.
    Color(Color),
    /// Value on the shape axis.
    Shape(Shape),
    /// Value on the size axis.
    Size(Size),
    /// Value on the top axis.
    Top(Top),
}

// ─────────────────────────────────────────────────────────────
//  Piece
// ─────────────────────────────────────────────────────────────

/// One of the 16 Quarto pieces.
///
/// A piece is an immutable combination of one value per axis. It is
/// identified externally by a 4-letter code such as `DCBF`
/// (color, shape, size, top) and internally by an index 0..16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Piece {
    color: Color,
    shape: Shape,
    size: Size,
    top: Top,
}

impl Piece {
    /// Creates a piece from its four attribute values.
    pub const fn new(color: Color, shape: Shape, size: Size, top: Top) -> Self {
        Self {
            color,
            shape,
            size,
            top,
        }
    }

    /// Returns the piece with the given index, if it is in 0..16.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let bit = |axis: Axis| (index >> axis.shift()) & 1 == 1;
        Some(Self {
            color: if bit(Axis::Color) { Color::Light } else { Color::Dark },
            shape: if bit(Axis::Shape) { Shape::Square } else { Shape::Circle },
            size: if bit(Axis::Size) { Size::Small } else { Size::Big },
            top: if bit(Axis::Top) { Top::Hollow } else { Top::Flat },
        })
    }

    /// Stable index of this piece (0..16).
    pub fn index(self) -> usize {
        ((self.color as usize) << Axis::Color.shift())
            | ((self.shape as usize) << Axis::Shape.shift())
            | ((self.size as usize) << Axis::Size.shift())
            | ((self.top as usize) << Axis::Top.shift())
    }

    /// Returns the color.
    pub fn color(self) -> Color {
        self.color
    }

    /// Returns the shape.
    pub fn shape(self) -> Shape {
        self.shape
    }

    /// Returns the size.
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the top.
    pub fn top(self) -> Top {
        self.top
    }

    /// Returns this piece's value on `axis`.
    pub fn attribute(self, axis: Axis) -> Attribute {
        match axis {
            Axis::Color => Attribute::Color(self.color),
            Axis::Shape => Attribute::Shape(self.shape),
            Axis::Size => Attribute::Size(self.size),
            Axis::Top => Attribute::Top(self.top),
        }
    }

    /// Returns the 4-letter identifier, e.g. `"LSBH"`.
    pub fn code(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for axis in <Axis as strum::IntoEnumIterator>::iter() {
            let value = (self.index() >> axis.shift()) & 1;
            write!(f, "{}", axis.letters()[value])?;
        }
        Ok(())
    }
}

impl FromStr for Piece {
    type Err = QuartoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let letters: Vec<char> = code.chars().collect();
        if letters.len() != 4 {
            return Err(QuartoError::UnknownPiece(s.to_string()));
        }

        let mut index = 0;
        for (axis, letter) in <Axis as strum::IntoEnumIterator>::iter().zip(letters) {
            let value = axis
                .letters()
                .iter()
                .position(|l| *l == letter)
                .ok_or_else(|| QuartoError::UnknownPiece(s.to_string()))?;
            index |= value << axis.shift();
        }

        Self::from_index(index).ok_or_else(|| QuartoError::UnknownPiece(s.to_string()))
    }
}

impl TryFrom<String> for Piece {
    type Error = QuartoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Piece> for String {
    fn from(piece: Piece) -> Self {
        piece.code()
    }
}

// ─────────────────────────────────────────────────────────────
//  Player
// ─────────────────────────────────────────────────────────────

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 0, who makes the first selection.
    First,
    /// Player 1, who makes the first placement.
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the player index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Returns the player with the given index, if it is 0 or 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.index())
    }
}

// ─────────────────────────────────────────────────────────────
//  Cell
// ─────────────────────────────────────────────────────────────

/// A validated board cell index (row-major, 0..16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(u8);

impl Cell {
    /// Creates a cell, rejecting indices outside 0..16.
    pub fn new(index: usize) -> Result<Self, QuartoError> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(QuartoError::InvalidCell(index))
        }
    }

    /// Wraps an index taken from the fixed line table.
    pub(super) const fn from_line_index(index: usize) -> Self {
        Self(index as u8)
    }

    /// Returns the cell index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0..4).
    pub fn row(self) -> usize {
        self.index() / BOARD_SIDE
    }

    /// Returns the column (0..4).
    pub fn column(self) -> usize {
        self.index() % BOARD_SIDE
    }

    /// All 16 cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }
}

impl TryFrom<usize> for Cell {
    type Error = QuartoError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
