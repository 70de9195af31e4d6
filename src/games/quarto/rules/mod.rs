//! Game rules for Quarto.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_winning_line, line_is_winning, shared_attributes, winning_line, winning_lines};
