//! The fixed universe of 16 pieces.

use super::types::{CELL_COUNT, Color, Piece, Shape, Size, Top};
use std::sync::OnceLock;
use strum::IntoEnumIterator;

/// Returns all 16 pieces in catalog order.
///
/// The order is the cross-product of the axes with color varying slowest
/// and top fastest, so `all_pieces()[i].index() == i`.
pub fn all_pieces() -> &'static [Piece; CELL_COUNT] {
    static CATALOG: OnceLock<[Piece; CELL_COUNT]> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut pieces = [Piece::new(Color::Dark, Shape::Circle, Size::Big, Top::Flat); CELL_COUNT];
        let mut slot = 0;
        for color in Color::iter() {
            for shape in Shape::iter() {
                for size in Size::iter() {
                    for top in Top::iter() {
                        pieces[slot] = Piece::new(color, shape, size, top);
                        slot += 1;
                    }
                }
            }
        }
        pieces
    })
}
