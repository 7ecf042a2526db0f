//! Presentation views of a game.
//!
//! Views are computed on demand from the engine's board and never feed
//! back into it. They carry what a renderer needs: where each cell sits
//! on the three-row board, which glyphs to draw, and which style classes
//! apply.

pub mod cell_view;
pub mod layout;

pub use cell_view::{BoardView, CellView};
pub use layout::{display_order, grid_position, COLUMNS, ROWS};
