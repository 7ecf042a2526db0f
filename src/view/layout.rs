//! Serpentine board layout.
//!
//! The track snakes across three rows of ten:
//!
//! ```text
//!  0  1  2  3  4  5  6  7  8  9
//! 19 18 17 16 15 14 13 12 11 10
//! 20 21 22 23 24 25 26 27 28 29
//! ```

use crate::board::TRACK_LEN;

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 10;

const _: () = assert!(ROWS * COLUMNS == TRACK_LEN, "layout must cover the track exactly");

/// `(row, column)` of a track cell.
#[must_use]
pub const fn grid_position(index: usize) -> (usize, usize) {
    let row = index / COLUMNS;
    let offset = index % COLUMNS;
    let column = if row % 2 == 1 { COLUMNS - 1 - offset } else { offset };
    (row, column)
}

/// Track cells in reading order, row by row.
#[must_use]
pub fn display_order() -> [usize; ROWS * COLUMNS] {
    let mut order = [0; ROWS * COLUMNS];
    for index in 0..TRACK_LEN {
        let (row, column) = grid_position(index);
        order[row * COLUMNS + column] = index;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_position() {
        assert_eq!(grid_position(0), (0, 0));
        assert_eq!(grid_position(9), (0, 9));
        assert_eq!(grid_position(10), (1, 9));
        assert_eq!(grid_position(19), (1, 0));
        assert_eq!(grid_position(20), (2, 0));
        assert_eq!(grid_position(29), (2, 9));
    }

    #[test]
    fn test_every_cell_fits_the_grid() {
        let mut seen = [[false; COLUMNS]; ROWS];
        for index in 0..TRACK_LEN {
            let (row, column) = grid_position(index);
            assert!(row < ROWS && column < COLUMNS);
            assert!(!seen[row][column], "cell {index} overlaps another");
            seen[row][column] = true;
        }
    }

    #[test]
    fn test_display_order() {
        let order = display_order();
        assert_eq!(&order[..10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(&order[10..20], &[19, 18, 17, 16, 15, 14, 13, 12, 11, 10]);
        assert_eq!(&order[20..], &[20, 21, 22, 23, 24, 25, 26, 27, 28, 29]);
    }
}
