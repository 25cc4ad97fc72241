//! Occupancy grid for piece placements.
//!
//! A placement is an `rows x cols` grid stored as a flat row-major array where
//! each cell is either occupied by one piece or empty. Enumerators build
//! placements, attack predicates inspect them, and the symmetry deduplicator
//! compares them under the transforms in `geometry`.

use crate::geometry::Symmetry;
use crate::pieces::Coord;

/// A set of occupied cells on a `rows x cols` board.
///
/// Ordering compares shape first and then the row-major cells, which is what
/// `canonical_key` minimizes over.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Placement {
    /// An empty `rows x cols` grid.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Builds a placement from `(row, col)` cells.
    ///
    /// Panics if a cell lies outside the board.
    pub fn from_cells(rows: usize, cols: usize, cells: impl IntoIterator<Item = Coord>) -> Self {
        let mut placement = Self::empty(rows, cols);
        for (row, col) in cells {
            placement.set(row, col);
        }
        placement
    }

    /// Builds a placement from row-major cell indices (`row * cols + col`).
    pub fn from_indices(rows: usize, cols: usize, indices: &[usize]) -> Self {
        let mut placement = Self::empty(rows, cols);
        for &index in indices {
            placement.cells[index] = true;
        }
        placement
    }

    /// Builds a square placement with one piece per row: row `r` holds a
    /// piece in column `permutation[r]`.
    pub fn from_permutation(permutation: &[usize]) -> Self {
        let size = permutation.len();
        Self::from_cells(size, size, permutation.iter().copied().enumerate())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = true;
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Builds a new grid of the given shape where cell `(r, c)` copies
    /// `self` at `source(r, c)`.
    fn remap(&self, rows: usize, cols: usize, source: impl Fn(usize, usize) -> Coord) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let (src_row, src_col) = source(row, col);
                cells.push(self.is_occupied(src_row, src_col));
            }
        }
        Self { rows, cols, cells }
    }

    /// Rotates the grid 90 degrees counterclockwise.
    ///
    /// The result is `cols x rows`; the top row of the result is the
    /// rightmost column of the input.
    pub fn rotate_90(&self) -> Self {
        let last_col = self.cols - 1;
        self.remap(self.cols, self.rows, |row, col| (col, last_col - row))
    }

    /// Mirrors left to right (reverses every row).
    pub fn flip_horizontal(&self) -> Self {
        let last_col = self.cols - 1;
        self.remap(self.rows, self.cols, |row, col| (row, last_col - col))
    }

    /// Mirrors top to bottom (reverses the row order).
    pub fn flip_vertical(&self) -> Self {
        let last_row = self.rows - 1;
        self.remap(self.rows, self.cols, |row, col| (last_row - row, col))
    }

    /// The 8 images of this placement under the symmetries of the square,
    /// in `Symmetry::ALL` order.
    pub fn images(&self) -> [Placement; 8] {
        Symmetry::ALL.map(|symmetry| symmetry.apply(self))
    }
}

/// Computes the canonical form of a placement: its smallest image under the
/// 8 symmetries.
///
/// Two placements are related by a symmetry exactly when their canonical keys
/// are equal.
pub fn canonical_key(placement: &Placement) -> Placement {
    let [identity, rest @ ..] = placement.images();
    rest.into_iter()
        .fold(identity, |smallest, image| smallest.min(image))
}

/// Formats a placement as one text line per row, `Q` for an occupied cell and
/// `.` for an empty one.
pub fn format_placement(placement: &Placement) -> String {
    let mut output = String::with_capacity(placement.rows * (placement.cols + 1));
    for row in 0..placement.rows {
        for col in 0..placement.cols {
            output.push(if placement.is_occupied(row, col) {
                'Q'
            } else {
                '.'
            });
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_permutation_places_one_piece_per_row() {
        let placement = Placement::from_permutation(&[1, 3, 0, 2]);
        assert_eq!(placement.rows(), 4);
        assert_eq!(placement.cols(), 4);
        assert_eq!(placement.count(), 4);
        assert_eq!(
            placement.occupied().collect::<Vec<_>>(),
            vec![(0, 1), (1, 3), (2, 0), (3, 2)]
        );
    }

    #[test]
    fn test_from_indices_matches_from_cells() {
        let by_index = Placement::from_indices(2, 3, &[1, 5]);
        let by_cell = Placement::from_cells(2, 3, [(0, 1), (1, 2)]);
        assert_eq!(by_index, by_cell);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_from_cells_rejects_out_of_bounds() {
        Placement::from_cells(2, 2, [(2, 0)]);
    }

    #[test]
    fn test_rotate_90_is_counterclockwise() {
        // top-left corner moves to bottom-left
        let placement = Placement::from_cells(3, 3, [(0, 0)]);
        assert_eq!(
            placement.rotate_90(),
            Placement::from_cells(3, 3, [(2, 0)])
        );
    }

    #[test]
    fn test_rotate_90_non_square_swaps_shape() {
        let placement = Placement::from_cells(2, 3, [(0, 2)]);
        let rotated = placement.rotate_90();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 2));
        assert_eq!(rotated, Placement::from_cells(3, 2, [(0, 0)]));
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let placement = Placement::from_cells(3, 4, [(0, 1), (2, 3), (1, 0)]);
        let rotated = placement.rotate_90().rotate_90().rotate_90().rotate_90();
        assert_eq!(rotated, placement);
    }

    #[test]
    fn test_flips_are_involutions() {
        let placement = Placement::from_cells(3, 3, [(0, 1), (2, 2)]);
        assert_eq!(placement.flip_horizontal().flip_horizontal(), placement);
        assert_eq!(placement.flip_vertical().flip_vertical(), placement);
        assert_eq!(
            placement.flip_horizontal(),
            Placement::from_cells(3, 3, [(0, 1), (2, 0)])
        );
        assert_eq!(
            placement.flip_vertical(),
            Placement::from_cells(3, 3, [(2, 1), (0, 2)])
        );
    }

    #[test]
    fn test_canonical_key_is_shared_by_all_images() {
        let placement = Placement::from_permutation(&[0, 2, 4, 1, 3]);
        let key = canonical_key(&placement);
        for image in placement.images() {
            assert_eq!(canonical_key(&image), key);
        }
    }

    #[test]
    fn test_canonical_key_separates_distinct_classes() {
        // the two fundamental 5-queens solutions
        let first = Placement::from_permutation(&[0, 2, 4, 1, 3]);
        let second = Placement::from_permutation(&[1, 4, 2, 0, 3]);
        assert_ne!(canonical_key(&first), canonical_key(&second));
    }

    #[test]
    fn test_format_placement() {
        let placement = Placement::from_permutation(&[1, 3, 0, 2]);
        assert_eq!(format_placement(&placement), ".Q..\n...Q\nQ...\n..Q.\n");
    }
}
