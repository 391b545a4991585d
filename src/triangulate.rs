//! # Triangulation policies
//!
//! A structured 2D grid of `rows * cols` points is turned into triangles by walking
//! every quad cell of the index grid and splitting it in two. The point with grid
//! index `(i, j)` lives at flat index `j * rows + i`, so `rows` is the fast index.
//!
//! Cells are visited in flat order and each cell always emits two consecutive
//! triangles. What varies between policies is _which_ diagonal a cell is split on:
//!
//! - [`FixedDiagonal`] always splits on the same diagonal. This is the layout most
//!   downstream tools expect from a plot3d reader and is the default.
//! - [`ShortestDiagonal`] looks at the point coordinates and splits each cell on its
//!   shorter diagonal, which avoids needle triangles on sheared grids.
//!
//! Other schemes can be plugged into [`read_with`](`crate::read_with`) by implementing
//! [`Triangulation`].

use crate::prelude::*;

/// Splits the quad cells of a structured 2D grid into triangles
pub trait Triangulation {
    /// Produce a `(n_cells, 3)` connectivity array for a grid with `rows` points along
    /// the fast index and `cols` along the slow index.
    ///
    /// `points` holds one row of coordinates per grid point. Purely topological
    /// policies may ignore it.
    ///
    /// ## Panics
    ///
    /// Geometric policies may panic if `points` has fewer than `rows * cols` rows
    fn triangulate<F: Float>(
        &self,
        rows: usize,
        cols: usize,
        points: ArrayView2<F>,
    ) -> Array2<usize>;
}

/// Always split a cell along the diagonal from its `(i + 1, j)` corner to its `(i, j + 1)` corner.
///
/// Cells are not split along the shorter diagonal, so strongly sheared cells can
/// produce poorly shaped triangles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedDiagonal;

/// Split every cell along whichever diagonal is shorter
///
/// Ties fall back to the [`FixedDiagonal`] split.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShortestDiagonal;

impl Triangulation for FixedDiagonal {
    fn triangulate<F: Float>(
        &self,
        rows: usize,
        cols: usize,
        _points: ArrayView2<F>,
    ) -> Array2<usize> {
        triangulate(rows, cols)
    }
}

impl Triangulation for ShortestDiagonal {
    fn triangulate<F: Float>(
        &self,
        rows: usize,
        cols: usize,
        points: ArrayView2<F>,
    ) -> Array2<usize> {
        split_cells(rows, cols, |cell| {
            // the fixed split runs from bottom right to top left
            let fixed = distance_squared(&points, cell.bottom_left + 1, cell.top_left);
            let other = distance_squared(&points, cell.bottom_left, cell.top_left + 1);

            if fixed <= other {
                cell.fixed_split()
            } else {
                cell.other_split()
            }
        })
    }
}

/// number of triangles produced for a `rows * cols` point grid, or `None` if it does
/// not fit in a `usize`. Grids with fewer than two points along either index have no
/// cells.
pub fn n_cells(rows: usize, cols: usize) -> Option<usize> {
    rows.saturating_sub(1)
        .checked_mul(cols.saturating_sub(1))
        .and_then(|quads| quads.checked_mul(2))
}

/// Triangulate a `rows * cols` point grid with the [`FixedDiagonal`] policy.
///
/// ```
/// let cells = plot3d::triangulate::triangulate(2, 2);
/// assert_eq!(cells.row(0).to_vec(), vec![0, 1, 2]);
/// assert_eq!(cells.row(1).to_vec(), vec![1, 3, 2]);
/// ```
///
/// ## Panics
///
/// Panics if the number of cells overflows a `usize`
pub fn triangulate(rows: usize, cols: usize) -> Array2<usize> {
    split_cells(rows, cols, Cell::fixed_split)
}

/// corner indices of a single quad cell
#[derive(Debug, Clone, Copy)]
struct Cell {
    bottom_left: usize,
    top_left: usize,
}

impl Cell {
    fn fixed_split(self) -> [[usize; 3]; 2] {
        let Cell {
            bottom_left,
            top_left,
        } = self;
        [
            [bottom_left, bottom_left + 1, top_left],
            [bottom_left + 1, top_left + 1, top_left],
        ]
    }

    fn other_split(self) -> [[usize; 3]; 2] {
        let Cell {
            bottom_left,
            top_left,
        } = self;
        [
            [bottom_left, bottom_left + 1, top_left + 1],
            [bottom_left, top_left + 1, top_left],
        ]
    }
}

fn split_cells<S>(rows: usize, cols: usize, mut split: S) -> Array2<usize>
where
    S: FnMut(Cell) -> [[usize; 3]; 2],
{
    let total = n_cells(rows, cols)
        .unwrap_or_else(|| panic!("cell count of a {rows}x{cols} grid overflows usize"));
    let mut cells = Array2::zeros((total, 3));

    if total == 0 {
        return cells;
    }

    let cells_per_row = rows - 1;

    for cell_index in 0..total / 2 {
        let row = cell_index / cells_per_row;
        let row_offset = cell_index % cells_per_row;

        let cell = Cell {
            bottom_left: row_offset + row * rows,
            top_left: row_offset + (row + 1) * rows,
        };

        tracing::trace!(
            cell_index,
            bottom_left = cell.bottom_left,
            top_left = cell.top_left,
            "splitting cell"
        );

        let [first, second] = split(cell);

        for (column, value) in first.into_iter().enumerate() {
            cells[[2 * cell_index, column]] = value;
        }
        for (column, value) in second.into_iter().enumerate() {
            cells[[2 * cell_index + 1, column]] = value;
        }
    }

    cells
}

fn distance_squared<F: Float>(points: &ArrayView2<F>, a: usize, b: usize) -> F {
    points
        .row(a)
        .iter()
        .zip(points.row(b).iter())
        .fold(F::zero(), |acc, (&pa, &pb)| acc + (pa - pb) * (pa - pb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn single_cell() {
        let cells = triangulate(2, 2);
        assert_eq!(cells, array![[0, 1, 2], [1, 3, 2]]);
    }

    #[test]
    fn cell_walk_uses_rows_as_fast_index() {
        // 3 points along the fast index, 2 along the slow one
        let cells = triangulate(3, 2);
        assert_eq!(
            cells,
            array![[0, 1, 3], [1, 4, 3], [1, 2, 4], [2, 5, 4]]
        );

        let cells = triangulate(2, 3);
        assert_eq!(
            cells,
            array![[0, 1, 2], [1, 3, 2], [2, 3, 4], [3, 5, 4]]
        );
    }

    #[test]
    fn cell_count_and_bounds() {
        for (rows, cols) in [(2, 2), (3, 7), (10, 4), (5, 5)] {
            let cells = triangulate(rows, cols);
            assert_eq!(cells.nrows(), 2 * (rows - 1) * (cols - 1));
            assert_eq!(cells.ncols(), 3);
            assert!(cells.iter().all(|&idx| idx < rows * cols));
        }
    }

    #[test]
    fn degenerate_grids_have_no_cells() {
        for (rows, cols) in [(0, 0), (0, 5), (1, 1), (1, 9), (9, 1)] {
            let cells = triangulate(rows, cols);
            assert_eq!(cells.dim(), (0, 3));
            assert_eq!(n_cells(rows, cols), Some(0));
        }
    }

    #[test]
    fn huge_shapes_do_not_wrap() {
        assert_eq!(n_cells(usize::MAX, 3), None);
        assert_eq!(n_cells(usize::MAX / 2 + 2, 2), None);
        assert_eq!(n_cells(usize::MAX, 1), Some(0));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn triangulate_huge_shape_panics() {
        triangulate(usize::MAX, usize::MAX);
    }

    #[test]
    fn fixed_policy_ignores_points() {
        let points: Array2<f64> = Array2::zeros((6, 2));
        assert_eq!(
            FixedDiagonal.triangulate(3, 2, points.view()),
            triangulate(3, 2)
        );
    }

    #[test]
    fn shortest_diagonal_matches_fixed_on_ties() {
        let points = array![[0., 0.], [1., 0.], [0., 1.], [1., 1.]];
        assert_eq!(
            ShortestDiagonal.triangulate(2, 2, points.view()),
            triangulate(2, 2)
        );
    }

    #[test]
    fn shortest_diagonal_flips_sheared_cell() {
        // bottom left and top right are close together, the fixed diagonal is long
        let points = array![[0., 0.], [1., 0.], [-1., 1.], [0.2, 0.2]];
        let cells = ShortestDiagonal.triangulate(2, 2, points.view());
        assert_eq!(cells, array![[0, 1, 3], [0, 3, 2]]);
    }
}
