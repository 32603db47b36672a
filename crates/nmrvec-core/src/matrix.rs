//! Row-major matrix views.
//!
//! Two physical layouts are in use for 2D spectra:
//!
//! - **Row matrix**: independently allocated rows, each at least `cols`
//!   long ([`RowMatrix`], [`RowMatrixMut`]).
//! - **Flat matrix**: one contiguous block of `rows * cols` values
//!   ([`FlatMatrix`], [`FlatMatrixMut`]).
//!
//! Each layout has its own view type, so a flat block cannot be handed to
//! the row-matrix copy by mistake.

/// Read-only view over a contiguous row-major block.
#[derive(Clone, Copy, Debug)]
pub struct FlatMatrix<'a> {
    data: &'a [f32],
    cols: usize,
    rows: usize,
}

impl<'a> FlatMatrix<'a> {
    /// Create a view of `rows x cols` values.
    ///
    /// Returns `None` if either dimension is zero or `data` is too short.
    #[must_use]
    pub fn new(data: &'a [f32], cols: usize, rows: usize) -> Option<Self> {
        let size = cols.checked_mul(rows)?;
        if size == 0 || data.len() < size {
            return None;
        }
        Some(Self {
            data: &data[..size],
            cols,
            rows,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Flattened values.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &'a [f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Read one cell.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }
}

/// Mutable view over a contiguous row-major block.
#[derive(Debug)]
pub struct FlatMatrixMut<'a> {
    data: &'a mut [f32],
    cols: usize,
    rows: usize,
}

impl<'a> FlatMatrixMut<'a> {
    /// Create a mutable view of `rows x cols` values.
    ///
    /// Returns `None` if either dimension is zero or `data` is too short.
    #[must_use]
    pub fn new(data: &'a mut [f32], cols: usize, rows: usize) -> Option<Self> {
        let size = cols.checked_mul(rows)?;
        if size == 0 || data.len() < size {
            return None;
        }
        Some(Self {
            data: &mut data[..size],
            cols,
            rows,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Flattened values.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Reborrow as a read-only view.
    #[must_use]
    pub fn as_view(&self) -> FlatMatrix<'_> {
        FlatMatrix {
            data: &*self.data,
            cols: self.cols,
            rows: self.rows,
        }
    }

    /// Write one cell.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }
}

/// Read-only view over independently allocated rows.
#[derive(Debug)]
pub struct RowMatrix<'a, R> {
    rows: &'a [R],
    cols: usize,
}

impl<'a, R: AsRef<[f32]>> RowMatrix<'a, R> {
    /// Create a view of `rows.len()` rows of `cols` values each.
    ///
    /// Returns `None` if there are no rows, `cols` is zero, or any row is
    /// shorter than `cols`.
    #[must_use]
    pub fn new(rows: &'a [R], cols: usize) -> Option<Self> {
        if rows.is_empty() || cols == 0 || rows.iter().any(|r| r.as_ref().len() < cols) {
            return None;
        }
        Some(Self { rows, cols })
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Borrow one row, trimmed to `cols`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f32] {
        &self.rows[row].as_ref()[..self.cols]
    }
}

/// Mutable view over independently allocated rows.
#[derive(Debug)]
pub struct RowMatrixMut<'a, R> {
    rows: &'a mut [R],
    cols: usize,
}

impl<'a, R: AsMut<[f32]>> RowMatrixMut<'a, R> {
    /// Create a mutable view of `rows.len()` rows of `cols` values each.
    ///
    /// Returns `None` under the same conditions as [`RowMatrix::new`].
    #[must_use]
    pub fn new(rows: &'a mut [R], cols: usize) -> Option<Self> {
        if rows.is_empty() || cols == 0 || rows.iter_mut().any(|r| r.as_mut().len() < cols) {
            return None;
        }
        Some(Self { rows, cols })
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Borrow one row mutably, trimmed to `cols`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let cols = self.cols;
        &mut self.rows[row].as_mut()[..cols]
    }
}

/// Copy a row matrix row by row.
///
/// Returns the number of values copied, or `0` if the shapes differ.
pub fn matrix_copy<D, S>(dest: &mut RowMatrixMut<'_, D>, src: &RowMatrix<'_, S>) -> usize
where
    D: AsMut<[f32]>,
    S: AsRef<[f32]>,
{
    if dest.cols() != src.cols() || dest.rows() != src.rows() {
        return 0;
    }
    for row in 0..src.rows() {
        dest.row_mut(row).copy_from_slice(src.row(row));
    }
    src.cols() * src.rows()
}

/// Copy a flat matrix in one pass.
///
/// Returns the number of values copied, or `0` if the shapes differ.
pub fn matrix_copy_single(dest: &mut FlatMatrixMut<'_>, src: &FlatMatrix<'_>) -> usize {
    if dest.cols() != src.cols() || dest.rows() != src.rows() {
        return 0;
    }
    dest.as_mut_slice().copy_from_slice(src.as_slice());
    src.as_slice().len()
}
