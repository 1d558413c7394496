//! The dense row-major matrix type.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A rectangular dense block of `f64` with row-major contiguous storage.
///
/// Either both dimensions are zero (the empty matrix) or both are
/// positive; the backing buffer always holds exactly `rows * cols`
/// elements. Cloning is a deep copy; there is no shared ownership.
///
/// Element access is bounds-checked in debug builds. Shape mismatches in
/// the arithmetic routines of this crate are contract violations and
/// panic rather than returning errors.
#[derive(Clone, Debug, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an empty 0 x 0 matrix.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Creates a `rows` x `cols` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are zero or both are positive.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(
            (rows == 0) == (cols == 0),
            "matrix dimensions must be both zero or both positive: {rows} x {cols}"
        );
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a `rows` x `cols` matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are zero or both are positive.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        assert!(
            (rows == 0) == (cols == 0),
            "matrix dimensions must be both zero or both positive: {rows} x {cols}"
        );
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Creates a `rows` x `cols` matrix from a row-major slice.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`, or if exactly one
    /// dimension is zero.
    pub fn from_slice(rows: usize, cols: usize, data: &[f64]) -> Self {
        assert!(
            (rows == 0) == (cols == 0),
            "matrix dimensions must be both zero or both positive: {rows} x {cols}"
        );
        assert_eq!(
            data.len(),
            rows * cols,
            "slice length {} does not match shape {rows} x {cols}",
            data.len()
        );
        Self {
            rows,
            cols,
            data: data.to_vec(),
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` for the 0 x 0 matrix.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Destructively resizes to `rows` x `cols`, discarding the contents
    /// and zero-filling. Resizing to the current shape still zero-fills.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are zero or both are positive.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        assert!(
            (rows == 0) == (cols == 0),
            "matrix dimensions must be both zero or both positive: {rows} x {cols}"
        );
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, 0.0);
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Returns the element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows, "row {row} out of range ({})", self.rows);
        debug_assert!(col < self.cols, "col {col} out of range ({})", self.cols);
        self.data[row * self.cols + col]
    }

    /// Sets the element at `(row, col)` to `value`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows, "row {row} out of range ({})", self.rows);
        debug_assert!(col < self.cols, "col {col} out of range ({})", self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Read-only access to the raw row-major storage.
    #[inline]
    pub fn base(&self) -> &[f64] {
        &self.data
    }

    /// Read-only access to the raw storage starting at `(row, col)`.
    ///
    /// The returned slice runs to the end of the buffer; the dot-product
    /// layer reads it with an explicit length and stride.
    #[inline]
    pub fn base_at(&self, row: usize, col: usize) -> &[f64] {
        debug_assert!(row < self.rows, "row {row} out of range ({})", self.rows);
        debug_assert!(col < self.cols, "col {col} out of range ({})", self.cols);
        &self.data[row * self.cols + col..]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

/// Renders rows on separate lines with right-aligned fixed-width fields.
/// No brackets, no trailing blank line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(12);
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.get(i, j))?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
