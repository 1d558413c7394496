//! Permissive textual matrix literals.
//!
//! Rows are separated by `;`, columns by `,`. Any token that does not
//! parse as a real number, including the empty token, becomes `0.0`.
//! Rows may be ragged; the matrix takes the widest row and shorter rows
//! are zero-padded on the right. A trailing `;` appends a zero row.
//!
//! ```rust
//! use oneka_matrix::Matrix;
//!
//! let a = Matrix::from_text("1,2,3; 4,5,6");
//! let b = Matrix::from_text("1,,; ,,6");
//! let c = Matrix::from_text("1,2,3; 4,5,6;");
//!
//! assert_eq!((a.rows(), a.cols()), (2, 3));
//! assert_eq!(b.get(0, 1), 0.0);
//! assert_eq!(b.get(1, 2), 6.0);
//! assert_eq!(c.rows(), 3);
//! assert_eq!(c.get(2, 0), 0.0);
//! ```

use crate::matrix::Matrix;

/// Characters a literal may contain. Anything else is a caller bug.
fn legal(c: char) -> bool {
    matches!(c, '-' | '0'..='9' | 'e' | 'E' | '.' | ',' | ';' | ' ' | '\t')
}

impl Matrix {
    /// Parses a permissive row-major matrix literal.
    ///
    /// # Panics
    ///
    /// Panics if `text` contains a character outside the literal
    /// alphabet `{-, 0-9, e, E, ., ',', ';', space, tab}`.
    pub fn from_text(text: &str) -> Self {
        assert!(
            text.chars().all(legal),
            "matrix literal contains a character outside the legal alphabet: {text:?}"
        );

        let rows: Vec<Vec<f64>> = text
            .split(';')
            .map(|row| {
                row.split(',')
                    .map(|token| token.trim_matches([' ', '\t']).parse::<f64>().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        let n_rows = rows.len();
        let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut out = Matrix::zeros(n_rows, n_cols);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                out.set(i, j, value);
            }
        }
        out
    }
}
