//! Dense square matrices stored row-major, plus the Vandermonde builder.

/// Square matrix of `f64` entries in a flat row-major buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(n: usize) -> Self {
        Matrix {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n);
        for i in 0..n {
            *m.get_mut(i, i) = 1.0;
        }
        m
    }

    /// Build from explicit rows. Every row must have length `rows.len()`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "matrix rows must be square");
            data.extend_from_slice(row);
        }
        Matrix { n, data }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.idx(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.idx(row, 0);
        &self.data[start..start + self.n]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.n;
        let start_a = a * n;
        let start_b = b * n;
        for offset in 0..n {
            self.data.swap(start_a + offset, start_b + offset);
        }
    }

    /// Divide every entry of `row` by `divisor`.
    pub fn scale_row(&mut self, row: usize, divisor: f64) {
        let start = row * self.n;
        for cell in &mut self.data[start..start + self.n] {
            *cell /= divisor;
        }
    }

    /// Subtract `factor` times row `source` from row `target`.
    pub fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        debug_assert_ne!(target, source);
        if factor == 0.0 {
            return;
        }
        let n = self.n;
        let lo = target.min(source);
        let hi = target.max(source);
        let (head, tail) = self.data.split_at_mut(hi * n);
        let low_row = &mut head[lo * n..lo * n + n];
        let high_row = &mut tail[..n];
        let (target_row, source_row): (&mut [f64], &[f64]) = if target < source {
            (low_row, high_row)
        } else {
            (high_row, low_row)
        };
        for (t, s) in target_row.iter_mut().zip(source_row) {
            *t -= factor * s;
        }
    }

    /// Largest absolute entry; 0.0 for the empty matrix.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

/// Build the k x k Vandermonde matrix for the given x values: entry (i, j)
/// is xs[i]^j by running-power accumulation, so column 0 is exactly 1.0 even
/// when xs[i] is 0.
pub fn vandermonde(xs: &[f64]) -> Matrix {
    let k = xs.len();
    let mut m = Matrix::zeros(k);
    for (i, &x) in xs.iter().enumerate() {
        let mut power = 1.0;
        for j in 0..k {
            *m.get_mut(i, j) = power;
            power *= x;
        }
    }
    m
}
