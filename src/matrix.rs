use std::ops::Index;

/// A dense row-major matrix, used for adjacency and biadjacency results.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<W> {
    rows: usize,
    cols: usize,
    data: Vec<W>,
}

impl<W: Copy + Default> Matrix<W> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![W::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<W> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> &[W] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: W) {
        self.data[row * self.cols + col] = value;
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_symmetric(&self) -> bool
    where
        W: PartialEq,
    {
        self.is_square()
            && (0..self.rows).all(|i| (0..i).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl<W> Index<(usize, usize)> for Matrix<W> {
    type Output = W;

    fn index(&self, (row, col): (usize, usize)) -> &W {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
