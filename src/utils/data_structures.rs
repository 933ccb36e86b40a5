//! data structures shared by the solvers

/// stores a 2d matrix inside a single 1d array
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T: Clone + Copy> {
    pub data: Vec<T>,

    rows: usize,
    cols: usize,
}

impl<T: Clone + Copy> Matrix<T> {

    pub fn new(rows: usize, cols: usize, initial_value: T) -> Self {
        Matrix {
            data: vec![initial_value; rows * cols],
            rows,
            cols
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols, "column {} out of bounds ({})", col, self.cols);
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(col < self.cols, "column {} out of bounds ({})", col, self.cols);
        self.data[row * self.cols + col] = value;
    }
}

impl<T: Clone + Copy + Ord> Matrix<T> {

    /// returns true in case the value has been reduced, false otherwise
    pub fn reduce_value(&mut self, row: usize, col: usize, value: T) -> bool {
        debug_assert!(col < self.cols, "column {} out of bounds ({})", col, self.cols);
        let index = row * self.cols + col;

        let current_value = &mut self.data[index];

        if value < *current_value {
            *current_value = value;
            return true;
        }

        false
    }
}
