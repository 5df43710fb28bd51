use crate::error::GridError;

/// A cell whose liveness changed, together with its new state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// Fixed-size toroidal board holding cell liveness.
///
/// Cells live in a flat row-major array; a same-shaped scratch array holds
/// the neighbour counts of the generation being evaluated, so that `step`
/// reads one consistent snapshot before mutating any liveness.
#[derive(Debug)]
pub struct Grid {
    alive: Vec<bool>,
    neighbours: Vec<u8>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Creates a `height x width` board with every cell dead.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }
        let size = height * width;
        Ok(Self {
            alive: vec![false; size],
            neighbours: vec![0; size],
            height,
            width,
        })
    }

    /// `(height, width)` of the board.
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Liveness of the cell at `(row, col)`. The coordinate must be in range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.alive[row * self.width + col]
    }

    /// Flips the cell at `(row, col)` and returns its new liveness.
    ///
    /// Coordinates are signed so that out-of-range input (negative included)
    /// is rejected with `OutOfBounds` instead of being unrepresentable.
    pub fn toggle(&mut self, row: i64, col: i64) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        self.alive[idx] = !self.alive[idx];
        Ok(self.alive[idx])
    }

    fn index(&self, row: i64, col: i64) -> Result<usize, GridError> {
        if row < 0 || row >= self.height as i64 || col < 0 || col >= self.width as i64 {
            return Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row as usize * self.width + col as usize)
    }

    /// Number of live cells among the 8 neighbours of `(row, col)`.
    ///
    /// Rows and columns wrap at every edge, so the last column is adjacent
    /// to the first (and likewise for rows).
    pub fn count_alive_neighbours(&self, row: usize, col: usize) -> u8 {
        let r1 = if row == 0 { self.height - 1 } else { row - 1 };
        let r2 = if row == self.height - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { self.width - 1 } else { col - 1 };
        let c2 = if col == self.width - 1 { 0 } else { col + 1 };
        self.get(r1, c1) as u8
            + self.get(r1, col) as u8
            + self.get(r1, c2) as u8
            + self.get(row, c1) as u8
            + self.get(row, c2) as u8
            + self.get(r2, c1) as u8
            + self.get(r2, col) as u8
            + self.get(r2, c2) as u8
    }

    /// Advances the board one generation (B3/S23) and returns every cell
    /// whose liveness changed; unchanged cells are never reported.
    ///
    /// Counting is a read-only pass over the whole board: no liveness is
    /// written until every neighbour count has been taken from the prior
    /// generation.
    pub fn step(&mut self) -> Vec<CellChange> {
        for row in 0..self.height {
            for col in 0..self.width {
                self.neighbours[row * self.width + col] = self.count_alive_neighbours(row, col);
            }
        }

        let mut changes = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                let neibs = self.neighbours[idx];
                let next = if self.alive[idx] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                if next != self.alive[idx] {
                    self.alive[idx] = next;
                    changes.push(CellChange {
                        row,
                        col,
                        alive: next,
                    });
                }
            }
        }
        changes
    }
}
