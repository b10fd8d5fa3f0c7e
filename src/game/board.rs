use super::player::Token;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Direction pairs scanned outward from an anchor cell: horizontal, vertical,
/// the `\` diagonal and the `/` diagonal, as (row step, column step).
const AXES: [[(isize, isize); 2]; 4] = [
    [(0, -1), (0, 1)],
    [(-1, 0), (1, 0)],
    [(-1, -1), (1, 1)],
    [(-1, 1), (1, -1)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece landed at this cell.
    Placed { row: usize, column: usize },
    /// The column was full or out of range; the board is unchanged.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom. Positions off the board read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Row a piece dropped into `col` would land in, scanning from the bottom up.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column
    pub fn drop(&mut self, col: usize, token: Token) -> DropResult {
        match self.lowest_empty_row(col) {
            Some(row) => {
                self.cells[row][col] = token.to_cell();
                DropResult::Placed { row, column: col }
            }
            None => DropResult::Rejected,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check whether `token`'s piece at (row, col) completes four in a line.
    pub fn is_winning_placement(&self, row: usize, col: usize, token: Token) -> bool {
        let cell = token.to_cell();
        if self.get(row, col) != cell {
            return false;
        }

        AXES.iter().any(|[forward, backward]| {
            self.count_direction(row, col, *forward, cell)
                + self.count_direction(row, col, *backward, cell)
                > 2
        })
    }

    /// Consecutive `cell` pieces strictly beyond (row, col) along one direction.
    fn count_direction(&self, row: usize, col: usize, (dr, dc): (isize, isize), cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row.checked_add_signed(dr);
        let mut c = col.checked_add_signed(dc);

        while let (Some(rr), Some(cc)) = (r, c) {
            if rr >= ROWS || cc >= COLS || self.cells[rr][cc] != cell {
                break;
            }
            count += 1;
            r = rr.checked_add_signed(dr);
            c = cc.checked_add_signed(dc);
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
