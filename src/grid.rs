use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRS: [Direction; 8] = [
            Direction::TopLeft,
            Direction::Top,
            Direction::TopRight,
            Direction::Left,
            Direction::Right,
            Direction::BottomLeft,
            Direction::Bottom,
            Direction::BottomRight,
        ];

        &ALL_DIRS
    }

    // (delta of row, delta of column).
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::BottomLeft => (1, -1),
            Direction::Bottom => (1, 0),
            Direction::BottomRight => (1, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::TopLeft => Direction::BottomRight,
            Direction::Top => Direction::Bottom,
            Direction::TopRight => Direction::BottomLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::BottomLeft => Direction::TopRight,
            Direction::Bottom => Direction::Top,
            Direction::BottomRight => Direction::TopLeft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Neighbor position along given direction, `None` if it would go below index 0.
    /// The upper bound isn't checked here, it's up to the grid.
    pub fn along_dir(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        Some(Position::new(
            self.r.checked_add_signed(dr)?,
            self.c.checked_add_signed(dc)?,
        ))
    }
}

/// Rectangular grid, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: usize,
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let mut builder = GridBuilder::<T>::new();
        for row in rows {
            builder.push_row(row)?;
        }

        Ok(builder.build())
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        self.pos_to_ind(pos).map(|ind| &self.tiles[ind])
    }

    pub fn get_mut(&mut self, pos: &Position) -> Option<&mut T> {
        self.pos_to_ind(pos).map(|ind| &mut self.tiles[ind])
    }

    pub fn tiles(&self) -> impl Iterator<Item = &T> {
        self.tiles.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.row_n).map(move |r| &self.tiles[(r * self.col_n)..((r + 1) * self.col_n)])
    }

    /// Every cell on the border of this grid, each one listed once.
    pub fn perimeter(&self) -> Vec<Position> {
        let mut poss = Vec::new();
        if self.row_n == 0 || self.col_n == 0 {
            return poss;
        }

        let last_r = self.row_n - 1;
        let last_c = self.col_n - 1;
        poss.extend((0..self.col_n).map(|c| Position::new(0, c)));
        if last_r > 0 {
            poss.extend((0..self.col_n).map(|c| Position::new(last_r, c)));
        }
        for r in 1..last_r {
            poss.push(Position::new(r, 0));
            if last_c > 0 {
                poss.push(Position::new(r, last_c));
            }
        }

        poss
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r >= self.row_n || pos.c >= self.col_n {
            None
        } else {
            Some(pos.r * self.col_n + pos.c)
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(row_n: usize, col_n: usize, value: T) -> Self {
        Self {
            tiles: vec![value; row_n * col_n],
            row_n,
            col_n,
        }
    }
}

impl<T: Send> Grid<T> {
    /// Build a grid by evaluating `f` on every position, one parallel task per row.
    pub fn par_from_fn<F>(row_n: usize, col_n: usize, f: F) -> Self
    where
        F: Fn(Position) -> T + Sync + Send,
    {
        let rows: Vec<Vec<T>> = (0..row_n)
            .into_par_iter()
            .map(|r| (0..col_n).map(|c| f(Position::new(r, c))).collect())
            .collect();
        let tiles = rows.into_iter().flatten().collect();

        Self {
            tiles,
            row_n,
            col_n,
        }
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        match self.get(&pos) {
            Some(t) => t,
            None => panic!(
                "Position{} is out of grid({} x {}).",
                pos, self.row_n, self.col_n
            ),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let (row_n, col_n) = (self.row_n, self.col_n);
        match self.get_mut(&pos) {
            Some(t) => t,
            None => panic!("Position{} is out of grid({} x {}).", pos, row_n, col_n),
        }
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t)?;
            }
        }

        Ok(())
    }
}

pub struct GridBuilder<T> {
    tiles: Vec<T>,
    row_n: usize,
    col_n: Option<usize>,
}

impl<T> GridBuilder<T> {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn push_row<I: IntoIterator<Item = T>>(&mut self, row: I) -> Result<(), Error> {
        let old_len = self.tiles.len();
        self.tiles.extend(row);
        let this_col_n = self.tiles.len() - old_len;
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            self.tiles.truncate(old_len);
            return Err(Error::InconsistentRow(this_col_n, expect_col_n));
        }

        self.row_n += 1;
        Ok(())
    }

    pub fn build(self) -> Grid<T> {
        Grid {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

impl<T> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
