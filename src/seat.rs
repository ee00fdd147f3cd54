use std::{fmt::Display, str::FromStr};

use crate::{
    grid::{Grid, GridBuilder, Position},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Floor,
    Empty,
    Occupied,
}

impl TryFrom<char> for CellState {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(CellState::Floor),
            'L' => Ok(CellState::Empty),
            '#' => Ok(CellState::Occupied),
            other => Err(Error::InvalidSeatChar(other)),
        }
    }
}

impl From<CellState> for char {
    fn from(value: CellState) -> Self {
        match value {
            CellState::Floor => '.',
            CellState::Empty => 'L',
            CellState::Occupied => '#',
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl CellState {
    pub fn is_seat(&self) -> bool {
        *self != CellState::Floor
    }
}

pub type SeatMap = Grid<CellState>;

impl GridBuilder<CellState> {
    pub fn push_row_text(&mut self, row_text: &str) -> Result<(), Error> {
        let states = row_text
            .chars()
            .map(CellState::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.push_row(states)
    }
}

impl FromStr for Grid<CellState> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = GridBuilder::<CellState>::new();
        for l in s.lines().filter(|l| !l.trim().is_empty()) {
            builder.push_row_text(l)?;
        }

        Ok(builder.build())
    }
}

impl Grid<CellState> {
    /// State at (`r`, `c`), out of bounds counts as floor.
    pub fn cell_at(&self, r: isize, c: isize) -> CellState {
        match (usize::try_from(r), usize::try_from(c)) {
            (Ok(r), Ok(c)) => self
                .get(&Position::new(r, c))
                .copied()
                .unwrap_or(CellState::Floor),
            _ => CellState::Floor,
        }
    }

    pub fn count(&self, c_state: CellState) -> usize {
        self.tiles().filter(|s| **s == c_state).count()
    }

    pub fn occupied_n(&self) -> usize {
        self.count(CellState::Occupied)
    }
}
