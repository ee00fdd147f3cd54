use crate::{
    grid::{Direction, Grid, Position},
    seat::{CellState, SeatMap},
    sim::{self, Stable},
    Error,
};

/// Count, for every cell, the occupied seats which matter to it.
pub trait OccupiedCounter {
    fn occupied_counts(&self, seat_map: &SeatMap) -> Grid<usize>;
}

/// The 8 cells right around each cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env8Neighbors;

impl OccupiedCounter for Env8Neighbors {
    fn occupied_counts(&self, seat_map: &SeatMap) -> Grid<usize> {
        Grid::par_from_fn(seat_map.row_n(), seat_map.col_n(), |pos| {
            adjacent_occupied_count(seat_map, pos.r as isize, pos.c as isize)
        })
    }
}

/// The first seat seen in each of the 8 directions, floor doesn't block sight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visible8Neighbors;

impl OccupiedCounter for Visible8Neighbors {
    fn occupied_counts(&self, seat_map: &SeatMap) -> Grid<usize> {
        visible_occupied_counts(seat_map)
    }
}

pub fn adjacent_occupied_count(seat_map: &SeatMap, r: isize, c: isize) -> usize {
    Direction::all()
        .iter()
        .map(|dir| dir.offset())
        .filter(|(dr, dc)| match (r.checked_add(*dr), c.checked_add(*dc)) {
            (Some(nr), Some(nc)) => seat_map.cell_at(nr, nc) == CellState::Occupied,
            _ => false,
        })
        .count()
}

/// Walks every ray once, from the border where it enters the grid, instead of
/// looking around from each seat. Floor cells always get 0.
pub fn visible_occupied_counts(seat_map: &SeatMap) -> Grid<usize> {
    let mut counts = Grid::filled(seat_map.row_n(), seat_map.col_n(), 0);
    let perimeter = seat_map.perimeter();
    for &dir in Direction::all() {
        let back_dir = dir.opposite();
        let starts = perimeter.iter().filter(|pos| {
            pos.along_dir(back_dir)
                .map_or(true, |back_pos| seat_map.get(&back_pos).is_none())
        });
        for start in starts {
            walk_ray(seat_map, &mut counts, *start, dir);
        }
    }

    counts
}

fn walk_ray(seat_map: &SeatMap, counts: &mut Grid<usize>, start: Position, dir: Direction) {
    let mut last_seat = None;
    let mut cur_pos = Some(start);
    while let Some(pos) = cur_pos {
        let Some(&state) = seat_map.get(&pos) else {
            break;
        };
        if state.is_seat() {
            if last_seat == Some(CellState::Occupied) {
                counts[pos] += 1;
            }
            last_seat = Some(state);
        }
        cur_pos = pos.along_dir(dir);
    }
}

/// Empty seat gets occupied if no occupied seat counts for it, occupied seat
/// gets empty if at least `leave_n` of them count.
#[derive(Debug, Clone, Copy)]
pub struct ChgForOccupiedN {
    leave_n: usize,
}

impl ChgForOccupiedN {
    pub fn new(leave_n: usize) -> Self {
        Self { leave_n }
    }

    pub fn leave_n(&self) -> usize {
        self.leave_n
    }

    pub fn apply(&self, state: CellState, occupied_n: usize) -> CellState {
        match state {
            CellState::Empty if occupied_n == 0 => CellState::Occupied,
            CellState::Occupied if occupied_n >= self.leave_n => CellState::Empty,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Adjacent,
    Visible,
}

impl Policy {
    pub fn rule(&self) -> ChgForOccupiedN {
        match self {
            Policy::Adjacent => ChgForOccupiedN::new(4),
            Policy::Visible => ChgForOccupiedN::new(5),
        }
    }

    pub fn step(&self, seat_map: &SeatMap) -> SeatMap {
        match self {
            Policy::Adjacent => sim::step(seat_map, &Env8Neighbors, &self.rule()),
            Policy::Visible => sim::step(seat_map, &Visible8Neighbors, &self.rule()),
        }
    }

    pub fn run_until_stable(&self, seat_map: &SeatMap) -> Result<Stable<CellState>, Error> {
        sim::run_until_stable(seat_map, |sm| self.step(sm))
    }
}
