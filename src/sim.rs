use crate::{
    grid::Grid,
    policy::{ChgForOccupiedN, OccupiedCounter},
    seat::SeatMap,
    Error,
};

pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// Final grid of a run, and how many transitions were applied to reach it
/// (the last one, which changes nothing, included).
#[derive(Debug, Clone)]
pub struct Stable<T> {
    pub grid: Grid<T>,
    pub iterations: usize,
}

/// One simultaneous transition, every new cell only depends on `seat_map`.
pub fn step<C: OccupiedCounter + ?Sized>(
    seat_map: &SeatMap,
    counter: &C,
    rule: &ChgForOccupiedN,
) -> SeatMap {
    let counts = counter.occupied_counts(seat_map);
    Grid::par_from_fn(seat_map.row_n(), seat_map.col_n(), |pos| {
        rule.apply(seat_map[pos], counts[pos])
    })
}

pub fn run_until_stable<T, F>(initial: &Grid<T>, transition: F) -> Result<Stable<T>, Error>
where
    T: Clone + PartialEq,
    F: FnMut(&Grid<T>) -> Grid<T>,
{
    run_until_stable_within(initial, transition, DEFAULT_STEP_LIMIT)
}

pub fn run_until_stable_within<T, F>(
    initial: &Grid<T>,
    mut transition: F,
    step_limit: usize,
) -> Result<Stable<T>, Error>
where
    T: Clone + PartialEq,
    F: FnMut(&Grid<T>) -> Grid<T>,
{
    let mut cur = initial.clone();
    for iterations in 1..=step_limit {
        let next = transition(&cur);
        if next == cur {
            return Ok(Stable {
                grid: next,
                iterations,
            });
        }

        cur = next;
    }

    Err(Error::NonConvergence(step_limit))
}
