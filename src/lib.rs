use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;

mod grid;
mod policy;
mod seat;
mod sim;

pub use grid::{Direction, Grid, GridBuilder, Position};
pub use policy::{
    adjacent_occupied_count, visible_occupied_counts, ChgForOccupiedN, Env8Neighbors,
    OccupiedCounter, Policy, Visible8Neighbors,
};
pub use seat::{CellState, SeatMap};
pub use sim::{run_until_stable, run_until_stable_within, step, Stable, DEFAULT_STEP_LIMIT};

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InconsistentRow(usize, usize), // (element count of current row, expect count of elements in earlier rows).
    InvalidSeatChar(char),
    NonConvergence(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InconsistentRow(cur_count, expect_count) => write!(
                f,
                "Given row({} elements), expect row which have {} elements.",
                cur_count, expect_count
            ),
            Error::InvalidSeatChar(c) => write!(f, "Invalid character({}) for seat", c),
            Error::NonConvergence(step_limit) => write!(
                f,
                "Seats layout doesn't stabilize within {} step(s).",
                step_limit
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Print the stable seats layout before the summary.
    #[arg(long)]
    pub show_final: bool,
}

pub fn read_seat_map<P: AsRef<Path>>(path: P) -> Result<SeatMap, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    let mut builder = GridBuilder::<CellState>::new();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        if s.trim().is_empty() {
            continue;
        }
        builder.push_row_text(&s)?;
    }

    Ok(builder.build())
}
