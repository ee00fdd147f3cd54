use anyhow::{Context, Result};
use clap::Parser;
use seat_automaton::{CLIArgs, Policy};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let seat_map = seat_automaton::read_seat_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read map of seats layout from given input file({}).",
            args.input_path.display()
        )
    })?;

    let stable = Policy::Adjacent
        .run_until_stable(&seat_map)
        .context("Failed to stabilize seats layout when counting adjacent seats.")?;
    if args.show_final {
        println!("{}", stable.grid);
    }
    println!(
        "After {} iteration(s), given seats layout stabilizes, and there are {} occupied seats.",
        stable.iterations,
        stable.grid.occupied_n()
    );

    Ok(())
}
