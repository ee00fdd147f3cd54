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

    let stable = Policy::Visible
        .run_until_stable(&seat_map)
        .context("Failed to stabilize seats layout when counting visible seats.")?;
    if args.show_final {
        println!("{}", stable.grid);
    }
    println!(
        "With visible seats counted, after {} iteration(s), given seats layout stabilizes, and there are {} occupied seats.",
        stable.iterations,
        stable.grid.occupied_n()
    );

    Ok(())
}
