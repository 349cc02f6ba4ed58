//! Solves a classic puzzle and prints the per-strategy statistics.
//!
//! ```sh
//! cargo run --example solve_classic
//! ```

use gridsieve_core::{Descriptor, Grid, Layout};
use gridsieve_solver::StrategySolver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::parse(
        Layout::CLASSIC,
        "
        14_ _9_ ___
        _28 3__ __9
        _6_ 7__ ___
        _95 42_ ___
        _84 9__ _3_
        ___ _75 94_
        8__ __7 _9_
        4__ __9 178
        ___ _8_ _63
        ",
    )?;

    let mut space = Descriptor::from_grid(&grid);
    let solver = StrategySolver::with_all_strategies();
    let (solved, stats) = solver.solve(&mut space)?;

    println!("{}", space.to_grid());
    println!();
    if solved {
        println!("solved in {} steps", stats.total_steps);
    } else {
        println!("stuck after {} steps", stats.total_steps);
    }
    let mut applications: Vec<_> = stats.applications.iter().collect();
    applications.sort();
    for (name, count) in applications {
        println!("  {name}: {count}");
    }

    Ok(())
}
