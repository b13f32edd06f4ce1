//! Rental Binary
//!
//! Optimizes the two-lot rental exchange in place and prints the value
//! grid and transfer policy, rows indexed by lot A stock.
//!
//! Options: --capacity, --max-move, --gamma, --tolerance, --sweeps, --json

use anyhow::Result;
use clap::Parser;
use sweeps::rental::Rates;
use sweeps::rental::RentalExchange;
use sweeps::solver::Discipline;
use sweeps::solver::Solver;

#[derive(Parser)]
#[command(about = "solve the two-lot rental exchange")]
struct Args {
    /// Cars each lot can hold.
    #[arg(long, default_value_t = 20)]
    capacity: usize,
    /// Cars one overnight move can shuttle.
    #[arg(long, default_value_t = 5)]
    max_move: usize,
    /// Discount factor.
    #[arg(long, default_value_t = 0.9)]
    gamma: f64,
    /// Stop once a sweep moves the table by no more than this, summed
    /// over all cells.
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,
    /// Sweep budget.
    #[arg(long, default_value_t = 100)]
    sweeps: usize,
    /// Emit JSON instead of text grids.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let exchange = RentalExchange::new(
        args.capacity,
        args.max_move,
        (10., 2.),
        (
            Rates { requests: 3., returns: 3. },
            Rates { requests: 4., returns: 2. },
        ),
        args.gamma,
    )?;
    let solution = Solver::new(exchange)
        .discipline(Discipline::GaussSeidel)
        .tolerance(args.tolerance)
        .budget(args.sweeps)
        .solve()?;
    match args.json {
        true => println!(
            "{}",
            serde_json::json!({
                "values": solution.values,
                "policy": solution.policy,
                "sweeps": solution.sweeps(),
                "converged": solution.converged,
            })
        ),
        false => {
            println!(
                "{} after {} sweeps (residual {:.6})",
                if solution.converged { "converged" } else { "stopped" },
                solution.sweeps(),
                solution.residual(),
            );
            print!("{}", solution.values);
            println!("overnight transfers, positive toward lot B:");
            print!("{}", solution.policy);
        }
    }
    Ok(())
}
