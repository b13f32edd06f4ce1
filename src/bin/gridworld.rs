//! Gridworld Binary
//!
//! Solves the classic wormhole gridworld under frozen-table sweeps and
//! prints the value grid, with the greedy policy when optimizing.
//!
//! Options: --size, --gamma, --tolerance, --sweeps, --backup, --json

use anyhow::Result;
use clap::Parser;
use sweeps::gridworld::GridWorld;
use sweeps::gridworld::Wormhole;
use sweeps::solver::Backup;
use sweeps::solver::Discipline;
use sweeps::solver::Solver;

#[derive(Parser)]
#[command(about = "solve the wormhole gridworld")]
struct Args {
    /// Grid side length; the classic wormholes need at least 4.
    #[arg(long, default_value_t = 5)]
    size: usize,
    /// Discount factor.
    #[arg(long, default_value_t = 0.9)]
    gamma: f64,
    /// Stop once a sweep moves the table by no more than this, summed
    /// over all cells.
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,
    /// Sweep budget.
    #[arg(long, default_value_t = 200)]
    sweeps: usize,
    /// Greedy optimization or uniform-policy evaluation.
    #[arg(long, value_enum, default_value_t = Backup::Greedy)]
    backup: Backup,
    /// Emit JSON instead of text grids.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let wormholes = vec![
        Wormhole { source: (0, 1), target: (args.size.saturating_sub(1), 1), reward: 10. },
        Wormhole { source: (0, 3), target: (2, 3), reward: 5. },
    ];
    let solution = Solver::new(GridWorld::new(args.size, args.gamma, wormholes)?)
        .discipline(Discipline::Jacobi)
        .backup(args.backup)
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
            if args.backup == Backup::Greedy {
                println!("greedy policy:");
                print!("{}", solution.policy);
            }
        }
    }
    Ok(())
}
