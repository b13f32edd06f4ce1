//! Gambler Binary
//!
//! Optimizes the gambler's ruin in place, prints a capital/value/stake
//! table, and replays the learned policy to report an empirical win rate
//! against the one the value table predicts.
//!
//! Options: --goal, --p-win, --bankroll, --rollouts, --seed, --tolerance,
//! --sweeps, --json

use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sweeps::gambler::GamblersRuin;
use sweeps::solver::Discipline;
use sweeps::solver::Solver;

#[derive(Parser)]
#[command(about = "solve the gambler's ruin")]
struct Args {
    /// Bankroll that ends the game in a win.
    #[arg(long, default_value_t = 100)]
    goal: usize,
    /// Coin bias toward the gambler.
    #[arg(long, default_value_t = 0.4)]
    p_win: f64,
    /// Starting bankroll for the policy replays.
    #[arg(long, default_value_t = 50)]
    bankroll: usize,
    /// Number of policy replays.
    #[arg(long, default_value_t = 10000)]
    rollouts: usize,
    /// Seed for the replay coin.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Stop once a sweep moves the table by no more than this, summed
    /// over all capitals.
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,
    /// Sweep budget.
    #[arg(long, default_value_t = 100)]
    sweeps: usize,
    /// Emit JSON instead of the text table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if !(1..args.goal).contains(&args.bankroll) {
        bail!("bankroll must sit strictly between 0 and the goal");
    }
    let solution = Solver::new(GamblersRuin::new(args.goal, args.p_win)?)
        .discipline(Discipline::GaussSeidel)
        .tolerance(args.tolerance)
        .budget(args.sweeps)
        .solve()?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let wins = (0..args.rollouts)
        .filter(|_| solution.model.rollout(&solution.policy, args.bankroll, &mut rng) == args.goal)
        .count();
    let rate = wins as f64 / args.rollouts.max(1) as f64;
    let predicted = (solution.values.at((0, args.bankroll)) + 1.) / 2.;
    match args.json {
        true => println!(
            "{}",
            serde_json::json!({
                "values": solution.values,
                "policy": solution.policy,
                "sweeps": solution.sweeps(),
                "converged": solution.converged,
                "win_rate": rate,
                "predicted": predicted,
            })
        ),
        false => {
            println!(
                "{} after {} sweeps (residual {:.6})",
                if solution.converged { "converged" } else { "stopped" },
                solution.sweeps(),
                solution.residual(),
            );
            println!("{:>8} {:>8} {:>6}", "capital", "value", "stake");
            let step = (args.goal / 20).max(1);
            for capital in (1..args.goal).step_by(step) {
                println!(
                    "{:>8} {:>8.4} {:>6}",
                    capital,
                    solution.values.at((0, capital)),
                    solution.policy.at((0, capital)).unwrap_or(0),
                );
            }
            println!(
                "replayed {} times from {}: won {:.4}, table predicts {:.4}",
                args.rollouts, args.bankroll, rate, predicted,
            );
        }
    }
    Ok(())
}
