criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_poisson_support,
        backing_up_exchange_state,
        solving_classic_gridworld,
        solving_gamblers_ruin,
        solving_shrunken_exchange,
}

fn evaluating_poisson_support(c: &mut criterion::Criterion) {
    c.bench_function("exhaust a poisson support from a cold cache", |b| {
        b.iter(|| {
            let poisson = Poisson::default();
            (0..21).map(|n| poisson.mass(n, 4.)).sum::<Probability>()
        })
    });
}

fn backing_up_exchange_state(c: &mut criterion::Criterion) {
    let exchange = RentalExchange::default();
    let values = ValueTable::new(exchange.shape());
    c.bench_function("back up one state of the classic rental exchange", |b| {
        b.iter(|| exchange.transition((10, 10), 3, &values))
    });
}

fn solving_classic_gridworld(c: &mut criterion::Criterion) {
    c.bench_function("value iterate the classic 5x5 gridworld", |b| {
        b.iter(|| {
            Solver::new(GridWorld::default())
                .discipline(Discipline::Jacobi)
                .budget(200)
                .solve()
        })
    });
}

fn solving_gamblers_ruin(c: &mut criterion::Criterion) {
    c.bench_function("sweep gambler's ruin to its fixed point", |b| {
        b.iter(|| Solver::new(GamblersRuin::default()).solve())
    });
}

fn solving_shrunken_exchange(c: &mut criterion::Criterion) {
    let rates = (
        Rates {
            requests: 3.,
            returns: 3.,
        },
        Rates {
            requests: 4.,
            returns: 2.,
        },
    );
    c.bench_function("solve a shrunken rental exchange in place", |b| {
        b.iter(|| {
            let exchange =
                RentalExchange::new(5, 2, (10., 2.), rates, 0.9).expect("valid configuration");
            Solver::new(exchange).solve()
        })
    });
}

use sweeps::chance::poisson::Poisson;
use sweeps::gambler::ruin::GamblersRuin;
use sweeps::gridworld::world::GridWorld;
use sweeps::rental::exchange::RentalExchange;
use sweeps::rental::rates::Rates;
use sweeps::solver::discipline::Discipline;
use sweeps::solver::model::Model;
use sweeps::solver::solver::Solver;
use sweeps::solver::table::ValueTable;
use sweeps::Probability;
