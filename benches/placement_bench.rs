//! Criterion benchmarks for the placement GA.
//!
//! Measures fitness evaluation on its own and full runs that are forced
//! to exhaust their generation budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_placement::board::{Chromosome, PieceCounts};
use u_placement::fitness::fitness;
use u_placement::ga::GaConfig;
use u_placement::placement::PlacementProblem;

fn bench_fitness(c: &mut Criterion) {
    let boards: Vec<Chromosome> = [
        "QEEE EQEE EEQE EEEQ",
        "QRBK KBRQ EEEE EEEE",
        "QQQQ RRRR BBBB KKKK",
    ]
    .iter()
    .map(|s| s.parse().expect("valid board"))
    .collect();

    c.bench_function("fitness", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(fitness(black_box(board)));
            }
        })
    });
}

fn bench_ga_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    // Full boards with many pieces never reach 1.0, so every run uses its
    // whole budget.
    let cases: [((usize, usize, usize, usize), usize, usize); 2] =
        [((4, 4, 4, 4), 10, 50), ((2, 3, 3, 4), 50, 50)];
    for ((q, r, b, k), pop, gen) in cases {
        let problem = PlacementProblem::new(PieceCounts::new(q, r, b, k)).expect("valid targets");
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("q{q}r{r}b{b}k{k}_p{pop}"), gen),
            &(problem, config),
            |bench, (p, c)| {
                bench.iter(|| {
                    let result = p.solve(black_box(c)).expect("full boards always repair");
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_ga_runs);
criterion_main!(benches);
