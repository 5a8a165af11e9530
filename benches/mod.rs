
use criterion::criterion_main;

criterion_main!(pricing_bench::benches, solver_bench::benches);
