//! Page generation and machine loop benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use judecca_assembler::assemble;
use judecca_runtime::{FixedPages, HashPages, Machine, MachineConfig, NullIo, PageGenerator};
use judecca_spec::{decode_page, derive_seed_with_iterations, Limits, Seed};

const STEPS: &[u64] = &[1_000, 10_000, 100_000];

fn bench_generate_page(c: &mut Criterion) {
    let seed = Seed::from_bytes([7; 32]);
    let mut group = c.benchmark_group("generate_page");

    for len in [0usize, 64, 4096] {
        let source = vec![0x2A; len];
        let pages = HashPages::new(&source, seed);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(len), &pages, |b, pages| {
            let mut index = 0u64;
            b.iter(|| {
                index = index.wrapping_add(1);
                black_box(decode_page(&pages.generate(black_box(index))))
            })
        });
    }

    group.finish();
}

fn bench_seed_rounds(c: &mut Criterion) {
    c.bench_function("derive_seed_10k_rounds", |b| {
        b.iter(|| derive_seed_with_iterations(black_box(b"Hello, world!"), 10_000))
    });
}

fn bench_machine_loop(c: &mut Criterion) {
    // Tight loop that never leaves page 0
    let pages = assemble("+[+.]").unwrap_or_default();
    let mut group = c.benchmark_group("machine_loop");

    for &steps in STEPS {
        group.throughput(Throughput::Elements(steps));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let config = MachineConfig {
                    limits: Limits::unlimited(),
                    trace: false,
                    max_steps: Some(steps),
                };
                let mut machine =
                    Machine::with_generator(FixedPages::new(pages.clone()), config, NullIo::default());
                black_box(machine.run())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_page, bench_seed_rounds, bench_machine_loop);
criterion_main!(benches);
