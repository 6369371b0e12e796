use bls12_377_pairing::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn pairing_stages_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing_stages");

    let pre_p = prepare_g1_bls12_377(&G1_GENERATOR);
    let pre_q = prepare_g2_bls12_377(&G2_GENERATOR);
    let f = miller_loop_bls12_377(&pre_p, &pre_q);

    group.bench_function("prepare_g2", |b| {
        b.iter(|| prepare_g2_bls12_377(black_box(&G2_GENERATOR)))
    });
    group.bench_function("miller_loop", |b| {
        b.iter(|| miller_loop_bls12_377(black_box(&pre_p), black_box(&pre_q)))
    });
    group.bench_function("final_exp", |b| b.iter(|| final_exp_bls12_377(black_box(&f)).unwrap()));
    group.bench_function("pairing", |b| {
        b.iter(|| pairing_bls12_377(black_box(&G1_GENERATOR), black_box(&G2_GENERATOR)).unwrap())
    });

    group.finish();
}

fn pairing_eq_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing_eq");
    group.sample_size(10);

    let minus_p = neg_g1_bls12_377(&G1_GENERATOR);
    for &num_pairs in &[2usize, 4, 8] {
        // e(P, Q)·e(-P, Q)·... = 1
        let pairs: Vec<_> = (0..num_pairs)
            .map(|i| if i % 2 == 0 { (G1_GENERATOR, G2_GENERATOR) } else { (minus_p, G2_GENERATOR) })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(num_pairs), &pairs, |b, pairs| {
            b.iter(|| assert!(pairing_eq_bls12_377(black_box(pairs), &FP12_ONE)))
        });
    }

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_pairing_eq");
    group.sample_size(10);

    let minus_p = neg_g1_bls12_377(&G1_GENERATOR);
    let equation = PairingEquation {
        pairs: vec![(G1_GENERATOR, G2_GENERATOR), (minus_p, G2_GENERATOR)],
        target: FP12_ONE,
    };
    for &num_equations in &[1usize, 4, 16] {
        let equations = vec![equation.clone(); num_equations];
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_equations", num_equations)),
            &equations,
            |b, equations| b.iter(|| batch_pairing_eq_bls12_377(black_box(equations))),
        );
    }

    group.finish();
}

criterion_group!(benches, pairing_stages_benchmark, pairing_eq_benchmark, batch_benchmark);
criterion_main!(benches);
