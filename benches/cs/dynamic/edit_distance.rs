use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use editdistance::{compute, levenshtein_distance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_string(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [10, 50, 100].iter() {
        let a = generate_string(&mut rng, *size);
        let b = generate_string(&mut rng, *size);
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();

        group.bench_with_input(BenchmarkId::new("compute_with_trace", size), size, |bench, _| {
            bench.iter(|| compute(black_box(&a_chars), black_box(&b_chars)))
        });

        group.bench_with_input(BenchmarkId::new("distance_only", size), size, |bench, _| {
            bench.iter(|| levenshtein_distance(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
