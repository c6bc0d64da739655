use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use probing_set::ProbingTable;

const CAPACITY: usize = 1 << 14;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (ProbingTable, Vec<String>) {
    let mut t = ProbingTable::with_capacity(CAPACITY).unwrap();
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for k in &keys {
        t.insert(k.as_str());
    }
    (t, keys)
}

fn bench_insert_half_full(c: &mut Criterion) {
    c.bench_function("probing::insert_8k_into_16k", |b| {
        let keys: Vec<String> = lcg(1).take(CAPACITY / 2).map(key).collect();
        b.iter_batched(
            || ProbingTable::with_capacity(CAPACITY).unwrap(),
            |mut t| {
                for k in &keys {
                    black_box(t.insert(k.as_str()));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_contains_hit(c: &mut Criterion) {
    let (t, keys) = filled(7, CAPACITY * 3 / 4);
    c.bench_function("probing::contains_hit_load75", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.contains(k))
        })
    });
}

fn bench_contains_miss(c: &mut Criterion) {
    let (t, _) = filled(11, CAPACITY * 3 / 4);
    let misses: Vec<String> = lcg(0xdead_beef).take(1024).map(key).collect();
    c.bench_function("probing::contains_miss_load75", |b| {
        let mut it = misses.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.contains(k))
        })
    });
}

// Insert/remove churn at steady size; exercises tombstone reuse and
// compaction.
fn bench_churn(c: &mut Criterion) {
    c.bench_function("probing::churn_10k_load50", |b| {
        b.iter_batched(
            || filled(5, CAPACITY / 2),
            |(mut t, keys)| {
                for (old, x) in keys.iter().zip(lcg(13).take(10_000)) {
                    t.remove(old);
                    t.insert(key(x));
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert_half_full,
    bench_contains_hit,
    bench_contains_miss,
    bench_churn
);
criterion_main!(benches);
