use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::collections::BTreeMap;
use treap_bimap::BiMap;

const NUM_OF_OPERATIONS: usize = 1_000;

fn pairs() -> Vec<(u32, u32)> {
    let mut rng = SmallRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS)
        .map(|_| (rng.next_u32(), rng.next_u32()))
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let pairs = pairs();
    c.bench_function("bimap insert", |b| {
        b.iter(|| {
            let mut map = BiMap::new();
            for &(left, right) in &pairs {
                map.insert(left, right);
            }
            map
        })
    });
    c.bench_function("two btreemaps insert", |b| {
        b.iter(|| {
            let mut by_left = BTreeMap::new();
            let mut by_right = BTreeMap::new();
            for &(left, right) in &pairs {
                if !by_left.contains_key(&left) && !by_right.contains_key(&right) {
                    by_left.insert(left, right);
                    by_right.insert(right, left);
                }
            }
            (by_left, by_right)
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let pairs = pairs();
    let map: BiMap<u32, u32> = pairs.iter().cloned().collect();
    c.bench_function("bimap at_left", |b| {
        b.iter(|| {
            for (left, _) in &pairs {
                black_box(map.get_left(left));
            }
        })
    });
    c.bench_function("bimap at_right", |b| {
        b.iter(|| {
            for (_, right) in &pairs {
                black_box(map.get_right(right));
            }
        })
    });
}

fn bench_flip(c: &mut Criterion) {
    let map: BiMap<u32, u32> = pairs().into_iter().collect();
    c.bench_function("bimap walk and flip", |b| {
        b.iter(|| {
            let mut pos = map.begin_left();
            while !pos.is_end() {
                black_box(map.right_at(pos.flip()));
                pos = map.next_left(pos);
            }
        })
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_flip);
criterion_main!(benches);
