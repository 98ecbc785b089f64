use ark_bn254::Fr;
use criterion::{criterion_group, criterion_main, Criterion};
use pool_poseidon::{cipher, hash};

pub fn bench_poseidon(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poseidon");
    group.sample_size(100);

    // Chain of hashes, starting from a random value
    group.bench_function("poseidon_hash_2", |b| {
        let mut digest = Fr::from(rand::random::<u64>());
        let other = Fr::from(rand::random::<u64>());

        b.iter(|| {
            digest = hash(&[digest, other]).unwrap();
        })
    });

    group.bench_function("poseidon_encrypt_4", |b| {
        let key = [Fr::from(1u64), Fr::from(2u64)];
        let message = [Fr::from(3u64), Fr::from(4u64), Fr::from(5u64), Fr::from(6u64)];

        b.iter(|| cipher::encrypt(&message, &key, Fr::from(7u64)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_poseidon);
criterion_main!(benches);
