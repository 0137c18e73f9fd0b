use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, BenchmarkId,
    Criterion, Throughput,
};

pub fn recon_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("recon");

    let ks = [3, 11, 33];
    let ns = [8, 32, 64];

    for (&k, &n) in ks.iter().zip(ns.iter()) {
        cases::decode_base36(k, n, &mut group);
        cases::reconstruct(k, n, &mut group);
    }

    group.finish();
}

mod cases {
    use super::*;
    use num_bigint::RandBigInt;
    use rand::thread_rng;
    use recon::{Share, ShareSet};

    pub(crate) fn decode_base36<M: Measurement>(k: usize, n: usize, g: &mut BenchmarkGroup<M>) {
        g.throughput(Throughput::Elements(n as u64));
        let mut rng = thread_rng();

        g.bench_function(BenchmarkId::new(format!("decode-{}", k), n), move |b| {
            b.iter_with_setup(
                || {
                    (1..=n)
                        .map(|x| (x as u64, rng.gen_biguint(1024).to_str_radix(36)))
                        .collect::<Vec<_>>()
                },
                |encoded| {
                    for (id, digits) in encoded {
                        Share::decode(id, 36, &digits).unwrap();
                    }
                },
            )
        });
    }

    pub(crate) fn reconstruct<M: Measurement>(k: usize, n: usize, g: &mut BenchmarkGroup<M>) {
        g.throughput(Throughput::Elements(k as u64));

        g.bench_function(BenchmarkId::new(format!("reconstruct-{}", k), n), move |b| {
            b.iter_with_setup(
                || ShareSet::new(benches::random_points(k, n, 256), k).unwrap(),
                |set| set.reconstruct().unwrap(),
            )
        });
    }
}

criterion_group!(recon_benches, recon_group);
criterion_main!(recon_benches);
