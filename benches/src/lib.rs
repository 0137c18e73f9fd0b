use num_bigint::{BigInt, RandBigInt};
use rand::thread_rng;
use recon::{eval, Share};

/// Points x = 1..=n on a random integer polynomial with [k] coefficients of
/// [bits] bits each.
pub fn random_points(k: usize, n: usize, bits: u64) -> Vec<Share> {
    let mut rng = thread_rng();
    let coeffs: Vec<BigInt> = (0..k).map(|_| rng.gen_bigint(bits)).collect();

    (1..=n as i64)
        .map(|x| {
            let x = BigInt::from(x);
            Share::new(x.clone(), eval(&coeffs, &x))
        })
        .collect()
}
