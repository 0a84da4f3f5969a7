use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curvearith_crypto::algebra::curve::{ed25519, secp256k1, Curve};
use curvearith_crypto::algebra::field::{Field, MontgomeryField, MontgomeryReduction, PrimeField};
use curvearith_crypto::U256;

/// secp256k1 base field prime
const P: &str = "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

pub fn criterion_benchmark(c: &mut Criterion) {
    // Bench integers
    bench_uint(c);

    // Bench fields
    bench_field(c);

    // Bench curves
    bench_curve(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn bench_uint(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();
    let p = U256::from_hex_str(P).unwrap();

    let mut grp_uint = c.benchmark_group("uint");
    grp_uint.bench_function("widening_mul", |b| {
        b.iter_batched(
            || (U256::random(rng), U256::random(rng)),
            |(x, y)| black_box(x.widening_mul(&y)),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_uint.bench_function("div_rem_wide", |b| {
        b.iter_batched(
            || (U256::random(rng), U256::random(rng)),
            |(hi, lo)| black_box(U256::div_rem_wide(&hi, &lo, &p).unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_uint.bench_function("inv_mod", |b| {
        b.iter_batched(
            || U256::random_below(rng, &p).unwrap(),
            |x| black_box(x.inv_mod(&p)),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_uint.finish();
}

pub fn bench_field(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();
    let p = U256::from_hex_str(P).unwrap();

    let prime = PrimeField::new(p).unwrap();
    let mont = MontgomeryField::new(p).unwrap();
    let classic = MontgomeryField::with_reduction(p, MontgomeryReduction::Classic).unwrap();

    let x = U256::random_below(rng, &p).unwrap();
    let e = U256::random(rng);
    let (px, mx) = (prime.to_internal(&x).unwrap(), mont.to_internal(&x).unwrap());

    let mut grp_field = c.benchmark_group("field");

    // MUL
    grp_field.bench_function("prime_mul", |b| b.iter(|| black_box(prime.mul(&px, &px))));
    grp_field.bench_function("mont_mul", |b| b.iter(|| black_box(mont.mul(&mx, &mx))));
    grp_field.bench_function("mont_classic_mul", |b| {
        b.iter(|| black_box(classic.mul(&mx, &mx)))
    });

    // Inverse
    grp_field.bench_function("prime_inverse", |b| {
        b.iter(|| black_box(prime.inv(&px).unwrap()))
    });
    grp_field.bench_function("mont_inverse", |b| {
        b.iter(|| black_box(mont.inv(&mx).unwrap()))
    });

    // POW
    grp_field.bench_function("mont_pow_double_and_add", |b| {
        b.iter(|| black_box(mont.pow_double_and_add(&mx, &e)))
    });
    for window in [2, 4, 6] {
        grp_field.bench_function(format!("mont_pow_sliding_window_{window}"), |b| {
            b.iter(|| black_box(mont.pow_sliding_window(&mx, &e, window).unwrap()))
        });
    }

    grp_field.finish();
}

pub fn bench_curve(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();

    let k256 = secp256k1().unwrap();
    let ed = ed25519().unwrap();
    let g = k256.to_projective(k256.generator());

    let mut grp_curve = c.benchmark_group("curve");
    grp_curve.bench_function("secp256k1_double", |b| b.iter(|| black_box(k256.double(&g))));
    grp_curve.bench_function("secp256k1_add", |b| {
        let h = k256.double(&g);
        b.iter(|| black_box(k256.add(&g, &h)))
    });

    grp_curve.bench_function("secp256k1_mul_double_and_add", |b| {
        b.iter_batched(
            || U256::random_below(rng, k256.order()).unwrap(),
            |k| black_box(k256.mul_double_and_add(&k, k256.generator())),
            criterion::BatchSize::SmallInput,
        )
    });
    for window in [2, 4, 6] {
        grp_curve.bench_function(format!("secp256k1_mul_wnaf_{window}"), |b| {
            b.iter_batched(
                || U256::random_below(rng, k256.order()).unwrap(),
                |k| black_box(k256.mul_wnaf(&k, k256.generator(), window).unwrap()),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    grp_curve.bench_function("ed25519_mul", |b| {
        b.iter_batched(
            || U256::random_below(rng, ed.order()).unwrap(),
            |k| black_box(ed.mul_generator(&k)),
            criterion::BatchSize::SmallInput,
        )
    });

    grp_curve.finish();
}
