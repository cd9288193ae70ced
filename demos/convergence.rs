use basel_pi::*;

fn main() {
    let pi = core::f64::consts::PI;

    // -- Partial sums of the Basel series --
    println!("=== Partial sums of Σ 1/n² (limit π²/6 = {}) ===", pi * pi / 6.0);
    let mut sums = PartialSums::<f64>::new();
    let mut checkpoint = 1_u64;
    while checkpoint <= 1_000_000 {
        let s = sums.nth((checkpoint - sums.terms() - 1) as usize).unwrap();
        println!("  S_{checkpoint:<8} = {s:.15}  tail = {:.3e}", pi * pi / 6.0 - s);
        checkpoint *= 10;
    }

    // -- Newton square root --
    println!("\n=== Newton sqrt (acc = {DEFAULT_SQRT_ACC:e}) ===");
    for x in [2.0_f64, 4.0, 9.8696] {
        let r = newton_sqrt_raw(x, DEFAULT_SQRT_ACC, DEFAULT_MAX_ITERATIONS).unwrap();
        println!("  sqrt({x}) = {}  ({} iterations)", r.value, r.iterations);
    }

    // -- Full pipeline at several term counts --
    println!("\n=== π estimate vs. terms ===");
    for terms in [10_u64, 100, 1_000, 10_000, DEFAULT_TERMS] {
        let config = Config::new().with_terms(terms);
        let r = approximate_pi_raw::<f64>(&config).unwrap();
        println!(
            "  T = {terms:<7} π ≈ {:.12}  error = {:.3e}  (estimate 3/(πT) = {:.3e})",
            r.pi,
            pi - r.pi,
            3.0 / (pi * terms as f64)
        );
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let config = Config::new().with_terms(1_000).with_sqrt_acc(1e-4);
    let pi32: f32 = approximate_pi(&config).unwrap();
    println!("  π ≈ {pi32} (f32, 1000 terms)");
}
