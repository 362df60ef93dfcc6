//! Estimator accuracy walkthrough.
//!
//! Shows the Hamming estimate tracking exact angular similarity, and how
//! the tracking tightens as the signature grows.
//!
//! ```bash
//! cargo run --example accuracy_demo
//! RUST_LOG=slant=debug cargo run --example accuracy_demo   # per-trial trace
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use slant::{
    angular_similarity, compute_signature, generate_random_projection, hash_similarity,
    run_benchmark, sample_vector,
};

fn main() -> Result<(), slant::SketchError> {
    env_logger::init();

    println!("Signed Random Projection Similarity");
    println!("===================================\n");

    demo_single_pair()?;
    demo_accuracy_vs_bits()?;

    Ok(())
}

/// One pair, one matrix: estimate vs exact.
fn demo_single_pair() -> Result<(), slant::SketchError> {
    println!("1. A single pair of vectors");
    println!("   ------------------------");

    let dim = 64;
    let bits = 256;
    let mut rng = StdRng::seed_from_u64(7);

    let projection = generate_random_projection(dim, bits, &mut rng)?;
    let a = sample_vector(dim, &mut rng);
    let b = sample_vector(dim, &mut rng);

    let sig_a = compute_signature(&projection, &a)?;
    let sig_b = compute_signature(&projection, &b)?;

    let estimated = hash_similarity(&sig_a, &sig_b)?;
    let exact = angular_similarity(&a, &b)?;

    println!("   dim = {}, signature bits = {}", dim, bits);
    println!("   hamming distance      = {}", sig_a.hamming_distance(&sig_b));
    println!("   estimated similarity  = {:.4}", estimated);
    println!("   exact angular         = {:.4}", exact);
    println!("   absolute error        = {:.4}\n", (exact - estimated).abs());

    Ok(())
}

/// Sweep the signature size and watch the average error shrink.
fn demo_accuracy_vs_bits() -> Result<(), slant::SketchError> {
    println!("2. Accuracy vs signature size");
    println!("   --------------------------");
    println!("   500 random pairs per row, dim = 50. Error should shrink");
    println!("   roughly like 1/sqrt(bits).\n");

    println!("   {:>6}  {:>10}  {:>10}  {:>10}", "bits", "avg diff", "max diff", "elapsed");
    for bits in [16, 32, 64, 128, 256, 512] {
        let report = run_benchmark(50, bits, 500, 42)?;
        println!(
            "   {:>6}  {:>10.4}  {:>10.4}  {:>9.1}ms",
            bits,
            report.average_diff,
            report.max_diff(),
            report.elapsed.as_secs_f64() * 1000.0
        );
    }

    println!("\n   Re-run with RUST_LOG=slant=debug to see every trial.");
    Ok(())
}
