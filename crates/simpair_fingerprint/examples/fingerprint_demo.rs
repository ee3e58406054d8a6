//! Demonstrates fingerprinting two overlapping token streams and comparing
//! the results bit by bit.
//! Run with `cargo run --package simpair_fingerprint --example fingerprint_demo`.

use simpair_fingerprint::{fingerprint_features, fingerprint_tokens, WeightedFeature};

fn main() {
    let original = "the quick brown fox jumps over the lazy dog";
    let edited = "the quick brown cat jumps over the lazy dog";

    let fp_a = fingerprint_tokens(&original.split_whitespace().collect::<Vec<_>>());
    let fp_b = fingerprint_tokens(&edited.split_whitespace().collect::<Vec<_>>());

    println!("original: {fp_a:#018x}");
    println!("edited:   {fp_b:#018x}");
    println!("differing bits: {}", (fp_a ^ fp_b).count_ones());

    let weighted: Vec<WeightedFeature> = [("fox", 5), ("dog", 2), ("quick", 1)]
        .into_iter()
        .map(WeightedFeature::from)
        .collect();
    match fingerprint_features(&weighted) {
        Ok(fp) => println!("weighted: {fp:#018x}"),
        Err(err) => eprintln!("fingerprinting failed: {err}"),
    }
}
