use simpair::{
    FNV_OFFSET_BASIS, FeatureToken, FingerprintBuilder, fingerprint, fingerprint_document,
    fnv1a, weighted_fingerprint,
};

#[test]
fn hashing_is_stable_across_call_sites() {
    assert_eq!(fnv1a(b""), FNV_OFFSET_BASIS);
    assert_eq!(fnv1a(b"document"), FeatureToken::from("document").hash_value());
}

#[test]
fn fingerprints_are_order_independent() {
    let forwards: Vec<&str> = "a b c d e f g".split_whitespace().collect();
    let backwards: Vec<&str> = forwards.iter().rev().copied().collect();
    assert_eq!(
        fingerprint_document(&forwards),
        fingerprint_document(&backwards)
    );
}

#[test]
fn weighting_equals_repetition_through_the_public_api() {
    let hash = fnv1a(b"token");
    let weighted = weighted_fingerprint([(hash, 5)]).expect("weighted");
    let repeated = fingerprint(std::iter::repeat(hash).take(5));
    assert_eq!(weighted, repeated);
}

#[test]
fn builder_and_batch_paths_agree() {
    let tokens = ["alpha", "beta", "gamma", "beta"];
    let mut builder = FingerprintBuilder::new();
    for token in &tokens {
        builder.add_hash(fnv1a(token.as_bytes()));
    }
    assert_eq!(builder.finish(), fingerprint_document(&tokens));
}

#[test]
fn repeated_runs_give_identical_fingerprints() {
    let tokens: Vec<String> = (0..200).map(|i| format!("token{i}")).collect();
    let first = fingerprint_document(&tokens);
    let second = fingerprint_document(&tokens);
    assert_eq!(first, second);
}
