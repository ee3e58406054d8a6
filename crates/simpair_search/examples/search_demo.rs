//! Demonstrates bucketed pair search against the exhaustive baseline on a
//! small fingerprint collection.
//! Run with `cargo run --package simpair_search --example search_demo`.

use simpair_search::{find_similar_pairs, hamming_distance, SearchConfig};

fn main() {
    let fingerprints = vec![
        0x0000_0000_0000_0000_u64,
        0x0000_0000_0000_0001, // 1 bit from the first
        0xffff_ffff_ffff_ffff,
        0xabcd_0000_0000_0010,
        0xabcd_0000_0000_0011, // 1 bit from its neighbour
    ];

    let exact = SearchConfig::exhaustive(2);
    match find_similar_pairs(&fingerprints, &exact) {
        Ok(pairs) => {
            println!("exhaustive pairs (threshold 2):");
            for (i, j) in pairs {
                println!(
                    "  ({i}, {j}) distance {}",
                    hamming_distance(fingerprints[i], fingerprints[j])
                );
            }
        }
        Err(err) => eprintln!("search failed: {err}"),
    }

    let bucketed = SearchConfig {
        keybits: 16,
        max_bit_difference: 2,
        rotate: 0,
        use_parallel: false,
    };
    match find_similar_pairs(&fingerprints, &bucketed) {
        Ok(pairs) => println!("bucketed pairs (keybits 16): {pairs:?}"),
        Err(err) => eprintln!("search failed: {err}"),
    }
}
