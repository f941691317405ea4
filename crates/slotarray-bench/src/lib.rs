//! Benchmark inputs for slotarray.
//!
//! - [`shuffled_keys`]: a seeded permutation of `0..n` for sort/search runs
//! - [`filled_array`]: an array pre-populated by appends

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slotarray::{ArrayConfig, DropRelease, OwningArray};

/// A deterministic permutation of `0..n` driven by `seed`.
pub fn shuffled_keys(n: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<u32> = (0..n).collect();
    // Fisher-Yates.
    for i in (1..keys.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        keys.swap(i, j);
    }
    keys
}

/// An array holding `keys` in order, starting from the default capacity.
pub fn filled_array(keys: &[u32]) -> OwningArray<u32> {
    let mut arr = OwningArray::with_config(ArrayConfig::default(), DropRelease)
        .expect("default capacity always allocates");
    for &k in keys {
        arr.add(k).expect("benchmark sizes fit in memory");
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_keys_is_a_permutation() {
        let mut keys = shuffled_keys(1000, 42);
        keys.sort_unstable();
        assert_eq!(keys, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn shuffled_keys_deterministic() {
        assert_eq!(shuffled_keys(100, 7), shuffled_keys(100, 7));
        assert_ne!(shuffled_keys(100, 7), shuffled_keys(100, 8));
    }

    #[test]
    fn filled_array_preserves_order() {
        let keys = shuffled_keys(100, 1);
        let arr = filled_array(&keys);
        assert_eq!(arr.len(), 100);
        assert_eq!(arr.get(17), Some(&keys[17]));
    }
}
