use proptest::prelude::*;

use yarish::sha256::{self, padded_len, Crypto};

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

proptest! {
    #[test]
    fn output_is_64_lowercase_hex(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let hash = sha256::software(&data);
        prop_assert_eq!(hash.len(), 64);
        prop_assert!(is_lower_hex(&hash));
    }

    #[test]
    fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(sha256::software(&data), sha256::software(&data));
        prop_assert_eq!(sha256::software(&data), sha256::digest(&data));
    }

    #[test]
    fn padded_length(len in 0usize..4096) {
        let expected = 64 * ((len + 9 + 63) / 64);
        prop_assert_eq!(padded_len(len), expected);
        prop_assert_eq!(Crypto::new(&vec![0xa5; len]).padded().len(), expected);
    }

    #[test]
    fn single_bit_flip(data in proptest::collection::vec(any::<u8>(), 1..512), index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let mut flipped = data.clone();
        let i = index.index(data.len());
        flipped[i] ^= 1 << bit;
        prop_assert_ne!(sha256::software(&data), sha256::software(&flipped));
    }
}
