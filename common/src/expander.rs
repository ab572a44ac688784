use near_sdk::env;

use crate::types::{GameFormat, RandomWord, WinningNumbers};

/// Hashes a 256-bit word (big-endian) with keccak256 to derive the next word of the chain.
pub fn next_word(word: &RandomWord) -> RandomWord {
    let mut bytes = [0u8; 32];
    word.to_big_endian(&mut bytes);
    RandomWord::from_big_endian(&env::keccak256_array(&bytes))
}

/// Turns a single random word into `pick_count` unique numbers from `1..=max_range`, sorted ascending.
///
/// Every iteration takes `(word mod max_range) + 1` as a candidate and then rehashes the word,
/// whether or not the candidate was accepted. The output depends only on the inputs, so anyone
/// holding the provider's random word can replay a draw.
///
/// Panics unless `1 <= pick_count <= max_range`.
pub fn expand(seed: RandomWord, pick_count: u8, max_range: u8) -> WinningNumbers {
    assert!(
        pick_count >= 1 && pick_count <= max_range,
        "Cannot pick {} unique numbers from 1..={}",
        pick_count,
        max_range
    );

    let modulus = RandomWord::from(max_range);
    let mut word = seed;
    let mut picks: WinningNumbers = Vec::with_capacity(pick_count as usize);

    while picks.len() < pick_count as usize {
        let candidate = (word % modulus).low_u32() as u8 + 1;
        if !picks.contains(&candidate) {
            picks.push(candidate);
        }
        word = next_word(&word);
    }

    picks.sort_unstable();
    picks
}

pub fn expand_for_format(seed: RandomWord, format: &GameFormat) -> WinningNumbers {
    expand(seed, format.pick_count, format.max_range)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::types::U256;

    fn random_word() -> U256 {
        U256::from_little_endian(&rand::thread_rng().gen::<[u8; 32]>())
    }

    fn assert_well_formed(picks: &[u8], pick_count: u8, max_range: u8) {
        assert_eq!(picks.len(), pick_count as usize);
        for window in picks.windows(2) {
            assert!(window[0] < window[1], "picks not strictly ascending: {:?}", picks);
        }
        assert!(picks.iter().all(|&p| p >= 1 && p <= max_range), "{:?} outside 1..={}", picks, max_range);
    }

    #[test]
    fn test_expand_properties_for_random_seeds() {
        for _ in 0..50 {
            let seed = random_word();
            let picks = expand(seed, 6, 45);
            assert_well_formed(&picks, 6, 45);
        }
    }

    #[test]
    fn test_expand_is_deterministic() {
        let seed = random_word();
        assert_eq!(expand(seed, 9, 99), expand(seed, 9, 99));
        assert_eq!(expand(U256::zero(), 5, 50), expand(U256::zero(), 5, 50));
    }

    #[test]
    fn test_expand_full_range_returns_every_number() {
        let picks = expand(random_word(), 9, 9);
        assert_eq!(picks, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_expand_first_candidate_comes_from_seed() {
        // a single pick never rehashes before accepting
        assert_eq!(expand(U256::from(44u64), 1, 45), vec![45]);
        assert_eq!(expand(U256::from(45u64), 1, 45), vec![1]);
        assert_eq!(expand(U256::from(100u64), 1, 99), vec![2]);
        assert_eq!(expand(U256::MAX, 1, 1), vec![1]);
    }

    #[test]
    fn test_expand_supports_byte_sized_range() {
        let picks = expand(random_word(), 9, 255);
        assert_well_formed(&picks, 9, 255);
    }

    #[test]
    fn test_expand_for_format_uses_format() {
        let seed = random_word();
        let format = GameFormat::new(3, 10);
        assert_eq!(expand_for_format(seed, &format), expand(seed, 3, 10));
    }

    #[test]
    fn test_next_word_changes_word() {
        let seed = random_word();
        assert_ne!(next_word(&seed), seed);
        assert_eq!(next_word(&seed), next_word(&seed));
    }

    #[test]
    fn test_next_word_hashes_big_endian_bytes() {
        // keccak256 of the 32-byte encodings of 0 and 1
        let hash_of_zero = U256::from_big_endian(&[
            0x29, 0x0d, 0xec, 0xd9, 0x54, 0x8b, 0x62, 0xa8,
            0xd6, 0x03, 0x45, 0xa9, 0x88, 0x38, 0x6f, 0xc8,
            0x4b, 0xa6, 0xbc, 0x95, 0x48, 0x40, 0x08, 0xf6,
            0x36, 0x2f, 0x93, 0x16, 0x0e, 0xf3, 0xe5, 0x63,
        ]);
        let hash_of_one = U256::from_big_endian(&[
            0xb1, 0x0e, 0x2d, 0x52, 0x76, 0x12, 0x07, 0x3b,
            0x26, 0xee, 0xcd, 0xfd, 0x71, 0x7e, 0x6a, 0x32,
            0x0c, 0xf4, 0x4b, 0x4a, 0xfa, 0xc2, 0xb0, 0x73,
            0x2d, 0x9f, 0xcb, 0xe2, 0xb7, 0xfa, 0x0c, 0xf6,
        ]);

        assert_eq!(next_word(&U256::zero()), hash_of_zero);
        assert_eq!(next_word(&U256::one()), hash_of_one);
    }

    #[test]
    fn test_expand_walks_hash_chain_past_duplicates() {
        let seed = U256::from(5u64);
        let modulus = U256::from(5u64);

        let mut chain = vec![seed];
        for _ in 0..3 {
            let last = *chain.last().unwrap();
            chain.push(next_word(&last));
        }
        let candidates: Vec<u64> = chain.iter().map(|word| (*word % modulus).low_u64() + 1).collect();

        // second candidate repeats the first; the chain moves on regardless
        assert_eq!(candidates, vec![1, 1, 5, 2]);
        assert_eq!(expand(seed, 3, 5), vec![1, 2, 5]);
    }

    #[test]
    fn test_expand_known_draws() {
        assert_eq!(expand(U256::one(), 6, 45), vec![2, 19, 25, 36, 38, 43]);
        assert_eq!(
            expand((U256::one() << 200) + U256::from(7u64), 9, 99),
            vec![22, 28, 32, 51, 56, 62, 75, 78, 81]
        );
    }

    #[test]
    #[should_panic(expected = "Cannot pick")]
    fn test_expand_rejects_more_picks_than_range() {
        expand(U256::one(), 7, 6);
    }
}
