//! Chain walking and per-chain seed expansion

use crate::wots::address::Address;
use crate::wots::hash::{prf, thash_f, u64_block};
use crate::wots::params::*;
use zeroize::Zeroizing;

/// Apply `thash_f` `steps` times starting at chain position `start`
///
/// Step `i` uses `addr` with its hash-step word set to `i`. The last step of
/// a chain has hash index `W - 2` and lands on position `W - 1`, the tip; an
/// oversized `steps` stops there.
/// Every other address word is passed through unchanged.
///
/// The three WOTS+ operations differ only in `(start, steps)`:
/// key generation walks `(0, W - 1)`, signing `(0, d)` and recovery
/// `(d, W - 1 - d)` for message digit `d`.
pub fn gen_chain(
    input: &[u8; N],
    start: u32,
    steps: u32,
    public_seed: &[u8; N],
    addr: &Address,
) -> [u8; N] {
    let end = start.saturating_add(steps).min(MAX_CHAIN_STEP);

    let mut out = *input;
    for i in start..end {
        out = thash_f(&out, public_seed, &addr.with_hash(i));
    }
    out
}

/// Expand the private seed into one secret chain start per chain
///
/// `start_i = prf(private_seed, i as 32-byte big-endian counter)`.
pub fn expand_seed(private_seed: &[u8; N]) -> Zeroizing<[[u8; N]; LEN]> {
    let mut starts = Zeroizing::new([[0u8; N]; LEN]);
    for (i, start) in starts.iter_mut().enumerate() {
        *start = prf(private_seed, &u64_block(i as u64));
    }
    starts
}

/// Run `chain` for every chain index and concatenate the results
///
/// Chains are independent; with the `parallel` feature they are computed on
/// the rayon pool. Output is identical either way.
pub(crate) fn map_chains<F>(chain: F) -> [u8; LEN * N]
where
    F: Fn(usize) -> [u8; N] + Sync + Send,
{
    let mut out = [0u8; LEN * N];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let values: Vec<[u8; N]> = (0..LEN).into_par_iter().map(&chain).collect();
        for (slot, value) in out.chunks_exact_mut(N).zip(values.iter()) {
            slot.copy_from_slice(value);
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, slot) in out.chunks_exact_mut(N).enumerate() {
            slot.copy_from_slice(&chain(i));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chain(x: &[u8; N], seed: &[u8; N], addr: &Address) -> [u8; N] {
        gen_chain(x, 0, MAX_CHAIN_STEP, seed, addr)
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let x = [0x5au8; N];
        let seed = [1u8; N];
        for start in 0..W as u32 {
            assert_eq!(gen_chain(&x, start, 0, &seed, &Address::default()), x);
        }
    }

    #[test]
    fn test_split_walk_reaches_same_tip() {
        let x = [0x11u8; N];
        let seed = [0x22u8; N];
        let addr = Address::from_words([1, 2, 3, 4, 5, 6, 7, 8]).with_chain(17);
        let tip = full_chain(&x, &seed, &addr);

        for d in 0..W as u32 {
            let mid = gen_chain(&x, 0, d, &seed, &addr);
            let rest = gen_chain(&mid, d, MAX_CHAIN_STEP - d, &seed, &addr);
            assert_eq!(rest, tip, "split at {}", d);
        }
    }

    #[test]
    fn test_walk_never_passes_chain_tip() {
        let x = [3u8; N];
        let seed = [4u8; N];
        let addr = Address::default();
        let tip = full_chain(&x, &seed, &addr);

        assert_eq!(gen_chain(&x, 0, 100, &seed, &addr), tip);
        assert_eq!(gen_chain(&x, 0, u32::MAX, &seed, &addr), tip);

        let mid = gen_chain(&x, 0, 10, &seed, &addr);
        assert_eq!(gen_chain(&mid, 10, u32::MAX, &seed, &addr), tip);
    }

    #[test]
    fn test_oversized_walk_skips_extra_step() {
        let x = [6u8; N];
        let seed = [7u8; N];
        let addr = Address::default().with_chain(3);
        let tip = full_chain(&x, &seed, &addr);

        // one more step at hash index 15 would leave the chain
        let past_tip = thash_f(&tip, &seed, &addr.with_hash(MAX_CHAIN_STEP));
        assert_ne!(gen_chain(&x, 0, W as u32, &seed, &addr), past_tip);
        assert_eq!(gen_chain(&x, 0, W as u32, &seed, &addr), tip);
        assert_eq!(gen_chain(&tip, MAX_CHAIN_STEP, 1, &seed, &addr), tip);
    }

    #[test]
    fn test_expand_seed_distinct_starts() {
        let starts = expand_seed(&[9u8; N]);
        for i in 0..LEN {
            for j in i + 1..LEN {
                assert_ne!(starts[i], starts[j]);
            }
        }
        assert_eq!(starts[5], prf(&[9u8; N], &u64_block(5)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let starts = expand_seed(&[0x33u8; N]);
        let seed = [0x44u8; N];
        let base = Address::from_words([9, 0, 0, 1, 2, 0, 0, 0]);
        let walk = |i: usize| gen_chain(&starts[i], 0, (i % W) as u32, &seed, &base.with_chain(i as u32));

        let mut expected = [0u8; LEN * N];
        for i in 0..LEN {
            expected[i * N..(i + 1) * N].copy_from_slice(&walk(i));
        }
        assert_eq!(map_chains(walk), expected);
    }

    #[test]
    fn test_map_chains_order() {
        let out = map_chains(|i| [i as u8; N]);
        for (i, chunk) in out.chunks_exact(N).enumerate() {
            assert!(chunk.iter().all(|&b| b == i as u8));
        }
    }
}
