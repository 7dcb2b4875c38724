//! Weighted random selection.
//!
//! One shared primitive serves crisis selection, event selection, and
//! action-menu sampling: a linear cumulative-weight scan over candidates
//! in table insertion order. Not alias sampling, not binary search — the
//! scan order must be stable and deterministic so that identical
//! `(state, draw)` pairs always yield the same selection.

use rand::RngCore;

use crate::rng::unit;

/// Pick an index from `weights` proportionally, consuming one draw.
///
/// Entries with non-positive weight are excluded from both the total and
/// the scan. Returns `None` when nothing is eligible (an empty candidate
/// set is not an error). If floating-point drift leaves a remainder after
/// the full scan, the last eligible entry is selected.
pub fn pick_index(weights: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return None;
    }

    let mut remainder = unit(rng) * total;
    let mut last_eligible = None;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        last_eligible = Some(index);
        remainder -= weight;
        if remainder <= 0.0 {
            return Some(index);
        }
    }
    last_eligible
}

/// Draw up to `count` elements uniformly without replacement, preserving
/// no particular order beyond the draw sequence itself.
///
/// If the pool holds fewer than `count` elements, the whole pool is
/// returned (in draw order). Each draw consumes exactly one unit draw.
pub fn sample_without_replacement<T: Copy>(
    pool: &[T],
    count: usize,
    rng: &mut dyn RngCore,
) -> Vec<T> {
    let mut remaining: Vec<T> = pool.to_vec();
    let mut picked = Vec::with_capacity(count.min(remaining.len()));
    while picked.len() < count && !remaining.is_empty() {
        let index = scaled_index(unit(rng), remaining.len());
        picked.push(remaining.remove(index));
    }
    picked
}

/// Map a unit draw onto `[0, len)`.
// Truncation is the intent here: floor(draw * len), then guard the
// theoretical draw == 1.0 - epsilon rounding edge.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled_index(draw: f64, len: usize) -> usize {
    ((draw * len as f64) as usize).min(len.saturating_sub(1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    #[test]
    fn empty_weights_select_nothing() {
        let mut rng = Mulberry32::new(1);
        assert_eq!(pick_index(&[], &mut rng), None);
    }

    #[test]
    fn all_zero_weights_select_nothing() {
        let mut rng = Mulberry32::new(1);
        assert_eq!(pick_index(&[0.0, 0.0, -1.0], &mut rng), None);
    }

    #[test]
    fn single_candidate_always_wins() {
        let mut rng = Mulberry32::new(1);
        for _ in 0..100 {
            assert_eq!(pick_index(&[0.75], &mut rng), Some(0));
        }
    }

    #[test]
    fn zero_weight_candidates_are_never_selected() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..1_000 {
            let picked = pick_index(&[0.0, 1.0, 0.0, 2.0], &mut rng).unwrap();
            assert!(picked == 1 || picked == 3);
        }
    }

    #[test]
    fn selection_frequencies_track_weights() {
        // Weights [1, 1, 2] must converge to [25%, 25%, 50%].
        let mut rng = Mulberry32::new(2_024);
        let mut counts = [0_u32; 3];
        let draws = 40_000;
        for _ in 0..draws {
            let picked = pick_index(&[1.0, 1.0, 2.0], &mut rng).unwrap();
            if let Some(slot) = counts.get_mut(picked) {
                *slot = slot.saturating_add(1);
            }
        }
        let share = |n: u32| f64::from(n) / f64::from(draws);
        assert!((share(counts[0]) - 0.25).abs() < 0.02, "got {counts:?}");
        assert!((share(counts[1]) - 0.25).abs() < 0.02, "got {counts:?}");
        assert!((share(counts[2]) - 0.50).abs() < 0.02, "got {counts:?}");
    }

    #[test]
    fn identical_draws_yield_identical_selections() {
        let weights = [0.3, 1.2, 0.0, 2.5];
        let mut a = Mulberry32::new(555);
        let mut b = Mulberry32::new(555);
        for _ in 0..500 {
            assert_eq!(pick_index(&weights, &mut a), pick_index(&weights, &mut b));
        }
    }

    #[test]
    fn sampling_without_replacement_never_repeats() {
        let mut rng = Mulberry32::new(9);
        let pool = [1, 2, 3, 4, 5, 6, 7, 8];
        for _ in 0..200 {
            let mut picked = sample_without_replacement(&pool, 3, &mut rng);
            assert_eq!(picked.len(), 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3, "a draw repeated an element");
        }
    }

    #[test]
    fn short_pools_are_returned_whole() {
        let mut rng = Mulberry32::new(9);
        let picked = sample_without_replacement(&[10, 20], 5, &mut rng);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![10, 20]);
    }

    #[test]
    fn scaled_index_stays_in_bounds() {
        assert_eq!(scaled_index(0.0, 4), 0);
        assert_eq!(scaled_index(0.999_999, 4), 3);
        assert_eq!(scaled_index(0.5, 1), 0);
    }
}
