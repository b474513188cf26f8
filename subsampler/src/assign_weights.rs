//! Sampling weights that make every child taxon equally likely to be drawn,
//! however many assemblies it has.
use definitions::*;
use std::collections::HashMap;

/// Weights for sampling `pool` at `target_rank`, parallel to `pool`.
/// `None` if the target rank is species, as there is no finer rank to balance.
///
/// Let `n` be the number of distinct taxa one rank below `target_rank` in the pool.
/// A record in a child taxon with `k` records in the pool gets `(1/n)/k`.
pub fn assign_weights(pool: &[&Record], target_rank: Rank) -> Option<Vec<f64>> {
    let child_rank = target_rank.finer()?;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in pool.iter() {
        *counts.entry(record.taxon(child_rank)).or_default() += 1;
    }
    let unit_prob = 1f64 / counts.len().max(1) as f64;
    trace!("WEIGHT\t{}\t{}\t{}", target_rank, child_rank, counts.len());
    let weights = pool
        .iter()
        .map(|record| unit_prob / counts[record.taxon(child_rank)] as f64)
        .collect();
    Some(weights)
}
