use crate::SubsampleError;
use definitions::*;
use rand::distributions::WeightedError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Group `pool` by the taxon at `target_rank` and take at most `quota` records from each group.
/// A group with no more than `quota` records is taken as a whole. Otherwise, exactly `quota`
/// records are drawn without replacement, by `weights` (parallel to `pool`) if given,
/// uniformly if not. Only the ratios between the weights of a group matter.
/// Groups are visited in the lexicographic order of their names, and the records picked from
/// a group keep their order in the pool.
pub fn stratified_sample<'a, R: Rng>(
    pool: &[&'a Record],
    weights: Option<&[f64]>,
    target_rank: Rank,
    quota: usize,
    rng: &mut R,
) -> Result<Vec<&'a Record>, SubsampleError> {
    if let Some(weights) = weights {
        assert_eq!(weights.len(), pool.len());
    }
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, record) in pool.iter().enumerate() {
        groups
            .entry(record.taxon(target_rank))
            .or_default()
            .push(idx);
    }
    let mut selection = Vec::with_capacity(pool.len().min(groups.len().saturating_mul(quota)));
    for (name, group) in groups.iter() {
        if group.len() <= quota {
            trace!("SAMPLE\t{name}\t{}\tAll", group.len());
            selection.extend(group.iter().map(|&idx| pool[idx]));
            continue;
        }
        let mut picked: Vec<usize> = match weights {
            Some(weights) => weighted_draw(group, weights, quota, rng)?,
            None => group.choose_multiple(rng, quota).copied().collect(),
        };
        picked.sort_unstable();
        trace!("SAMPLE\t{name}\t{}\t{}", group.len(), picked.len());
        selection.extend(picked.iter().map(|&idx| pool[idx]));
    }
    Ok(selection)
}

// Efraimidis-Spirakis successive sampling with the keys `ln(u)/w` in place of `u^(1/w)`.
// The latter underflows to zero once the weights get as small as 1/(# of taxa in GTDB).
fn weighted_draw<R: Rng>(
    group: &[usize],
    weights: &[f64],
    quota: usize,
    rng: &mut R,
) -> Result<Vec<usize>, WeightedError> {
    let mut keys = Vec::with_capacity(group.len());
    for &idx in group.iter() {
        let weight = weights[idx];
        if !(weight.is_finite() && 0f64 <= weight) {
            return Err(WeightedError::InvalidWeight);
        }
        let key = match weight > 0f64 {
            true => (1f64 - rng.gen::<f64>()).ln() / weight,
            false => f64::NEG_INFINITY,
        };
        keys.push((key, idx));
    }
    keys.sort_unstable_by(|x, y| y.0.total_cmp(&x.0));
    Ok(keys.into_iter().take(quota).map(|(_, idx)| idx).collect())
}
