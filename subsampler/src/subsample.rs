//! Subsample -- the whole pass from a sampling scheme to the selected records.
//!
//! Rules are processed from the most specific taxon rank to the least specific one. Each rule
//! takes the records of its taxon not yet considered by an earlier rule (the candidate pool),
//! samples at most `quota` records from each group at the target rank, and then marks the
//! whole candidate pool as used.
use crate::assign_weights::assign_weights;
use crate::exclusion::UsedPool;
use crate::expand_rules::expand_rules;
use crate::sampling_order::{ResolvedRule, SamplingOrder};
use crate::stratified_sampling::stratified_sample;
use crate::taxon_resolver::TaxonResolver;
use crate::SubsampleError;
use definitions::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubsampleConfig {
    /// Seed for the random number generator. If None, the run is not reproducible.
    seed: Option<u64>,
}

impl SubsampleConfig {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
    fn rng(&self) -> Xoshiro256PlusPlus {
        match self.seed {
            Some(seed) => SeedableRng::seed_from_u64(seed),
            None => SeedableRng::from_entropy(),
        }
    }
}

pub trait Subsample {
    /// Select records by `rules`. `self` should be filtered beforehand.
    fn subsample(
        &self,
        rules: &[SamplingRule],
        config: &SubsampleConfig,
    ) -> Result<MetadataTable, SubsampleError>;
}

impl Subsample for MetadataTable {
    fn subsample(
        &self,
        rules: &[SamplingRule],
        config: &SubsampleConfig,
    ) -> Result<MetadataTable, SubsampleError> {
        let rules = expand_rules(rules.to_vec());
        let resolver = TaxonResolver::new(&self.records);
        let order = SamplingOrder::build(&rules, &resolver)?;
        debug!("SUBSAMPLE\t{}\tRules", order.len());
        let mut rng = config.rng();
        let mut used = UsedPool::new();
        let mut selections = Vec::with_capacity(order.len());
        for rule in order.iter() {
            let selection = sample_by_rule(&self.records, rule, &mut used, &mut rng)?;
            selections.push(selection);
        }
        let records = crate::aggregate::aggregate(selections);
        debug!("SUBSAMPLE\t{}\t{}", self.records.len(), records.len());
        Ok(self.with_records(records))
    }
}

/// Sample by one rule and mark its candidate pool as used.
pub fn sample_by_rule<'a, R: Rng>(
    records: &'a [Record],
    rule: &ResolvedRule,
    used: &mut UsedPool,
    rng: &mut R,
) -> Result<Vec<&'a Record>, SubsampleError> {
    let ResolvedRule { rule, taxon_rank } = rule;
    let pool: Vec<_> = records
        .iter()
        .filter(|record| record.taxon(*taxon_rank) == rule.taxon)
        .collect();
    let pool = used.filter_unused(pool);
    let weights = assign_weights(&pool, rule.target_rank);
    let selection = stratified_sample(
        &pool,
        weights.as_deref(),
        rule.target_rank,
        rule.quota,
        rng,
    )?;
    used.mark_used(&pool);
    debug!("RULE\t{}\t{}\t{}", rule, pool.len(), selection.len());
    Ok(selection)
}
