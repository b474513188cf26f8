use crate::taxon_resolver::TaxonResolver;
use crate::SubsampleError;
use definitions::*;
use std::collections::BTreeMap;

/// A rule together with the rank of its taxon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    pub rule: SamplingRule,
    pub taxon_rank: Rank,
}

/// Rules bucketed by the rank of their taxon.
#[derive(Debug, Clone, Default)]
pub struct SamplingOrder {
    buckets: BTreeMap<Rank, Vec<ResolvedRule>>,
}

impl SamplingOrder {
    pub fn build(rules: &[SamplingRule], resolver: &TaxonResolver) -> Result<Self, SubsampleError> {
        let mut buckets: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for rule in rules.iter() {
            let taxon_rank = resolver.resolve(&rule.taxon)?;
            // Grouping a taxon by a coarser rank than its own gives nothing but one group.
            if rule.target_rank.specificity() < taxon_rank.specificity() {
                return Err(SubsampleError::InvalidRankOrder {
                    taxon: rule.taxon.clone(),
                    taxon_rank,
                    target_rank: rule.target_rank,
                });
            }
            debug!("ORDER\t{}\t{}", rule, taxon_rank);
            buckets.entry(taxon_rank).or_default().push(ResolvedRule {
                rule: rule.clone(),
                taxon_rank,
            });
        }
        Ok(Self { buckets })
    }
    /// Rules from the most specific taxon rank to the least specific one.
    /// Rules of the same rank keep their order in the scheme.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedRule> {
        self.buckets.values().rev().flat_map(|rules| rules.iter())
    }
    pub fn len(&self) -> usize {
        self.buckets.values().map(|x| x.len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
