use crate::SubsampleError;
use definitions::*;
use std::collections::HashSet;

/// Find the rank of a taxon name by looking it up in every rank column of a table.
#[derive(Debug, Clone)]
pub struct TaxonResolver<'a> {
    /// Taxon names of each rank, indexed by [Rank::specificity].
    names: Vec<HashSet<&'a str>>,
}

impl<'a> TaxonResolver<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        let mut names = vec![HashSet::new(); RANK_NUM];
        for record in records.iter() {
            for (rank, name) in names.iter_mut().zip(record.lineage.iter()) {
                rank.insert(name.as_str());
            }
        }
        Self { names }
    }
    pub fn contains(&self, rank: Rank, taxon: &str) -> bool {
        self.names[rank.specificity()].contains(taxon)
    }
    /// The first rank, scanning from species to domain, whose column contains `taxon`.
    pub fn resolve(&self, taxon: &str) -> Result<Rank, SubsampleError> {
        let mut ranks = Rank::LADDER
            .iter()
            .filter(|&&rank| self.contains(rank, taxon));
        let rank = ranks
            .next()
            .copied()
            .ok_or_else(|| SubsampleError::UnknownTaxon {
                taxon: taxon.to_string(),
            })?;
        for other in ranks {
            warn!("AMBIGUOUS\t{taxon}\t{rank}\t{other}\tResolved to {rank}");
        }
        Ok(rank)
    }
}
