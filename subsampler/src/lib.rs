pub mod aggregate;
pub mod assign_weights;
pub mod entry;
mod errors;
pub mod exclusion;
pub mod expand_rules;
pub mod extract;
pub mod filter_records;
pub mod sampling_order;
pub mod scheme;
pub mod stats;
pub mod stratified_sampling;
pub mod subsample;
pub mod taxon_resolver;
#[macro_use]
extern crate log;

pub use entry::{Entry, MetadataColumns};
pub use errors::SubsampleError;
pub use extract::{write_atomically, Extract};
pub use filter_records::{FilterRecords, RecordFilterConfig};
pub use scheme::read_scheme;
pub use stats::Stats;
pub use subsample::{Subsample, SubsampleConfig};

#[cfg(test)]
pub(crate) mod tests {
    use definitions::*;
    /// A record with the columns accession, gtdb_taxonomy, checkm_completeness,
    /// checkm_contamination, gtdb_representative.
    pub fn record(
        accession: &str,
        lineage: [&str; RANK_NUM],
        completeness: f64,
        contamination: f64,
        is_representative: bool,
    ) -> Record {
        let taxonomy: Vec<_> = Rank::TAXONOMY_ORDER
            .iter()
            .zip(lineage.iter())
            .map(|(rank, name)| format!("{}{}", rank.prefix(), name))
            .collect();
        let rep = if is_representative { "t" } else { "f" };
        let fields = vec![
            accession.to_string(),
            taxonomy.join(";"),
            completeness.to_string(),
            contamination.to_string(),
            rep.to_string(),
        ];
        Record {
            accession: accession.to_string(),
            lineage: lineage.map(|x| x.to_string()),
            completeness,
            contamination,
            is_representative,
            fields,
        }
    }
}
