//! Definitions -- A tiny interface for the GTDB subsampling problem.
//! The whole run passes around only one, possibly large, structure named [MetadataTable](MetadataTable), together with the [SamplingRule](SamplingRule)s read from a sampling scheme.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of ranks in the GTDB taxonomy string.
pub const RANK_NUM: usize = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Domain = 0,
    Phylum = 1,
    Class = 2,
    Order = 3,
    Family = 4,
    Genus = 5,
    Species = 6,
}

impl Rank {
    /// Ranks from the finest (species) to the coarsest (domain).
    pub const LADDER: [Rank; RANK_NUM] = [
        Rank::Species,
        Rank::Genus,
        Rank::Family,
        Rank::Order,
        Rank::Class,
        Rank::Phylum,
        Rank::Domain,
    ];
    /// Ranks in the order they appear in a GTDB taxonomy string.
    pub const TAXONOMY_ORDER: [Rank; RANK_NUM] = [
        Rank::Domain,
        Rank::Phylum,
        Rank::Class,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
    ];
    /// 0 for domain, 6 for species. Larger is more specific.
    pub fn specificity(&self) -> usize {
        *self as usize
    }
    /// The rank immediately finer than this one.
    pub fn finer(&self) -> Option<Rank> {
        Self::TAXONOMY_ORDER.get(self.specificity() + 1).copied()
    }
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Domain => "domain",
            Rank::Phylum => "phylum",
            Rank::Class => "class",
            Rank::Order => "order",
            Rank::Family => "family",
            Rank::Genus => "genus",
            Rank::Species => "species",
        }
    }
    /// Prefix of this rank in a GTDB taxonomy token, e.g. `g__`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Rank::Domain => "d__",
            Rank::Phylum => "p__",
            Rank::Class => "c__",
            Rank::Order => "o__",
            Rank::Family => "f__",
            Rank::Genus => "g__",
            Rank::Species => "s__",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The two top-level domains of the GTDB taxonomy.
pub const DOMAINS: [&str; 2] = ["Bacteria", "Archaea"];

/// One genome assembly, i.e., one row of the metadata table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Accession without the `GB_`/`RS_` prefix.
    pub accession: String,
    /// Taxon names without rank prefixes, indexed by [Rank::specificity].
    pub lineage: [String; RANK_NUM],
    pub completeness: f64,
    pub contamination: f64,
    pub is_representative: bool,
    /// All the columns of the original row. The accession column holds the stripped accession.
    pub fields: Vec<String>,
}

impl Record {
    pub fn taxon(&self, rank: Rank) -> &str {
        &self.lineage[rank.specificity()]
    }
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetadataTable {
    pub input_file: PathBuf,
    /// Column names of the input file.
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

impl MetadataTable {
    pub fn new<P: AsRef<Path>>(input_file: P, header: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            input_file: input_file.as_ref().to_path_buf(),
            header,
            records,
        }
    }
    /// The same header, but with other records.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            input_file: self.input_file.clone(),
            header: self.header.clone(),
            records,
        }
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parameters of a rule as written in a sampling scheme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamplingParameters {
    /// The rank to group the records by.
    pub sampling_level: Rank,
    /// Take at most this many records from each group.
    pub taxa: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamplingRule {
    pub taxon: String,
    pub target_rank: Rank,
    pub quota: usize,
}

impl SamplingRule {
    pub fn new(taxon: &str, target_rank: Rank, quota: usize) -> Self {
        Self {
            taxon: taxon.to_string(),
            target_rank,
            quota,
        }
    }
    pub fn with_parameters(taxon: &str, param: &SamplingParameters) -> Self {
        Self::new(taxon, param.sampling_level, param.taxa)
    }
}

impl std::fmt::Display for SamplingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.taxon, self.target_rank, self.quota)
    }
}
