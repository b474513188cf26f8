use definitions::Rank;
use thiserror::Error;

/// Every way a subsampling run can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum SubsampleError {
    /// A rule names a taxon that no rank column contains.
    #[error("{taxon} is not present in the metadata table")]
    UnknownTaxon { taxon: String },

    /// A rule asks to group records by a rank coarser than its own taxon.
    #[error("can not sample {taxon} ({taxon_rank}) at the coarser rank {target_rank}")]
    InvalidRankOrder {
        taxon: String,
        taxon_rank: Rank,
        target_rank: Rank,
    },

    #[error("column {0} is missing from the metadata header")]
    MissingColumn(String),

    #[error("malformed taxonomy for {accession}: {taxonomy}")]
    MalformedTaxonomy { accession: String, taxonomy: String },

    #[error("can not parse {value:?} in column {column} as a number")]
    InvalidNumber { column: String, value: String },

    #[error("invalid sampling scheme: {0}")]
    Scheme(String),

    #[error("invalid sampling weights: {0}")]
    Weight(#[from] rand::distributions::WeightedError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SubsampleError {
    fn from(why: toml::de::Error) -> Self {
        SubsampleError::Scheme(why.to_string())
    }
}

impl From<serde_json::Error> for SubsampleError {
    fn from(why: serde_json::Error) -> Self {
        SubsampleError::Scheme(why.to_string())
    }
}

impl From<serde_yaml::Error> for SubsampleError {
    fn from(why: serde_yaml::Error) -> Self {
        SubsampleError::Scheme(why.to_string())
    }
}
