//! Pipelines -- the whole subsampling pipeline of a GTDB metadata table.
//!
//! This module runs filtering, subsampling, and reporting in one go, by a TOML profile.
use definitions::MetadataTable;
use log::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use subsampler::*;

/// The configuration of the pipeline.
/// This struct is a comprehensive list of the parameters that can be set by a user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// The path to the GTDB metadata table.
    gtdb_metadata: PathBuf,
    /// The path to the sampling scheme (TOML or JSON).
    sampling_scheme: PathBuf,
    /// The path to the output table.
    output: PathBuf,
    /// If given, write the stats of the selected records to this path.
    #[serde(default)]
    summary: Option<PathBuf>,
    #[serde(default)]
    completeness: f64,
    #[serde(default = "default_contamination")]
    contamination: f64,
    #[serde(default)]
    gtdb_representative: bool,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    verbose: usize,
    #[serde(default = "default_threads")]
    threads: usize,
    /// Column names of the metadata table.
    #[serde(default)]
    columns: MetadataColumns,
}

fn default_contamination() -> f64 {
    100f64
}

fn default_threads() -> usize {
    1
}

impl PipelineConfig {
    pub fn verbose(&self) -> usize {
        self.verbose
    }
    pub fn threads(&self) -> usize {
        self.threads
    }
}

/// Read, filter, and subsample the metadata table, then write the selected records.
/// Nothing is written if any step fails.
pub fn run_pipeline(config: &PipelineConfig) -> Result<MetadataTable, SubsampleError> {
    let PipelineConfig {
        gtdb_metadata,
        sampling_scheme,
        output,
        summary,
        completeness,
        contamination,
        gtdb_representative,
        seed,
        columns,
        ..
    } = config.clone();
    let rules = read_scheme(&sampling_scheme)?;
    let mut table = MetadataTable::entry(&gtdb_metadata, &columns)?;
    let filter_config = RecordFilterConfig::new(completeness, contamination, gtdb_representative);
    table.filter_records(&filter_config);
    info!("FILTER\t{}\tRecords", table.len());
    let subsample_config = SubsampleConfig::new(seed);
    let sampled = table.subsample(&rules, &subsample_config)?;
    info!("SUBSAMPLE\t{}\tRecords", sampled.len());
    sampled.extract_to_file(&output)?;
    if let Some(summary) = summary {
        write_atomically(&summary, |wtr| Ok(sampled.stats(wtr)?))?;
    }
    if log_enabled!(Level::Info) {
        for (domain, count) in sampled.domain_counts() {
            info!("DOMAIN\t{domain}\t{count}");
        }
    }
    Ok(sampled)
}
