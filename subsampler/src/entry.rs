//! Read a GTDB metadata table (tab-separated, with a header row) into a [MetadataTable].
use crate::SubsampleError;
use definitions::{MetadataTable, Rank, Record, RANK_NUM};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Prefixes of the source repository (GenBank/RefSeq) in GTDB accessions.
pub const ACCESSION_PREFIXES: [&str; 2] = ["GB_", "RS_"];

/// Names of the columns we need from the metadata table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetadataColumns {
    pub accession: String,
    pub taxonomy: String,
    pub completeness: String,
    pub contamination: String,
    pub representative: String,
}

impl std::default::Default for MetadataColumns {
    fn default() -> Self {
        Self {
            accession: "accession".to_string(),
            taxonomy: "gtdb_taxonomy".to_string(),
            completeness: "checkm_completeness".to_string(),
            contamination: "checkm_contamination".to_string(),
            representative: "gtdb_representative".to_string(),
        }
    }
}

pub trait Entry: Sized {
    fn entry<P: AsRef<Path>>(input_file: P, columns: &MetadataColumns)
        -> Result<Self, SubsampleError>;
    fn entry_from_reader<P: AsRef<Path>, R: Read>(
        input_file: P,
        reader: R,
        columns: &MetadataColumns,
    ) -> Result<Self, SubsampleError>;
}

impl Entry for MetadataTable {
    fn entry<P: AsRef<Path>>(
        input_file: P,
        columns: &MetadataColumns,
    ) -> Result<Self, SubsampleError> {
        debug!("Opening {}", input_file.as_ref().display());
        let reader = std::fs::File::open(input_file.as_ref()).map(std::io::BufReader::new)?;
        Self::entry_from_reader(input_file, reader, columns)
    }
    fn entry_from_reader<P: AsRef<Path>, R: Read>(
        input_file: P,
        reader: R,
        columns: &MetadataColumns,
    ) -> Result<Self, SubsampleError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .from_reader(reader);
        let header: Vec<String> = rdr.headers()?.iter().map(|x| x.to_string()).collect();
        let index = ColumnIndex::new(&header, columns)?;
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
        let records = rows
            .par_iter()
            .map(|row| index.parse(row))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Input\tRecordNum\t{}", records.len());
        Ok(MetadataTable::new(input_file, header, records))
    }
}

#[derive(Debug, Clone)]
struct ColumnIndex<'a> {
    columns: &'a MetadataColumns,
    accession: usize,
    taxonomy: usize,
    completeness: usize,
    contamination: usize,
    representative: usize,
}

impl<'a> ColumnIndex<'a> {
    fn new(header: &[String], columns: &'a MetadataColumns) -> Result<Self, SubsampleError> {
        let position = |name: &str| {
            header
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| SubsampleError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            columns,
            accession: position(&columns.accession)?,
            taxonomy: position(&columns.taxonomy)?,
            completeness: position(&columns.completeness)?,
            contamination: position(&columns.contamination)?,
            representative: position(&columns.representative)?,
        })
    }
    fn parse(&self, row: &csv::StringRecord) -> Result<Record, SubsampleError> {
        let get = |idx: usize| row.get(idx).unwrap_or("");
        let accession = strip_accession(get(self.accession)).to_string();
        let lineage = parse_taxonomy(&accession, get(self.taxonomy))?;
        let completeness = parse_number(&self.columns.completeness, get(self.completeness))?;
        let contamination = parse_number(&self.columns.contamination, get(self.contamination))?;
        let is_representative = is_true(get(self.representative));
        let mut fields: Vec<String> = row.iter().map(|x| x.to_string()).collect();
        if let Some(field) = fields.get_mut(self.accession) {
            *field = accession.clone();
        }
        Ok(Record {
            accession,
            lineage,
            completeness,
            contamination,
            is_representative,
            fields,
        })
    }
}

/// Remove the source-repository prefix, `GB_` or `RS_`, if any.
pub fn strip_accession(accession: &str) -> &str {
    let accession = accession.trim();
    ACCESSION_PREFIXES
        .iter()
        .find_map(|prefix| accession.strip_prefix(prefix))
        .unwrap_or(accession)
}

/// Split `d__Bacteria;p__...;s__Genus species` into seven taxon names without rank prefixes.
pub fn parse_taxonomy(
    accession: &str,
    taxonomy: &str,
) -> Result<[String; RANK_NUM], SubsampleError> {
    let tokens: Vec<_> = taxonomy.split(';').map(|x| x.trim()).collect();
    if tokens.len() != RANK_NUM {
        return Err(SubsampleError::MalformedTaxonomy {
            accession: accession.to_string(),
            taxonomy: taxonomy.to_string(),
        });
    }
    let mut lineage: [String; RANK_NUM] = Default::default();
    for (rank, token) in Rank::TAXONOMY_ORDER.iter().zip(tokens) {
        let name = token.strip_prefix(rank.prefix()).unwrap_or(token);
        lineage[rank.specificity()] = name.to_string();
    }
    Ok(lineage)
}

fn parse_number(column: &str, value: &str) -> Result<f64, SubsampleError> {
    value
        .trim()
        .parse()
        .map_err(|_| SubsampleError::InvalidNumber {
            column: column.to_string(),
            value: value.to_string(),
        })
}

fn is_true(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "t" | "true")
}
