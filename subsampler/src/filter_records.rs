use definitions::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecordFilterConfig {
    /// Discard records with completeness less than this value.
    completeness_min: f64,
    /// Discard records with contamination more than this value.
    contamination_max: f64,
    /// If true, keep only GTDB species representatives.
    representative_only: bool,
}

impl RecordFilterConfig {
    pub fn new(completeness_min: f64, contamination_max: f64, representative_only: bool) -> Self {
        Self {
            completeness_min,
            contamination_max,
            representative_only,
        }
    }
    pub fn pass(&self, record: &Record) -> bool {
        record.contamination <= self.contamination_max
            && record.completeness >= self.completeness_min
            && (!self.representative_only || record.is_representative)
    }
}

impl std::default::Default for RecordFilterConfig {
    fn default() -> Self {
        Self::new(0f64, 100f64, false)
    }
}

pub trait FilterRecords {
    fn filter_records(&mut self, config: &RecordFilterConfig);
}

impl FilterRecords for MetadataTable {
    fn filter_records(&mut self, config: &RecordFilterConfig) {
        let prev = self.records.len();
        self.records.retain(|record| config.pass(record));
        debug!("FILTER\t{:?}", config);
        debug!("FILTER\t{}\t{}", prev, self.records.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::record;
    fn table() -> MetadataTable {
        let lineage = ["Bacteria", "P", "C", "O", "F", "G", "G s"];
        let records = vec![
            record("a", lineage, 99.0, 0.5, true),
            record("b", lineage, 49.0, 0.5, true),
            record("c", lineage, 90.0, 12.0, false),
            record("d", lineage, 70.0, 4.0, false),
            record("e", lineage, 50.0, 10.0, true),
        ];
        MetadataTable::new("test.tsv", vec![], records)
    }
    fn accessions(table: &MetadataTable) -> Vec<&str> {
        table.records.iter().map(|r| r.accession.as_str()).collect()
    }
    #[test]
    fn default_keeps_everything() {
        let mut table = table();
        table.filter_records(&RecordFilterConfig::default());
        assert_eq!(table.len(), 5);
    }
    #[test]
    fn thresholds_are_inclusive() {
        let mut table = table();
        table.filter_records(&RecordFilterConfig::new(50.0, 10.0, false));
        assert_eq!(accessions(&table), vec!["a", "d", "e"]);
    }
    #[test]
    fn representative_only() {
        let mut table = table();
        table.filter_records(&RecordFilterConfig::new(50.0, 10.0, true));
        assert_eq!(accessions(&table), vec!["a", "e"]);
    }
    #[test]
    fn idempotent() {
        let config = RecordFilterConfig::new(60.0, 5.0, false);
        let mut once = table();
        once.filter_records(&config);
        let mut twice = once.clone();
        twice.filter_records(&config);
        assert_eq!(once.records, twice.records);
    }
}
