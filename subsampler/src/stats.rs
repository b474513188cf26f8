use definitions::*;
use std::collections::{BTreeMap, HashSet};

pub trait Stats {
    fn stats<W: std::io::Write>(&self, wtr: W) -> std::io::Result<()>;
    /// The number of distinct taxa at each rank, from domain to species.
    fn taxa_counts(&self) -> [usize; RANK_NUM];
    /// The number of records in each domain.
    fn domain_counts(&self) -> BTreeMap<&str, usize>;
}

impl Stats for MetadataTable {
    fn stats<W: std::io::Write>(&self, mut wtr: W) -> std::io::Result<()> {
        writeln!(&mut wtr, "Input:{}", self.input_file.display())?;
        writeln!(&mut wtr, "# of Records:{}", self.records.len())?;
        if self.records.is_empty() {
            return Ok(());
        }
        let reps = self.records.iter().filter(|r| r.is_representative).count();
        writeln!(&mut wtr, "# of Representatives:{}", reps)?;
        let len = self.records.len() as f64;
        let completeness = self.records.iter().map(|r| r.completeness).sum::<f64>() / len;
        let contamination = self.records.iter().map(|r| r.contamination).sum::<f64>() / len;
        writeln!(&mut wtr, "Mean Completeness:{:.2}", completeness)?;
        writeln!(&mut wtr, "Mean Contamination:{:.2}", contamination)?;
        writeln!(&mut wtr, "Rank\t# of Taxa")?;
        for (rank, count) in Rank::TAXONOMY_ORDER.iter().zip(self.taxa_counts()) {
            writeln!(&mut wtr, "{}\t{}", rank, count)?;
        }
        writeln!(&mut wtr, "Domain\t# of Records")?;
        for (domain, count) in self.domain_counts() {
            writeln!(&mut wtr, "{}\t{}", domain, count)?;
        }
        Ok(())
    }
    fn taxa_counts(&self) -> [usize; RANK_NUM] {
        let mut taxa = vec![HashSet::new(); RANK_NUM];
        for record in self.records.iter() {
            for (names, name) in taxa.iter_mut().zip(record.lineage.iter()) {
                names.insert(name.as_str());
            }
        }
        let mut counts = [0; RANK_NUM];
        for (count, names) in counts.iter_mut().zip(taxa.iter()) {
            *count = names.len();
        }
        counts
    }
    fn domain_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in self.records.iter() {
            *counts.entry(record.taxon(Rank::Domain)).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::record;
    #[test]
    fn counts() {
        let records = vec![
            record("a", ["Bacteria", "P1", "C", "O", "F", "G1", "G1 a"], 90.0, 1.0, true),
            record("b", ["Bacteria", "P1", "C", "O", "F", "G1", "G1 b"], 80.0, 3.0, false),
            record("c", ["Bacteria", "P2", "C2", "O2", "F2", "G2", "G2 a"], 70.0, 2.0, true),
            record("d", ["Archaea", "P3", "C3", "O3", "F3", "G3", "G3 a"], 60.0, 2.0, true),
        ];
        let table = MetadataTable::new("test.tsv", vec![], records);
        assert_eq!(table.taxa_counts(), [2, 3, 3, 3, 3, 3, 4]);
        let domains = table.domain_counts();
        assert_eq!(domains["Bacteria"], 3);
        assert_eq!(domains["Archaea"], 1);
        let mut output = vec![];
        table.stats(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("# of Records:4"));
        assert!(output.contains("# of Representatives:3"));
        assert!(output.contains("Mean Completeness:75.00"));
        assert!(output.contains("species\t4"));
        assert!(output.contains("Archaea\t1"));
    }
    #[test]
    fn empty_table() {
        let table = MetadataTable::default();
        let mut output = vec![];
        table.stats(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("# of Records:0"));
    }
}
