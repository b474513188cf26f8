use definitions::*;
use std::collections::HashSet;

/// Accessions already considered by some rule. It only grows during a run.
#[derive(Debug, Clone, Default)]
pub struct UsedPool {
    accessions: HashSet<String>,
}

impl UsedPool {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn contains(&self, accession: &str) -> bool {
        self.accessions.contains(accession)
    }
    pub fn len(&self) -> usize {
        self.accessions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.accessions.is_empty()
    }
    /// Drop the records already in the pool.
    pub fn filter_unused<'a>(&self, mut pool: Vec<&'a Record>) -> Vec<&'a Record> {
        pool.retain(|record| !self.contains(&record.accession));
        pool
    }
    /// Insert every accession of a candidate pool, selected or not.
    pub fn mark_used(&mut self, pool: &[&Record]) {
        self.accessions
            .extend(pool.iter().map(|record| record.accession.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::record;
    #[test]
    fn used_records_are_excluded() {
        let lineage = ["Bacteria", "P", "C", "O", "F", "G", "G s"];
        let records: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|acc| record(acc, lineage, 90.0, 1.0, true))
            .collect();
        let mut used = UsedPool::new();
        assert!(used.is_empty());
        let all: Vec<_> = records.iter().collect();
        assert_eq!(used.filter_unused(all.clone()).len(), 4);
        used.mark_used(&all[..2]);
        assert_eq!(used.len(), 2);
        let rest: Vec<_> = used
            .filter_unused(all.clone())
            .iter()
            .map(|r| r.accession.clone())
            .collect();
        assert_eq!(rest, vec!["c", "d"]);
        // Marking twice does nothing.
        used.mark_used(&all[..2]);
        assert_eq!(used.len(), 2);
        used.mark_used(&all);
        assert!(used.filter_unused(all).is_empty());
    }
}
