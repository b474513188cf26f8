use definitions::*;
use std::collections::HashSet;

/// Concatenate the selections of all rules and remove duplicated rows.
/// Two records are duplicates when every column agrees; the first one is kept.
pub fn aggregate<'a, I>(selections: I) -> Vec<Record>
where
    I: IntoIterator<Item = Vec<&'a Record>>,
{
    let mut seen: HashSet<(&[String], &[String; RANK_NUM])> = HashSet::new();
    let mut records = vec![];
    let mut total = 0;
    for record in selections.into_iter().flatten() {
        total += 1;
        if seen.insert((record.fields(), &record.lineage)) {
            records.push(record.clone());
        }
    }
    debug!("AGGREGATE\t{}\t{}", total, records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::record;
    #[test]
    fn keep_first_of_duplicates() {
        let lineage = ["Bacteria", "P", "C", "O", "F", "G", "G s"];
        let a = record("a", lineage, 90.0, 1.0, true);
        let b = record("b", lineage, 90.0, 1.0, true);
        let a_copy = a.clone();
        let mut a_other = a.clone();
        a_other.fields[1] = "d__Bacteria;p__Q;c__C;o__O;f__F;g__G;s__G s".to_string();
        let result = aggregate(vec![vec![&a, &b], vec![&a_copy, &a_other]]);
        let accessions: Vec<_> = result.iter().map(|r| r.accession.as_str()).collect();
        // Same accession, but a different row.
        assert_eq!(accessions, vec!["a", "b", "a"]);
        assert_eq!(result[0], a);
        assert_eq!(result[2], a_other);
    }
    #[test]
    fn empty_selections() {
        assert!(aggregate(Vec::<Vec<&Record>>::new()).is_empty());
        assert!(aggregate(vec![vec![], vec![]]).is_empty());
    }
}
