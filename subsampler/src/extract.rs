use crate::SubsampleError;
use definitions::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub trait Extract {
    /// Write the table as tab-separated values: the input columns, then the seven ranks.
    fn extract<W: std::io::Write>(&self, wtr: W) -> Result<(), SubsampleError>;
    /// Write the table to `path`. Nothing appears at `path` unless the whole table was written.
    fn extract_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SubsampleError> {
        write_atomically(path, |wtr| self.extract(wtr))
    }
}

/// Run `write` on a sibling temporary file and move it to `path` once `write` succeeds.
/// On failure, the temporary file is removed and `path` is left as it was.
pub fn write_atomically<P, F>(path: P, write: F) -> Result<(), SubsampleError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), SubsampleError>,
{
    let path = path.as_ref();
    let tmp_path = temporary_path(path);
    let result = File::create(&tmp_path)
        .map(BufWriter::new)
        .map_err(SubsampleError::from)
        .and_then(|mut wtr| {
            write(&mut wtr)?;
            wtr.into_inner().map_err(|why| why.into_error())?;
            Ok(())
        })
        .and_then(|_| std::fs::rename(&tmp_path, path).map_err(SubsampleError::from));
    if result.is_err() && tmp_path.exists() {
        if let Err(why) = std::fs::remove_file(&tmp_path) {
            warn!("Could not remove {}\t{}", tmp_path.display(), why);
        }
    }
    result
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| std::ffi::OsStr::new("output")));
    name.push(".tmp");
    path.with_file_name(name)
}

impl Extract for MetadataTable {
    fn extract<W: std::io::Write>(&self, wtr: W) -> Result<(), SubsampleError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(wtr);
        let ranks = Rank::TAXONOMY_ORDER.iter().map(|rank| rank.name());
        wtr.write_record(self.header.iter().map(|x| x.as_str()).chain(ranks))?;
        for record in self.records.iter() {
            let names = Rank::TAXONOMY_ORDER.iter().map(|&rank| record.taxon(rank));
            wtr.write_record(record.fields().iter().map(|x| x.as_str()).chain(names))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{tests::METADATA, Entry, MetadataColumns};
    #[test]
    fn write_table() {
        let columns = MetadataColumns::default();
        let table =
            MetadataTable::entry_from_reader("test.tsv", METADATA.as_bytes(), &columns).unwrap();
        let mut output = vec![];
        table.extract(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        let header: Vec<_> = lines[0].split('\t').collect();
        assert_eq!(header.len(), 12);
        assert_eq!(header[0], "accession");
        assert_eq!(&header[5..], &["domain", "phylum", "class", "order", "family", "genus", "species"]);
        let row: Vec<_> = lines[1].split('\t').collect();
        assert_eq!(row.len(), 12);
        assert_eq!(row[0], "GCF_000001");
        assert_eq!(row[5], "Bacteria");
        assert_eq!(row[11], "Escherichia coli");
        // The written table can be read again.
        let again =
            MetadataTable::entry_from_reader("again.tsv", output.as_bytes(), &columns).unwrap();
        assert_eq!(again.len(), 3);
        assert_eq!(again.records[2].accession, "GCA_000003");
    }
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("{name}_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
    #[test]
    fn write_table_to_file() {
        let columns = MetadataColumns::default();
        let table =
            MetadataTable::entry_from_reader("test.tsv", METADATA.as_bytes(), &columns).unwrap();
        let dir = scratch_dir("extract_file");
        let path = dir.join("out.tsv");
        table.extract_to_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert!(!temporary_path(&path).exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
    #[test]
    fn failed_write_leaves_no_file() {
        use std::io::Write;
        let dir = scratch_dir("extract_failure");
        let path = dir.join("out.tsv");
        let result = write_atomically(&path, |wtr| {
            writeln!(wtr, "accession\tgtdb_taxonomy")?;
            Err(SubsampleError::Scheme("stopped halfway".to_string()))
        });
        assert!(matches!(result, Err(SubsampleError::Scheme(_))));
        assert!(!path.exists());
        assert!(!temporary_path(&path).exists());
        // A failed write does not clobber an earlier table either.
        std::fs::write(&path, "old").unwrap();
        let result = write_atomically(&path, |_| Err(SubsampleError::MissingColumn("x".into())));
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
