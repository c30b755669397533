//! FASTA file writing.

use anyhow::{Context, Result};
use noodles::fasta;
use noodles::fasta::record::{Definition, Sequence};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File extension appended to the record identifier to form the output path.
pub const FASTA_EXTENSION: &str = "fasta";

/// A single FASTA record: identifier, free-text description and sequence.
#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// Output filename for this record: the identifier with the `.fasta`
    /// extension appended.
    ///
    /// The identifier is trusted verbatim; an identifier containing path
    /// separators or other characters the filesystem rejects surfaces as a
    /// write error.
    pub fn filename(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.id, FASTA_EXTENSION))
    }
}

/// Writer for single-record FASTA files.
///
/// Wraps a `noodles` FASTA writer configured to keep the whole sequence on
/// one line instead of wrapping at a fixed column, so each record occupies
/// exactly two lines: `>{id} {description}` followed by the sequence.
pub struct FastaWriter {
    writer: fasta::io::Writer<BufWriter<File>>,
}

impl FastaWriter {
    /// Creates a FASTA writer for the given path, truncating any existing
    /// file at that path.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create FASTA file: {}", path.display()))?;

        let writer = fasta::io::writer::Builder::default()
            .set_line_base_count(usize::MAX)
            .build_from_writer(BufWriter::new(file));

        Ok(Self { writer })
    }

    /// Writes a single record.
    pub fn write_record(&mut self, record: &FastaRecord) -> Result<()> {
        let definition = Definition::new(
            record.id.as_str(),
            Some(record.description.clone().into()),
        );
        let sequence = Sequence::from(record.sequence.clone());

        self.writer
            .write_record(&fasta::Record::new(definition, sequence))
            .context("Failed to write FASTA record")
    }

    /// Flushes the internal buffer to ensure all data is written.
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .get_mut()
            .flush()
            .context("Failed to flush FASTA writer")
    }
}

/// Writes `record` to `{id}.fasta` in the current working directory,
/// overwriting any existing file, and returns the path written.
pub fn save_record(record: &FastaRecord) -> Result<PathBuf> {
    let path = record.filename();

    let mut writer = FastaWriter::create(&path)?;
    writer.write_record(record)?;
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, description: &str, sequence: &[u8]) -> FastaRecord {
        FastaRecord {
            id: id.to_string(),
            description: description.to_string(),
            sequence: sequence.to_vec(),
        }
    }

    #[test]
    fn test_filename_appends_extension() {
        let record = record("seq1", "test sequence", b"ACGT");
        assert_eq!(record.filename(), PathBuf::from("seq1.fasta"));
    }

    #[test]
    fn test_writes_exact_two_line_block() {
        let temp_file = std::env::temp_dir().join("fastagen_test_block.fasta");

        {
            let mut writer = FastaWriter::create(&temp_file).unwrap();
            writer
                .write_record(&record("seq1", "test sequence", b"ACGT"))
                .unwrap();
            writer.flush().unwrap();
        }

        let content = std::fs::read_to_string(&temp_file).unwrap();
        assert_eq!(content, ">seq1 test sequence\nACGT\n");

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_long_sequence_is_not_wrapped() {
        let temp_file = std::env::temp_dir().join("fastagen_test_unwrapped.fasta");

        {
            let mut writer = FastaWriter::create(&temp_file).unwrap();
            writer
                .write_record(&record("long", "no wrapping", &vec![b'A'; 500]))
                .unwrap();
            writer.flush().unwrap();
        }

        let content = std::fs::read_to_string(&temp_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 500);

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_file = std::env::temp_dir().join("fastagen_test_overwrite.fasta");
        std::fs::write(&temp_file, "stale content that is much longer than the record").unwrap();

        {
            let mut writer = FastaWriter::create(&temp_file).unwrap();
            writer.write_record(&record("fresh", "new", b"ACGT")).unwrap();
            writer.flush().unwrap();
        }

        let content = std::fs::read_to_string(&temp_file).unwrap();
        assert_eq!(content, ">fresh new\nACGT\n");

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_save_record_returns_path() {
        // save_record writes relative to the current directory
        let record = record("fastagen_test_save", "saved", b"ACGT");

        let path = save_record(&record).unwrap();
        assert_eq!(path, PathBuf::from("fastagen_test_save.fasta"));
        assert!(path.exists());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_pipeline_end_to_end() {
        use crate::generator::{generate_sequence, insert_name};
        use crate::stats::SequenceStats;
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(7);
        let sequence = generate_sequence(10, &mut rng);
        let stats = SequenceStats::from_sequence(&sequence);
        let payload = insert_name(&sequence, "Bob", &mut rng);

        let path = save_record(&record("fastagen_test_demo", "sample", &payload)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], ">fastagen_test_demo sample");
        assert_eq!(lines[1].len(), 13);
        assert!(lines[1].contains("Bob"));

        // Statistics reflect the 10-base sequence from before the insertion
        let sum = stats.a + stats.c + stats.g + stats.t;
        assert!((sum - 100.0).abs() < 1e-9);

        std::fs::remove_file(path).ok();
    }
}
