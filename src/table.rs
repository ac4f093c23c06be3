//! Flat-file tables: the title source and the counts sink
//!
//! Input is a CSV with at least one column of free-text titles; output is a
//! three-column CSV of (word1, word2, n). Which column holds the titles and
//! where the files live is the caller's configuration, not ours.
use std::fs::File;
use std::path::Path;
use csv;
use bigrams::CountedBigram;
use errors::*;

/// Stream titles out of one column of a CSV file
///
/// Rows that fail to parse, or that are too short to have the title column,
/// are logged and skipped; flat files from scrapers break sometimes and one
/// bad row should not cost the whole run.
pub struct TitleSource {
    records: csv::StringRecordsIntoIter<File>,
    column: usize,
}

impl TitleSource {
    /// Open `path` and locate `column` in its header row.
    ///
    /// A file that cannot be opened is fatal, and so is a header without the
    /// requested column; neither can be skipped around.
    pub fn open(path: &Path, column: &str) -> Result<Self> {
        let file = File::open(path)
            .map_err(|err| Error::MissingFile("input title table", Some(err)))?;
        let mut reader = csv::Reader::from_reader(file);
        let index = reader.headers()?
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| Error::MissingColumn(column.to_owned()))?;
        Ok(TitleSource {
            records: reader.into_records(),
            column: index,
        })
    }
}

impl Iterator for TitleSource {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.records.next() {
                None => return None,
                Some(Err(err)) => warn!("Skipping a row that would not parse: {}", err),
                Some(Ok(record)) => {
                    match record.get(self.column) {
                        Some(title) => return Some(title.to_owned()),
                        None => warn!("Skipping a row too short to hold the title column"),
                    }
                }
            }
        }
    }
}

/// Write the ranked rows as `word1,word2,n` with a header and no index column.
pub fn write_counts(path: &Path, rows: &[CountedBigram]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&["word1", "word2", "n"])?;
    for row in rows {
        writer.write_record(&[&row.word1, &row.word2, &row.n.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
