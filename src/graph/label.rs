//! Entity label table.
//!
//! Maps raw node identifiers to display labels. Loaded once from a
//! tab-separated node file (`id<TAB>label<TAB>...`) before the index is
//! built; fields after the label are ignored and a repeated id overwrites the
//! earlier label.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashMap;
use log::info;

use crate::error::{RelataError, Result};

#[derive(Clone, Debug, Default)]
pub struct LabelTable {
    labels: AHashMap<String, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a label table from a TSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Parse a label table from any reader. `source_name` only labels errors.
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut table = LabelTable::new();
        let mut lines_read = 0usize;

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let mut fields = line.split('\t');

            let (Some(id), Some(label)) = (fields.next(), fields.next()) else {
                return Err(RelataError::input_format(
                    source_name,
                    index + 1,
                    "expected at least 2 tab-separated fields (id, label)",
                ));
            };

            table.insert(id, label);
            lines_read += 1;
        }

        info!(
            "loaded {} labels from {} ({} lines)",
            table.len(),
            source_name,
            lines_read
        );

        Ok(table)
    }

    /// Add or overwrite the label for `id`.
    pub fn insert<I: Into<String>, L: Into<String>>(&mut self, id: I, label: L) {
        self.labels.insert(id.into(), label.into());
    }

    /// The label for `id`, or `""` if the id is unknown.
    pub fn resolve(&self, id: &str) -> &str {
        self.labels.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<I, L> FromIterator<(I, L)> for LabelTable
where
    I: Into<String>,
    L: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, L)>>(iter: T) -> Self {
        let mut table = LabelTable::new();
        for (id, label) in iter {
            table.insert(id, label);
        }
        table
    }
}
