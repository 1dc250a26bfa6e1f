//! Dataset Loader: reads the career recommendation CSV into memory once at startup.
//!
//! The loader is deliberately lenient about schema: a missing column is not a
//! load failure, it just means every row has an absent value in that slot.
//! Historical header spellings are folded into one canonical slot here so the
//! query layer never has to branch on them.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::models::{CareerRecord, Category, Level, Slot};

pub const LANGUAGE_COLUMN: &str = "Programming Language";
pub const CAREER_COLUMN: &str = "Career Path";
pub const DESCRIPTION_COLUMN: &str = "Description";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no header row")]
    Empty,
}

/// What a CSV header maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Language,
    Career,
    Description,
    Recommendation(Slot),
}

/// How a header spells its slot. When several spellings of one slot are
/// filled in a row, the lowest variant wins regardless of column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Spelling {
    Advance,
    Canonical,
    Singular,
}

/// Maps a (trimmed) header name to its column role.
///
/// `{Level} Courses`, `{Level} Recommended Certifications` and
/// `{Level} Recommended Projects` are canonical. `Advance Recommended Projects`
/// and the singular `{Level} Recommended Project` are historical spellings of
/// the projects slot.
fn column_for_header(header: &str) -> Option<(Column, Spelling)> {
    match header {
        LANGUAGE_COLUMN => return Some((Column::Language, Spelling::Canonical)),
        CAREER_COLUMN => return Some((Column::Career, Spelling::Canonical)),
        DESCRIPTION_COLUMN => return Some((Column::Description, Spelling::Canonical)),
        "Advance Recommended Projects" => {
            let slot = Slot::new(Level::Advanced, Category::Projects);
            return Some((Column::Recommendation(slot), Spelling::Advance));
        }
        _ => {}
    }

    let (level, rest) = header.split_once(' ')?;
    let level = Level::from_column_fragment(level)?;
    let (category, spelling) = match rest {
        "Courses" => (Category::Courses, Spelling::Canonical),
        "Recommended Certifications" => (Category::Certifications, Spelling::Canonical),
        "Recommended Projects" => (Category::Projects, Spelling::Canonical),
        "Recommended Project" => (Category::Projects, Spelling::Singular),
        _ => return None,
    };
    Some((Column::Recommendation(Slot::new(level, category)), spelling))
}

/// The immutable, in-memory career dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CareerRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CareerRecord>) -> Self {
        Self { records }
    }

    /// Loads the dataset from a CSV file. Any failure here is fatal to startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} career records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LoadError::Empty);
        }

        // Cells are read by spelling priority, then header order; first non-empty wins.
        let mut columns: Vec<(usize, Column, Spelling)> = headers
            .iter()
            .enumerate()
            .filter_map(|(i, header)| {
                column_for_header(header).map(|(column, spelling)| (i, column, spelling))
            })
            .collect();
        columns.sort_by_key(|&(i, _, spelling)| (spelling, i));

        let key_columns = [
            (LANGUAGE_COLUMN, Column::Language),
            (CAREER_COLUMN, Column::Career),
        ];
        for (required, role) in key_columns {
            if !columns.iter().any(|&(_, column, _)| column == role) {
                warn!("Dataset is missing the '{required}' column; all rows will lack it");
            }
        }

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let mut record = CareerRecord::default();

            // Short rows simply leave the trailing columns absent; extra cells are ignored.
            for &(index, column, _) in &columns {
                let Some(value) = row.get(index) else { continue };
                if value.is_empty() {
                    continue;
                }
                match column {
                    Column::Language => {
                        record
                            .programming_language
                            .get_or_insert_with(|| value.to_string());
                    }
                    Column::Career => {
                        record.career_path.get_or_insert_with(|| value.to_string());
                    }
                    Column::Description => {
                        record.description.get_or_insert_with(|| value.to_string());
                    }
                    Column::Recommendation(slot) => {
                        record
                            .cells
                            .entry(slot)
                            .or_insert_with(|| value.to_string());
                    }
                }
            }

            records.push(record);
        }

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
