//! Book metadata records from the catalogue dump.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// One book record, as found in `bookMetaById.v1.jsonl`.
///
/// The dump is sparse; missing fields default to empty, except `theme`,
/// which the dump writer always fills with `"general"` when no theme was
/// assigned. A partial record still classifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookMeta {
    /// Catalogue book id. Records without an id are skipped on read.
    pub id: u32,
    /// Book title.
    pub title: String,
    /// Author display names.
    pub authors: Vec<String>,
    /// ISO language codes.
    pub languages: Vec<String>,
    /// Subject headings.
    pub subjects: Vec<String>,
    /// Bookshelf labels, possibly carrying a `Category:` prefix.
    pub bookshelves: Vec<String>,
    /// Coarse theme assigned when the dump was built; `"general"` when unset.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "general".to_string()
}

impl Default for BookMeta {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            authors: Vec::new(),
            languages: Vec::new(),
            subjects: Vec::new(),
            bookshelves: Vec::new(),
            theme: default_theme(),
        }
    }
}

/// Reads book records from a JSONL file, one JSON object per line.
///
/// Blank lines are skipped, as are records with a missing or zero id.
/// A line that is neither blank nor a valid record is an error; a truncated
/// dump should fail loudly rather than silently shrink the library.
pub fn read_meta_jsonl(path: &Path) -> Result<Vec<BookMeta>, LayoutError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut books = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let book: BookMeta = serde_json::from_str(trimmed)
            .map_err(|source| LayoutError::MalformedRecord { line: index + 1, source })?;
        if book.id == 0 {
            continue;
        }
        books.push(book);
    }
    Ok(books)
}
