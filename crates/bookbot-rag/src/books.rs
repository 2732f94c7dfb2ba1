//! PDF parsing into book records

use std::fs;
use std::path::Path;

use bookbot_core::{BookRecord, Error, Result};

/// Literal marker that starts every record in the source document
const TITLE_MARKER: &str = "Title: ";

/// Load book records from the first file in `data_dir`.
///
/// The file is expected to be a PDF containing records delimited by the
/// `"Title: "` marker. A missing or empty directory and a document with no
/// markers are surfaced as startup errors rather than empty results.
pub fn load_books(data_dir: &Path) -> Result<Vec<BookRecord>> {
    let mut files: Vec<_> = fs::read_dir(data_dir)
        .map_err(|e| {
            Error::Configuration(format!(
                "Cannot read data directory '{}': {}",
                data_dir.display(),
                e
            ))
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // Lexicographic order makes "first file" deterministic
    files.sort();

    let path = files.first().ok_or_else(|| {
        Error::Configuration(format!(
            "Data directory '{}' contains no files",
            data_dir.display()
        ))
    })?;

    let bytes = fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        Error::Document(format!(
            "PDF extraction failed for '{}': {}",
            path.display(),
            e
        ))
    })?;

    let books = split_records(&text);
    if books.is_empty() {
        return Err(Error::Document(format!(
            "No 'Title:' records found in '{}'",
            path.display()
        )));
    }

    Ok(books)
}

/// Split extracted text into book records.
///
/// Each chunk after a `"Title: "` marker yields one record: the first line
/// is the title, the remaining lines trimmed and space-joined form the
/// summary.
pub fn split_records(text: &str) -> Vec<BookRecord> {
    text.split(TITLE_MARKER)
        .skip(1)
        .filter_map(|chunk| {
            let mut lines = chunk.trim().lines();
            let title = lines.next()?.trim().to_string();
            if title.is_empty() {
                return None;
            }
            let summary = lines
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Some(BookRecord { title, summary })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_one_record_per_marker() {
        let text = "Title: Wind\nA story about air.\nTitle: Sea\nWaves and salt.\nDeep water.\n";
        let books = split_records(text);

        assert_eq!(books.len(), 2);
        assert_eq!(books[0], BookRecord::new("Wind", "A story about air."));
        assert_eq!(books[1], BookRecord::new("Sea", "Waves and salt. Deep water."));
    }

    #[test]
    fn joins_summary_lines_with_single_spaces() {
        let text = "Title: Wind\n  A story  \n   about air.  \n";
        let books = split_records(text);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].summary, "A story about air.");
    }

    #[test]
    fn ignores_text_before_the_first_marker() {
        let text = "Book catalogue 2024\n\nTitle: Wind\nA story about air.\n";
        let books = split_records(text);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Wind");
    }

    #[test]
    fn empty_text_yields_no_records() {
        assert!(split_records("").is_empty());
        assert!(split_records("no markers here at all").is_empty());
    }

    #[test]
    fn missing_directory_is_a_configuration_error() {
        let err = load_books(Path::new("/nonexistent/bookbot-data")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn empty_directory_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_books(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
