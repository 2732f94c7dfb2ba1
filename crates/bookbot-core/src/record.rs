//! Book records extracted from the source document

use serde::{Deserialize, Serialize};

/// A title/summary pair extracted from the source document.
///
/// The title is the natural unique key: it also keys the corresponding
/// vector store entry. Records are created once at parse time and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub summary: String,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}
