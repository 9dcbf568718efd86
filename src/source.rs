// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read statement directory {path}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read statement document {path}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One statement document, already decoded to text. Pages are separated
/// by form feed in the file; the extractor only ever sees these line
/// sequences.
#[derive(Debug, Clone)]
pub struct Document {
    pub source_file: String,
    pub pages: Vec<Vec<String>>,
}

/// All `.txt` statement documents in `dir`, sorted by file name so runs
/// are deterministic. Other files are ignored.
pub fn statement_paths(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

pub fn load_document(path: &Path) -> Result<Document, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Document {
        path: path.to_path_buf(),
        source,
    })?;
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document {
        source_file,
        pages: split_pages(&text),
    })
}

fn split_pages(text: &str) -> Vec<Vec<String>> {
    text.split('\u{0C}')
        .map(|page| page.lines().map(|l| l.to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pages_on_form_feed() {
        let pages = split_pages("a\nb\u{0C}c\nd\ne");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["a", "b"]);
        assert_eq!(pages[1], vec!["c", "d", "e"]);
    }

    #[test]
    fn single_page_when_no_form_feed() {
        let pages = split_pages("only\npage");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], vec!["only", "page"]);
    }

    #[test]
    fn empty_text_is_one_empty_page() {
        let pages = split_pages("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }
}
