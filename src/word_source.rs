//! Word-list ingestion.
//!
//! The finder core never reads files; this collaborator turns a word-list
//! path (plain or gzip-compressed, whitespace-separated words) into the
//! string sequence `Vocabulary::build` consumes. A missing or unreadable
//! list surfaces as an error, never as an empty vocabulary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Errors returned while reading a word list.
#[derive(thiserror::Error, Debug)]
pub enum WordSourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Word list not found: {0}")]
    NotFound(String),
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("bgz"))
        .unwrap_or(false)
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, WordSourceError> {
    let file = File::open(path)?;
    if is_gzip(path) {
        let decoder = MultiGzDecoder::new(file);
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read whitespace-separated words from the list at `path`.
///
/// Blank lines are skipped; duplicates are passed through untouched and
/// collapse later in `Vocabulary::build`.
pub fn read_words(path: &Path) -> Result<Vec<String>, WordSourceError> {
    if !path.exists() {
        return Err(WordSourceError::NotFound(path.display().to_string()));
    }

    let mut reader = open_reader(path)?;
    let mut words = Vec::new();
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            break;
        }
        for token in line.split_whitespace() {
            words.push(token.to_string());
        }
    }
    Ok(words)
}
