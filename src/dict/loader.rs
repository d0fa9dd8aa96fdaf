//! Word list reading.
//!
//! One entry per line. Lines are trimmed, blank lines and `#` comments are
//! skipped, and entries holding delimiter characters are dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::core::char_util::{is_word_char, regularize_str};
use crate::error::DictError;

pub fn read_words<R: BufRead>(reader: R, normalize: bool) -> Result<Vec<String>, DictError> {
    let mut words = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        if !word.chars().all(is_word_char) {
            warn!("skip entry {:?} at line {}: not a single word", word, line_no + 1);
            continue;
        }
        if normalize {
            words.push(regularize_str(word));
        } else {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

pub fn load_word_file<P: AsRef<Path>>(path: P, normalize: bool) -> Result<Vec<String>, DictError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = read_words(BufReader::new(file), normalize)?;
    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
