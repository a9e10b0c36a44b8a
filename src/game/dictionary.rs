use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::Rng;

use crate::error::{Error, Result};

/// A word list with one lower-cased, trimmed token per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Reads a dictionary file with one token per line.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::EmptyDictionary`] if it holds no non-blank lines.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dictionary = Self::parse(BufReader::new(file), path)?;
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Reads a dictionary from any buffered reader, e.g. an in-memory buffer.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::parse(reader, Path::new("<reader>"))
    }

    /// Builds a dictionary from already split words, normalising each one.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|w| normalise(w.as_ref()))
            .collect();
        if words.is_empty() {
            return Err(Error::EmptyDictionary(PathBuf::from("<words>")));
        }
        Ok(Self { words })
    }

    fn parse<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut words = Vec::new();
        let mut skipped = 0usize;
        for line in reader.lines() {
            match normalise(&line?) {
                Some(word) => words.push(word),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!("Skipped {} blank lines in {}", skipped, source.display());
        }
        if words.is_empty() {
            return Err(Error::EmptyDictionary(source.to_path_buf()));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a successfully built dictionary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Picks one word uniformly at random, with replacement.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

fn normalise(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}
