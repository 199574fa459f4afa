//! Word sources: an ordered, 0-indexed, line-oriented list of words.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, WordIdError};
use crate::resolve::resolve;
use crate::words;

/// Read access to an ordered list of words.
///
/// Positions outside `[0, size - 1]` are saturated to the nearest end, never rejected.
pub trait Dictionary: Send + Sync {
    /// Number of words available.
    fn size(&self) -> u64;

    /// Words at `positions`, in request order, including repeats.
    fn read_words(&self, positions: &[i64]) -> Result<Vec<String>>;

    /// Word at `position`.
    fn read_word(&self, position: i64) -> Result<String> {
        self.read_words(&[position])?
            .pop()
            .ok_or(WordIdError::EmptyDictionary)
    }
}

#[derive(Debug, Clone)]
enum Backing {
    File(PathBuf),
    Embedded(String),
    Memory(Arc<[String]>),
}

/// A newline-delimited word list.
///
/// The number of lines is counted once when the list is opened. Every lookup opens a
/// fresh reader, so one `WordList` can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct WordList {
    backing: Backing,
    count: u64,
}

impl WordList {
    /// Opens a word list stored on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        let file = File::open(&path).map_err(|e| WordIdError::unavailable(&name, e))?;
        let count = count_lines(BufReader::new(file)).map_err(|e| WordIdError::read(&name, e))?;
        debug!(source = %name, count, "opened word list");
        Ok(WordList {
            backing: Backing::File(path),
            count,
        })
    }

    /// Opens a word list compiled into the binary.
    pub fn embedded(name: &str) -> Result<Self> {
        let data = words::asset(name).ok_or_else(|| {
            WordIdError::unavailable(
                name,
                io::Error::new(io::ErrorKind::NotFound, "no embedded word list"),
            )
        })?;
        let count = count_lines(Cursor::new(data)).map_err(|e| WordIdError::read(name, e))?;
        debug!(source = name, count, "opened embedded word list");
        Ok(WordList {
            backing: Backing::Embedded(name.to_string()),
            count,
        })
    }

    /// The built-in word list.
    pub fn default_words() -> Result<Self> {
        Self::embedded(words::DEFAULT_WORDS)
    }

    /// Builds a word list held entirely in memory, one word per entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Arc<[String]> = words.into_iter().map(Into::into).collect();
        WordList {
            count: words.len() as u64,
            backing: Backing::Memory(words),
        }
    }

    /// Human-readable name of the backing source, used in errors and logs.
    pub fn name(&self) -> String {
        match &self.backing {
            Backing::File(path) => path.display().to_string(),
            Backing::Embedded(name) => name.clone(),
            Backing::Memory(_) => "<memory>".to_string(),
        }
    }
}

impl Dictionary for WordList {
    fn size(&self) -> u64 {
        self.count
    }

    fn read_words(&self, positions: &[i64]) -> Result<Vec<String>> {
        if positions.is_empty() {
            return Ok(Vec::new());
        }
        match &self.backing {
            Backing::File(path) => {
                let name = path.display().to_string();
                let file = File::open(path).map_err(|e| WordIdError::read(&name, e))?;
                resolve(&name, BufReader::new(file).lines(), self.count, positions)
            }
            Backing::Embedded(name) => {
                let data = words::asset(name).ok_or_else(|| {
                    WordIdError::read(
                        name.as_str(),
                        io::Error::new(io::ErrorKind::NotFound, "embedded word list vanished"),
                    )
                })?;
                resolve(name, Cursor::new(data).lines(), self.count, positions)
            }
            Backing::Memory(words) => resolve(
                "<memory>",
                words.iter().map(Ok::<_, io::Error>),
                self.count,
                positions,
            ),
        }
    }
}

/// Counts lines the way [`BufRead::lines`] splits them: a trailing newline does not
/// start another line and an empty source has none.
fn count_lines<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(count);
        }
        count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEST_WORDS: &str = "words-test.txt";

    fn alphabet_file() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("alphabet.txt");
        let body: String = ('a'..='z').map(|c| format!("{c}\n")).collect();
        fs::write(&path, body).unwrap();
        (tmp, path)
    }

    fn all_backings() -> Vec<(TempDir, WordList)> {
        let (tmp, path) = alphabet_file();
        vec![
            (TempDir::new().unwrap(), WordList::embedded(TEST_WORDS).unwrap()),
            (TempDir::new().unwrap(), WordList::from_words(('a'..='z').map(String::from))),
            (tmp, WordList::from_path(path).unwrap()),
        ]
    }

    // === Size ===

    #[test]
    fn size_counts_lines() {
        for (_tmp, dict) in all_backings() {
            assert_eq!(dict.size(), 26, "{}", dict.name());
        }
    }

    #[test]
    fn count_lines_edge_cases() {
        assert_eq!(count_lines(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_lines(Cursor::new("\n")).unwrap(), 1);
        assert_eq!(count_lines(Cursor::new("a\nb")).unwrap(), 2);
        assert_eq!(count_lines(Cursor::new("a\nb\n")).unwrap(), 2);
        assert_eq!(count_lines(Cursor::new("a\r\n\r\nb\r\n")).unwrap(), 3);
    }

    // === Lookups ===

    #[test]
    fn reads_boundaries() {
        for (_tmp, dict) in all_backings() {
            assert_eq!(dict.read_word(0).unwrap(), "a");
            assert_eq!(dict.read_word(25).unwrap(), "z");
        }
    }

    #[test]
    fn normalizes_below_range() {
        for (_tmp, dict) in all_backings() {
            assert_eq!(dict.read_word(-1).unwrap(), "a");
            assert_eq!(dict.read_words(&[-5]).unwrap(), dict.read_words(&[0]).unwrap());
        }
    }

    #[test]
    fn normalizes_above_range() {
        for (_tmp, dict) in all_backings() {
            let size = dict.size() as i64;
            let last = dict.read_word(size - 1).unwrap();
            assert_eq!(dict.read_word(size).unwrap(), last);
            assert_eq!(dict.read_word(size + 100).unwrap(), last);
            assert_eq!(last, "z");
        }
    }

    #[test]
    fn reads_multiple_in_request_order() {
        for (_tmp, dict) in all_backings() {
            let words = dict.read_words(&[25, 0, 10]).unwrap();
            assert_eq!(words, vec!["z", "a", "k"]);
        }
    }

    #[test]
    fn reads_nothing_for_empty_request() {
        for (_tmp, dict) in all_backings() {
            assert!(dict.read_words(&[]).unwrap().is_empty());
        }
    }

    #[test]
    fn reads_duplicates() {
        for (_tmp, dict) in all_backings() {
            assert_eq!(dict.read_words(&[10, 10]).unwrap(), vec!["k", "k"]);
        }
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("crlf.txt");
        fs::write(&path, "alpha\r\n\r\ngamma\r\n").unwrap();
        let dict = WordList::from_path(&path).unwrap();
        assert_eq!(dict.size(), 3);
        assert_eq!(dict.read_words(&[0, 1, 2]).unwrap(), vec!["alpha", "", "gamma"]);
    }

    #[test]
    fn empty_list_rejects_lookups() {
        let dict = WordList::from_words(Vec::<String>::new());
        assert_eq!(dict.size(), 0);
        assert!(dict.read_words(&[]).unwrap().is_empty());
        assert!(matches!(dict.read_word(0), Err(WordIdError::EmptyDictionary)));
    }

    // === Failures ===

    #[test]
    fn missing_file_fails_construction() {
        let tmp = TempDir::new().unwrap();
        let err = WordList::from_path(tmp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WordIdError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("nope.txt"), "got: {err}");
    }

    #[test]
    fn missing_embedded_list_fails_construction() {
        let err = WordList::embedded("test").unwrap_err();
        assert!(matches!(err, WordIdError::SourceUnavailable { .. }));
    }

    #[test]
    fn file_removed_after_open_is_a_read_error() {
        let (tmp, path) = alphabet_file();
        let dict = WordList::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let err = dict.read_words(&[3]).unwrap_err();
        assert!(matches!(err, WordIdError::SourceRead { .. }));
        drop(tmp);
    }

    #[test]
    fn truncated_file_is_a_read_error() {
        let (_tmp, path) = alphabet_file();
        let dict = WordList::from_path(&path).unwrap();
        fs::write(&path, "a\nb\n").unwrap();

        assert!(matches!(dict.read_word(20), Err(WordIdError::SourceRead { .. })));
        assert_eq!(dict.read_word(1).unwrap(), "b");
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("binary.txt");
        fs::write(&path, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();
        let dict = WordList::from_path(&path).unwrap();
        assert_eq!(dict.size(), 2);
        assert!(matches!(dict.read_word(1), Err(WordIdError::SourceRead { .. })));
    }

    #[test]
    fn shared_across_threads() {
        let dict = Arc::new(WordList::embedded(TEST_WORDS).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let dict = Arc::clone(&dict);
                std::thread::spawn(move || dict.read_words(&[i, 25 - i]).unwrap())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let words = handle.join().unwrap();
            let first = (b'a' + i as u8) as char;
            let last = (b'z' - i as u8) as char;
            assert_eq!(words, vec![first.to_string(), last.to_string()]);
        }
    }
}
