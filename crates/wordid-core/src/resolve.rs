//! Batch resolution of word positions against an ordered line source.
//!
//! Positions are saturated into range, deduplicated and visited in ascending order, so
//! the source is read forward exactly once and only up to the highest line needed.
//! Results come back in request order with the original duplicates.

use std::collections::HashMap;
use std::io;

use tracing::debug;

use crate::error::{Result, WordIdError};

/// Saturates `position` into `[0, count - 1]`.
///
/// `count` must be non-zero.
pub fn clamp(position: i64, count: u64) -> u64 {
    debug_assert!(count > 0);
    if position <= 0 {
        0
    } else {
        (position as u64).min(count - 1)
    }
}

/// Resolves every entry of `positions` to the line at its clamped index in `lines`.
///
/// `lines` is consumed lazily and never past the highest requested index. An empty
/// `positions` returns without pulling a single line. Any read error, or the source
/// ending before a needed line, fails the whole call.
pub fn resolve<I, S>(name: &str, lines: I, count: u64, positions: &[i64]) -> Result<Vec<String>>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    if positions.is_empty() {
        return Ok(Vec::new());
    }
    if count == 0 {
        return Err(WordIdError::EmptyDictionary);
    }

    let normalized: Vec<u64> = positions.iter().map(|&p| clamp(p, count)).collect();
    let mut wanted = normalized.clone();
    wanted.sort_unstable();
    wanted.dedup();

    let mut lines = lines.into_iter();
    let mut index = 0u64;
    let mut found = HashMap::with_capacity(wanted.len());
    for &target in &wanted {
        let word = loop {
            let line = match lines.next() {
                Some(line) => line.map_err(|e| WordIdError::read(name, e))?,
                None => {
                    return Err(WordIdError::read(
                        name,
                        io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            format!("word list ended before line {target}"),
                        ),
                    ));
                }
            };
            let current = index;
            index += 1;
            if current == target {
                break line.as_ref().to_owned();
            }
        };
        found.insert(target, word);
    }

    debug!(
        source = name,
        requested = positions.len(),
        distinct = wanted.len(),
        scanned = index,
        "resolved word positions"
    );

    Ok(normalized
        .iter()
        .map(|p| found.get(p).cloned().unwrap_or_default())
        .collect())
}
