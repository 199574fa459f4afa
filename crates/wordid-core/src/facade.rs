//! Process-wide default generator.
//!
//! Built on first use with `"-"`, three parts, the built-in word list and an
//! OS-seeded random source, then reused. [`install`] and [`reset`] swap it out.

use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::generator::IdGenerator;

static DEFAULT: Mutex<Option<IdGenerator>> = Mutex::new(None);

fn with_default<T>(f: impl FnOnce(&mut IdGenerator) -> Result<T>) -> Result<T> {
    let mut guard = DEFAULT.lock().unwrap_or_else(PoisonError::into_inner);
    let generator = match guard.take() {
        Some(generator) => generator,
        None => IdGenerator::builder().build()?,
    };
    f(guard.insert(generator))
}

/// One identifier from the default generator.
pub fn next() -> Result<String> {
    with_default(|generator| generator.next_id())
}

/// `amount` identifiers from the default generator.
pub fn next_batch(amount: usize) -> Result<Vec<String>> {
    with_default(|generator| generator.next_batch(amount))
}

/// Replaces the default generator.
pub fn install(generator: IdGenerator) {
    *DEFAULT.lock().unwrap_or_else(PoisonError::into_inner) = Some(generator);
}

/// Drops the default generator; the next call builds a fresh one.
pub fn reset() {
    *DEFAULT.lock().unwrap_or_else(PoisonError::into_inner) = None;
}
