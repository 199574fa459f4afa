//! Composition of identifiers from random dictionary draws.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::case::Case;
use crate::config::GeneratorConfig;
use crate::dictionary::{Dictionary, WordList};
use crate::error::{Result, WordIdError};

/// Transform applied to each word before it is joined into an identifier.
pub type PostProcessor = Arc<dyn Fn(&str) -> String + Send + Sync>;

pub const DEFAULT_DELIMITER: &str = "-";
pub const DEFAULT_PARTS: usize = 3;

/// Generates identifiers of `parts` dictionary words joined by a delimiter.
///
/// The random source is the only mutable state; share one generator across threads
/// behind a lock, or give each thread its own.
pub struct IdGenerator<R = StdRng> {
    delimiter: String,
    parts: usize,
    rng: R,
    dictionary: Arc<dyn Dictionary>,
    post_processor: PostProcessor,
}

impl IdGenerator<StdRng> {
    pub fn builder() -> IdGeneratorBuilder {
        IdGeneratorBuilder::default()
    }

    /// Builds a generator from a loaded configuration file.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let dictionary = match &config.dictionary {
            Some(path) => WordList::from_path(path)?,
            None => WordList::default_words()?,
        };
        let mut builder = IdGenerator::builder()
            .delimiter(&config.delimiter)
            .parts(config.parts)
            .dictionary(dictionary)
            .case(config.case);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }
}

impl<R: Rng> IdGenerator<R> {
    /// Generates one identifier.
    pub fn next_id(&mut self) -> Result<String> {
        let words = self.draw_words(self.parts)?;
        Ok(words.join(self.delimiter.as_str()))
    }

    /// Generates `amount` identifiers from a single flat draw and a single dictionary
    /// pass.
    ///
    /// Draws the same positions, in the same order, as `amount` calls to
    /// [`next_id`](Self::next_id) would.
    pub fn next_batch(&mut self, amount: usize) -> Result<Vec<String>> {
        if amount == 0 {
            return Ok(Vec::new());
        }
        let total = self.parts.checked_mul(amount).ok_or_else(|| {
            WordIdError::InvalidArgument(format!("batch of {amount} identifiers is too large"))
        })?;
        let words = self.draw_words(total)?;
        debug!(amount, parts = self.parts, "generated identifier batch");
        Ok(words
            .chunks(self.parts)
            .map(|chunk| chunk.join(self.delimiter.as_str()))
            .collect())
    }

    /// Endless stream of identifiers, one [`next_id`](Self::next_id) per item.
    pub fn iter(&mut self) -> Ids<'_, R> {
        Ids { generator: self }
    }

    /// Returns this generator with its per-word transform replaced.
    pub fn with_post_processor<F>(self, post_processor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        IdGenerator {
            post_processor: Arc::new(post_processor),
            ..self
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dictionary
    }

    fn draw_words(&mut self, amount: usize) -> Result<Vec<String>> {
        let positions = self.draw_positions(amount)?;
        let words = self.dictionary.read_words(&positions)?;
        Ok(words.iter().map(|w| (self.post_processor)(w.as_str())).collect())
    }

    fn draw_positions(&mut self, amount: usize) -> Result<Vec<i64>> {
        let size = self.dictionary.size();
        if size == 0 {
            return Err(WordIdError::EmptyDictionary);
        }
        Ok((0..amount)
            .map(|_| draw_position(self.rng.random::<i64>(), size))
            .collect())
    }
}

/// Maps a raw draw onto `[0, size - 1]` as `|value| mod size`.
///
/// `i64::MIN` has no `i64` absolute value; its unsigned magnitude 2^63 is used instead.
pub(crate) fn draw_position(value: i64, size: u64) -> i64 {
    (value.unsigned_abs() % size) as i64
}

/// Iterator returned by [`IdGenerator::iter`]. Never ends on its own.
pub struct Ids<'a, R> {
    generator: &'a mut IdGenerator<R>,
}

impl<R: Rng> Iterator for Ids<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.next_id())
    }
}

fn identity() -> PostProcessor {
    Arc::new(|word: &str| word.to_string())
}

/// Converts a signed batch size, rejecting negatives.
pub fn batch_amount(amount: i64) -> Result<usize> {
    usize::try_from(amount).map_err(|_| {
        WordIdError::InvalidArgument(format!("amount must not be negative, got {amount}"))
    })
}

/// Builder for [`IdGenerator`]. Defaults to `"-"`, three parts, the built-in word
/// list, no transform and an OS-seeded random source.
pub struct IdGeneratorBuilder {
    delimiter: String,
    parts: usize,
    dictionary: Option<Arc<dyn Dictionary>>,
    post_processor: Option<PostProcessor>,
    seed: Option<u64>,
}

impl Default for IdGeneratorBuilder {
    fn default() -> Self {
        IdGeneratorBuilder {
            delimiter: DEFAULT_DELIMITER.to_string(),
            parts: DEFAULT_PARTS,
            dictionary: None,
            post_processor: None,
            seed: None,
        }
    }
}

impl IdGeneratorBuilder {
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn parts(mut self, parts: usize) -> Self {
        self.parts = parts;
        self
    }

    pub fn dictionary(mut self, dictionary: impl Dictionary + 'static) -> Self {
        self.dictionary = Some(Arc::new(dictionary));
        self
    }

    pub fn shared_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn post_processor<F>(mut self, post_processor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.post_processor = Some(Arc::new(post_processor));
        self
    }

    pub fn case(mut self, case: Case) -> Self {
        self.post_processor = match case {
            Case::Keep => None,
            other => Some(other.post_processor()),
        };
        self
    }

    /// Seeds the random source so the same seed yields the same identifiers.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<IdGenerator<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.build_with_rng(rng)
    }

    /// Builds with a caller-supplied random source; any seed set on the builder is
    /// ignored.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<IdGenerator<R>> {
        if self.parts == 0 {
            return Err(WordIdError::InvalidArgument(
                "an identifier needs at least one part".to_string(),
            ));
        }
        let dictionary: Arc<dyn Dictionary> = match self.dictionary {
            Some(dictionary) => dictionary,
            None => Arc::new(WordList::default_words()?),
        };
        Ok(IdGenerator {
            delimiter: self.delimiter,
            parts: self.parts,
            rng,
            dictionary,
            post_processor: self.post_processor.unwrap_or_else(identity),
        })
    }
}
