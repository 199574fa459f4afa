//! Human-memorable identifiers built from dictionary words, such as `crimson-coral-tide`.
//!
//! ```no_run
//! use wordid_core::{Case, IdGenerator, WordList};
//!
//! // process-wide default: three words joined by '-'
//! let id = wordid_core::next()?;
//!
//! // custom generator with its own word list
//! let mut generator = IdGenerator::builder()
//!     .delimiter("~")
//!     .parts(5)
//!     .dictionary(WordList::from_path("words.txt")?)
//!     .case(Case::Capitalize)
//!     .seed(0)
//!     .build()?;
//! let ids = generator.next_batch(10)?;
//! # Ok::<(), wordid_core::WordIdError>(())
//! ```
//!
//! Not a secure token generator: uniqueness is only as good as the number of words
//! and parts allow.

pub mod case;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod facade;
pub mod generator;
pub mod resolve;
pub mod words;

pub use case::Case;
pub use config::GeneratorConfig;
pub use dictionary::{Dictionary, WordList};
pub use error::{Result, WordIdError};
pub use facade::{next, next_batch};
pub use generator::{IdGenerator, IdGeneratorBuilder, PostProcessor, batch_amount};
