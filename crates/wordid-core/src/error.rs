use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordIdError {
    #[error("word list unavailable: {name} ({source})")]
    SourceUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read word list {name}: {source}")]
    SourceRead {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("dictionary is empty")]
    EmptyDictionary,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WordIdError>;

impl WordIdError {
    pub(crate) fn unavailable(name: impl Into<String>, source: std::io::Error) -> Self {
        WordIdError::SourceUnavailable {
            name: name.into(),
            source,
        }
    }

    pub(crate) fn read(name: impl Into<String>, source: std::io::Error) -> Self {
        WordIdError::SourceRead {
            name: name.into(),
            source,
        }
    }
}
