use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A delimiter appears an odd number of times inside one plain-text span.
    #[error("malformed inline markup: unbalanced `{delimiter}` in {text:?}")]
    MalformedMarkup {
        delimiter: &'static str,
        text: String,
    },

    #[error("cannot render html: {0}")]
    StructuralRender(&'static str),

    #[error("unsupported text kind: {0:?}")]
    UnsupportedKind(String),

    #[error("invalid span: {0}")]
    InvalidSpan(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Errors raised while generating pages from files on disk.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Convert { path: PathBuf, source: Error },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("template {} is missing the {placeholder:?} placeholder", path.display())]
    Template {
        path: PathBuf,
        placeholder: String,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
