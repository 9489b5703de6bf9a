use std::path::PathBuf;
use thiserror::Error;

use crate::platform::Extension;

pub type Result<T> = std::result::Result<T, SparkError>;

#[derive(Error, Debug)]
pub enum SparkError {
    #[error("unsupported architecture: {0}")]
    UnsupportedArchitecture(String),

    #[error("unsupported operating system: {0}")]
    UnsupportedOs(String),

    #[error("unknown shell: {0}")]
    UnknownShell(String),

    #[error("failed to fetch version catalog from {url}: {source}")]
    CatalogFetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("request to {url} returned {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("unrecognized release label: {0}")]
    VersionFormat(String),

    #[error("no version matches {0}")]
    NoMatchingVersion(String),

    #[error("failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0} archives are not supported yet")]
    UnsupportedArchive(Extension),

    #[error("unable to extract {name} of type {kind}")]
    UnsupportedEntry { name: String, kind: String },

    #[error("archive entry {0} points outside the target directory")]
    UnsafeEntryPath(String),

    #[error("failed to extract {}: {source}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to link {}: {source}", path.display())]
    Link {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to update shell profile {}: {source}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SparkError {
    pub fn catalog(url: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        SparkError::CatalogFetch {
            url: url.to_string(),
            source: Box::new(source),
        }
    }

    pub fn download(url: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        SparkError::Download {
            url: url.to_string(),
            source: Box::new(source),
        }
    }
}
