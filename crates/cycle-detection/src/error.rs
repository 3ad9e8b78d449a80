use std::path::PathBuf;
use thiserror::Error;
use crate::record::Category;

/// Failure to obtain a capture time for a single image
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Failed to read EXIF data: {0}")]
    Unreadable(String),

    #[error("No DateTimeOriginal tag present")]
    MissingTimestamp,

    #[error("Malformed capture timestamp '{0}', expected 'YYYY:MM:DD HH:MM:SS'")]
    MalformedTimestamp(String),
}

/// A metadata failure tied to the file it happened on
#[derive(Debug)]
pub struct MetadataFailure {
    pub path: PathBuf,
    pub error: MetadataError,
}

/// Input that cannot be segmented
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("{category} has {found} image(s) with a capture time, at least 2 are needed to compute cycles")]
    InsufficientImages { category: Category, found: usize },
}
