//! Recursive folder scanning and capture time extraction
//!
//! Every subfolder under the category root is a pole. Images are read from the
//! pole they sit in directly; files lying in the root itself belong to no pole
//! and are skipped.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use anyhow::{bail, Result};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use crate::error::{MetadataError, MetadataFailure};
use crate::exif::{read_capture_stamp, TimestampReader};
use crate::record::{Category, ImageRecord};

/// Supported image file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Folders and images found under one category root
#[derive(Debug, Default)]
pub struct FolderListing {
    /// Every subfolder at any depth, sorted by path
    pub folders: Vec<PathBuf>,
    /// Images keyed by the folder that directly contains them
    pub images: BTreeMap<PathBuf, Vec<PathBuf>>,
    /// Entries the walk could not read
    pub unreadable: Vec<PathBuf>,
}

impl FolderListing {
    pub fn image_count(&self) -> usize {
        self.images.values().map(Vec::len).sum()
    }
}

/// Records gathered from one category root
#[derive(Debug)]
pub struct ScanOutcome {
    pub category: Category,
    pub folder_count: usize,
    /// Records in enumeration order (folder, then file name)
    pub records: Vec<ImageRecord>,
    /// Images skipped because their capture time could not be read
    pub failures: Vec<MetadataFailure>,
    /// Folders or files the walk could not read
    pub unreadable: Vec<PathBuf>,
}

pub struct FolderScanner<R> {
    reader: R,
}

impl<R: TimestampReader> FolderScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Enumerate subfolders and images below `root`
    ///
    /// Entries that cannot be read (permissions, removed mid-walk) are logged
    /// and left out; the rest of the tree is still listed.
    pub fn list(root: &Path) -> Result<FolderListing> {
        if !root.is_dir() {
            bail!("Path is not a directory: {}", root.display());
        }

        let mut listing = FolderListing::default();
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error.path().unwrap_or(root).to_path_buf();
                    warn!("Skipping unreadable entry '{}': {}", path.display(), error);
                    listing.unreadable.push(path);
                    continue;
                }
            };
            let path = entry.path();

            if entry.file_type().is_dir() {
                listing.folders.push(path.to_path_buf());
            } else if entry.file_type().is_file() && is_image(path) {
                if let Some(parent) = path.parent() {
                    listing.images
                        .entry(parent.to_path_buf())
                        .or_default()
                        .push(path.to_path_buf());
                }
            }
        }
        listing.folders.sort();

        Ok(listing)
    }

    /// Scan a category root and extract a record per readable image
    pub fn scan(&self, category: Category, root: &Path) -> Result<ScanOutcome> {
        let listing = Self::list(root)?;
        info!(
            "Scanning {} folders under {} ({} images)",
            listing.folders.len(),
            root.display(),
            listing.image_count()
        );

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for (index, folder) in listing.folders.iter().enumerate() {
            let Some(images) = listing.images.get(folder) else {
                debug!("{} folder {}: no images", category, folder.display());
                continue;
            };
            let group_name = base_name(folder);
            info!(
                "Processing {} folder {}/{}: {} ({} images)",
                category,
                index + 1,
                listing.folders.len(),
                group_name,
                images.len()
            );

            // Collect keeps enumeration order, which the stable sort relies on
            let results: Vec<(&PathBuf, Result<_, MetadataError>)> = images
                .par_iter()
                .map(|path| (path, read_capture_stamp(&self.reader, path)))
                .collect();

            for (path, result) in results {
                match result {
                    Ok(stamp) => {
                        debug!("{}: {} {}", path.display(), stamp.date, stamp.time);
                        records.push(ImageRecord::new(stamp, base_name(path), group_name.clone(), category));
                    }
                    Err(error) => {
                        warn!("Skipping image '{}': {}", path.display(), error);
                        failures.push(MetadataFailure {
                            path: path.clone(),
                            error,
                        });
                    }
                }
            }
        }

        Ok(ScanOutcome {
            category,
            folder_count: listing.folders.len(),
            records,
            failures,
            unreadable: listing.unreadable,
        })
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
