//! Capture time extraction and battery cycle segmentation
//!
//! This crate scans field survey folders, reads each image's capture time and
//! splits a category's captures into battery cycles.

pub mod cycle;
pub mod error;
pub mod exif;
pub mod record;
pub mod scan;

pub use cycle::{CycleSegmenter, Segmentation, CYCLE_GAP_SECS};
pub use error::{DataError, MetadataError, MetadataFailure};
pub use exif::{parse_capture_stamp, read_capture_stamp, RexifReader, TimestampReader};
pub use record::{format_duration, CaptureStamp, Category, CycleLabel, ImageRecord};
pub use scan::{FolderListing, FolderScanner, ScanOutcome, IMAGE_EXTENSIONS};
