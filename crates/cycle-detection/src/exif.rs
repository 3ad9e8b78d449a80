//! Capture time extraction from EXIF metadata
//!
//! Only the `DateTimeOriginal` tag is read. Its value is split on whitespace
//! into the date part, kept verbatim, and the time-of-day part, which must
//! parse as `HH:MM:SS`.

use std::path::Path;
use chrono::NaiveTime;
use rexif::{ExifTag, TagValue};
use crate::error::MetadataError;
use crate::record::{CaptureStamp, TIME_FORMAT};

/// Source of the raw `DateTimeOriginal` string for an image file
pub trait TimestampReader: Sync {
    fn read_timestamp(&self, path: &Path) -> Result<String, MetadataError>;
}

/// Reads timestamps with rexif (JPEG and TIFF containers)
#[derive(Debug, Default, Clone, Copy)]
pub struct RexifReader;

impl TimestampReader for RexifReader {
    fn read_timestamp(&self, path: &Path) -> Result<String, MetadataError> {
        let data = rexif::parse_file(path)
            .map_err(|e| MetadataError::Unreadable(e.to_string()))?;

        data.entries
            .into_iter()
            .find(|entry| matches!(entry.tag, ExifTag::DateTimeOriginal))
            .and_then(|entry| match entry.value {
                TagValue::Ascii(raw) => Some(raw),
                _ => None,
            })
            .ok_or(MetadataError::MissingTimestamp)
    }
}

/// Read and parse the capture stamp of a single image
pub fn read_capture_stamp<R: TimestampReader + ?Sized>(
    reader: &R,
    path: &Path,
) -> Result<CaptureStamp, MetadataError> {
    let raw = reader.read_timestamp(path)?;
    parse_capture_stamp(&raw)
}

/// Parse a raw EXIF timestamp such as `2024:03:18 09:15:42`
pub fn parse_capture_stamp(raw: &str) -> Result<CaptureStamp, MetadataError> {
    // EXIF ASCII values are NUL terminated and sometimes space padded
    let cleaned = raw.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    if cleaned.is_empty() {
        return Err(MetadataError::MissingTimestamp);
    }

    let mut parts = cleaned.split_whitespace();
    let (date, time) = match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), None) => (date, time),
        _ => return Err(MetadataError::MalformedTimestamp(cleaned.to_string())),
    };

    let time = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| MetadataError::MalformedTimestamp(cleaned.to_string()))?;

    Ok(CaptureStamp {
        date: date.to_string(),
        time,
    })
}
