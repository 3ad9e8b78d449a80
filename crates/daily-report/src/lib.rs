//! Daily capture report assembly
//!
//! Turns segmented categories into summary blocks and image tables, lays the
//! two categories out side by side and writes the result as CSV or JSON.

pub mod csv_out;
pub mod layout;
pub mod payload;
pub mod summary;

pub use csv_out::{csv_path, write_csv, write_rows};
pub use layout::{merge_side_by_side, section_rows, Row, GUTTER_WIDTH, HEADER, SECTION_WIDTH};
pub use payload::{CategoryPayload, ImagePayload, ReportPayload, SkippedPayload};
pub use summary::{CategoryReport, SkippedPath};
