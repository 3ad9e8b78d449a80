//! Row layout of the daily report
//!
//! Each category renders as a section of fixed-width rows. Two sections are
//! joined side by side with an empty gutter between them.

use cycle_detection::format_duration;
use crate::summary::CategoryReport;

/// Columns in one category section
pub const SECTION_WIDTH: usize = 6;
/// Empty columns between the two sections
pub const GUTTER_WIDTH: usize = 2;

pub const HEADER: [&str; SECTION_WIDTH] =
    ["DateTaken", "TimeTaken", "Image", "Pole", "CycleCount", "CycleTotalHour"];

pub type Row = Vec<String>;

/// Render a category as summary rows, a blank row, the header and one row per image
pub fn section_rows(report: &CategoryReport) -> Vec<Row> {
    let mut rows = Vec::with_capacity(report.records.len() + 7);

    for (label, value) in report.summary_lines() {
        rows.push(pad(vec![label, value]));
    }
    rows.push(empty_row());
    rows.push(HEADER.iter().map(|h| h.to_string()).collect());

    for record in &report.records {
        rows.push(vec![
            record.date.clone(),
            record.time_string(),
            record.image_name.clone(),
            record.group_name.clone(),
            record.cycle_label.map(|l| l.to_string()).unwrap_or_default(),
            record.cycle_duration.map(format_duration).unwrap_or_default(),
        ]);
    }

    rows
}

/// Join two sections column-wise; a missing or shorter section is padded with empty rows
pub fn merge_side_by_side(left: Option<&CategoryReport>, right: Option<&CategoryReport>) -> Vec<Row> {
    let left = left.map(section_rows).unwrap_or_default();
    let right = right.map(section_rows).unwrap_or_default();
    let height = left.len().max(right.len());

    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..height)
        .map(|_| {
            let mut row = left.next().unwrap_or_else(empty_row);
            row.extend(std::iter::repeat(String::new()).take(GUTTER_WIDTH));
            row.extend(right.next().unwrap_or_else(empty_row));
            row
        })
        .collect()
}

fn empty_row() -> Row {
    vec![String::new(); SECTION_WIDTH]
}

fn pad(mut row: Row) -> Row {
    row.resize(SECTION_WIDTH, String::new());
    row
}
