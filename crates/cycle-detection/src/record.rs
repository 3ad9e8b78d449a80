//! Image records and the categories they are reported under

use std::fmt;
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;

/// Time-of-day format used in EXIF timestamps and in the report
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Visual,
    Thermal,
}

impl Category {
    /// Both categories, in report order
    pub const ALL: [Category; 2] = [Category::Visual, Category::Thermal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Visual => "VISUAL",
            Category::Thermal => "THERMAL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label of a battery cycle, rendered as `CYCLE {n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleLabel(pub u32);

impl fmt::Display for CycleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CYCLE {}", self.0)
    }
}

/// Capture timestamp split into its date and time-of-day parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureStamp {
    /// Date exactly as written in the metadata (e.g. `2024:03:18`)
    pub date: String,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub date: String,
    pub time: NaiveTime,
    pub image_name: String,
    /// Base name of the folder (pole) holding the image
    pub group_name: String,
    pub category: Category,
    /// Set on the record that closes a cycle
    pub cycle_label: Option<CycleLabel>,
    /// Set on the closing record of a cycle that had a start
    pub cycle_duration: Option<TimeDelta>,
}

impl ImageRecord {
    /// Create an unlabelled record
    pub fn new(
        stamp: CaptureStamp,
        image_name: impl Into<String>,
        group_name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            date: stamp.date,
            time: stamp.time,
            image_name: image_name.into(),
            group_name: group_name.into(),
            category,
            cycle_label: None,
            cycle_duration: None,
        }
    }

    /// Drop any labels left by an earlier segmentation
    pub fn clear_cycle(&mut self) {
        self.cycle_label = None;
        self.cycle_duration = None;
    }

    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Render a non-negative duration as zero padded `HH:MM:SS`
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{:02}:{:02}:{:02}", sign, total / 3600, (total % 3600) / 60, total % 60)
}
