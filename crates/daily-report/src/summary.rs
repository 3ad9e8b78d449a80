//! Per-category report summaries

use std::fmt;
use std::path::PathBuf;
use chrono::{NaiveTime, TimeDelta};
use cycle_detection::{format_duration, Category, ImageRecord, ScanOutcome, Segmentation};
use cycle_detection::record::TIME_FORMAT;

/// A file or folder left out of the report, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregates and annotated records for one category
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: Category,
    /// Number of pole folders found under the category root
    pub folder_count: usize,
    pub first_time: NaiveTime,
    pub last_time: NaiveTime,
    pub total_cycle_duration: TimeDelta,
    pub cycle_count: u32,
    pub total_time_difference: TimeDelta,
    /// Images with unreadable metadata, then entries the scan could not open
    pub skipped: Vec<SkippedPath>,
    pub records: Vec<ImageRecord>,
}

impl CategoryReport {
    pub fn new(scan: &ScanOutcome, segmentation: Segmentation) -> Self {
        Self {
            category: segmentation.category,
            folder_count: scan.folder_count,
            first_time: segmentation.first_time(),
            last_time: segmentation.last_time(),
            total_cycle_duration: segmentation.total_cycle_duration,
            cycle_count: segmentation.cycle_count,
            total_time_difference: segmentation.total_time_difference,
            skipped: skipped_paths(scan),
            records: segmentation.records,
        }
    }

    /// The five label/value pairs heading the category's section
    pub fn summary_lines(&self) -> [(String, String); 5] {
        let cat = self.category;
        [
            (format!("{cat} Data Capture (Pole)"), self.folder_count.to_string()),
            (format!("{cat} Start Time"), self.first_time.format(TIME_FORMAT).to_string()),
            (format!("{cat} End Time"), self.last_time.format(TIME_FORMAT).to_string()),
            (
                format!("{cat} Hours Data Capture (By Battery Cycle)"),
                format_duration(self.total_cycle_duration),
            ),
            (format!("{cat} Battery Cycles"), self.cycle_count.to_string()),
        ]
    }
}

fn skipped_paths(scan: &ScanOutcome) -> Vec<SkippedPath> {
    let failures = scan.failures.iter().map(|failure| SkippedPath {
        path: failure.path.clone(),
        reason: failure.error.to_string(),
    });
    let unreadable = scan.unreadable.iter().map(|path| SkippedPath {
        path: path.clone(),
        reason: "Could not be read".to_string(),
    });
    failures.chain(unreadable).collect()
}

impl fmt::Display for CategoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.summary_lines() {
            writeln!(f, "{label}: {value}")?;
        }
        writeln!(
            f,
            "{} Total Time Span: {}",
            self.category,
            format_duration(self.total_time_difference)
        )?;
        write!(f, "{} Images Analysed: {}", self.category, self.records.len())?;
        if !self.skipped.is_empty() {
            write!(f, " ({} skipped)", self.skipped.len())?;
        }
        for skipped in &self.skipped {
            write!(f, "\n  skipped {}: {}", skipped.path.display(), skipped.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;
    use cycle_detection::{CaptureStamp, CycleSegmenter, MetadataError, MetadataFailure};

    pub(crate) fn sample_report() -> CategoryReport {
        let times = ["09:05:20", "09:00:00", "09:05:00", "09:00:30"];
        let records: Vec<ImageRecord> = times
            .iter()
            .enumerate()
            .map(|(i, t)| {
                ImageRecord::new(
                    CaptureStamp {
                        date: "2024:03:18".to_string(),
                        time: NaiveTime::parse_from_str(t, "%H:%M:%S").unwrap(),
                    },
                    format!("IMG_{:04}.JPG", i + 1),
                    if i % 2 == 0 { "P-1" } else { "P-2" },
                    Category::Visual,
                )
            })
            .collect();
        let scan = ScanOutcome {
            category: Category::Visual,
            folder_count: 2,
            records: records.clone(),
            failures: vec![MetadataFailure {
                path: PathBuf::from("/survey/visual/P-1/bad.jpg"),
                error: MetadataError::MissingTimestamp,
            }],
            unreadable: vec![PathBuf::from("/survey/visual/P-3")],
        };
        let segmentation = CycleSegmenter::segment(Category::Visual, records).unwrap();
        CategoryReport::new(&scan, segmentation)
    }

    #[test]
    fn test_report_from_segmentation() {
        let report = sample_report();
        assert_eq!(report.folder_count, 2);
        assert_eq!(report.first_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(report.last_time, NaiveTime::from_hms_opt(9, 5, 20).unwrap());
        assert_eq!(report.total_cycle_duration, TimeDelta::seconds(50));
        assert_eq!(
            report.skipped,
            vec![
                SkippedPath {
                    path: PathBuf::from("/survey/visual/P-1/bad.jpg"),
                    reason: MetadataError::MissingTimestamp.to_string(),
                },
                SkippedPath {
                    path: PathBuf::from("/survey/visual/P-3"),
                    reason: "Could not be read".to_string(),
                },
            ]
        );
        assert_eq!(report.records.len(), 4);
    }

    #[test]
    fn test_summary_lines() {
        let lines = sample_report().summary_lines();
        assert_eq!(lines[0], ("VISUAL Data Capture (Pole)".to_string(), "2".to_string()));
        assert_eq!(lines[1].1, "09:00:00");
        assert_eq!(lines[2].1, "09:05:20");
        assert_eq!(
            lines[3],
            ("VISUAL Hours Data Capture (By Battery Cycle)".to_string(), "00:00:50".to_string())
        );
        assert_eq!(lines[4], ("VISUAL Battery Cycles".to_string(), "2".to_string()));
    }

    #[test]
    fn test_console_summary() {
        let text = sample_report().to_string();
        assert!(text.contains("VISUAL Start Time: 09:00:00"));
        assert!(text.contains("VISUAL Total Time Span: 00:05:20"));
        assert!(text.contains("VISUAL Images Analysed: 4 (2 skipped)"));
        assert!(text.contains(&format!(
            "\n  skipped /survey/visual/P-1/bad.jpg: {}",
            MetadataError::MissingTimestamp
        )));
        assert!(text.ends_with("\n  skipped /survey/visual/P-3: Could not be read"));
    }

    #[test]
    fn test_console_summary_without_skips() {
        let mut report = sample_report();
        report.skipped.clear();
        let text = report.to_string();
        assert!(text.ends_with("VISUAL Images Analysed: 4"));
        assert!(!text.contains("skipped"));
    }
}
