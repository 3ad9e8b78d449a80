//! Serializable summary for the JSON export

use std::path::Path;
use anyhow::{Context, Result};
use serde::Serialize;
use cycle_detection::{format_duration, Category};
use cycle_detection::record::TIME_FORMAT;
use crate::summary::CategoryReport;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub categories: Vec<CategoryPayload>,
}

#[derive(Debug, Serialize)]
pub struct CategoryPayload {
    pub category: Category,
    pub folder_count: usize,
    pub start_time: String,
    pub end_time: String,
    pub total_cycle_duration: String,
    pub cycle_count: u32,
    pub total_time_difference: String,
    pub images: Vec<ImagePayload>,
    /// Files and folders left out of the report
    pub skipped: Vec<SkippedPayload>,
}

#[derive(Debug, Serialize)]
pub struct SkippedPayload {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ImagePayload {
    pub date: String,
    pub time: String,
    pub image: String,
    pub pole: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_duration: Option<String>,
}

impl From<&CategoryReport> for CategoryPayload {
    fn from(report: &CategoryReport) -> Self {
        Self {
            category: report.category,
            folder_count: report.folder_count,
            start_time: report.first_time.format(TIME_FORMAT).to_string(),
            end_time: report.last_time.format(TIME_FORMAT).to_string(),
            total_cycle_duration: format_duration(report.total_cycle_duration),
            cycle_count: report.cycle_count,
            total_time_difference: format_duration(report.total_time_difference),
            images: report
                .records
                .iter()
                .map(|r| ImagePayload {
                    date: r.date.clone(),
                    time: r.time_string(),
                    image: r.image_name.clone(),
                    pole: r.group_name.clone(),
                    cycle: r.cycle_label.map(|l| l.to_string()),
                    cycle_duration: r.cycle_duration.map(format_duration),
                })
                .collect(),
            skipped: report
                .skipped
                .iter()
                .map(|s| SkippedPayload {
                    path: s.path.display().to_string(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

impl ReportPayload {
    pub fn new<'a>(reports: impl IntoIterator<Item = &'a CategoryReport>) -> Self {
        Self {
            categories: reports.into_iter().map(CategoryPayload::from).collect(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize report summary to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::tests::sample_report;

    #[test]
    fn test_payload_json_shape() {
        let report = sample_report();
        let payload = ReportPayload::new([&report]);
        let value = serde_json::to_value(&payload).unwrap();

        let visual = &value["categories"][0];
        assert_eq!(visual["category"], "VISUAL");
        assert_eq!(visual["start_time"], "09:00:00");
        assert_eq!(visual["total_cycle_duration"], "00:00:50");
        assert_eq!(visual["cycle_count"], 2);
        assert_eq!(visual["total_time_difference"], "00:05:20");
        assert_eq!(visual["images"].as_array().unwrap().len(), 4);
        assert!(visual["images"][0].get("cycle").is_none());
        assert_eq!(visual["images"][1]["cycle"], "CYCLE 1");
        assert_eq!(visual["images"][1]["cycle_duration"], "00:00:30");
    }

    #[test]
    fn test_payload_lists_skipped_files() {
        let report = sample_report();
        let value = serde_json::to_value(ReportPayload::new([&report])).unwrap();

        let skipped = value["categories"][0]["skipped"].as_array().unwrap();
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0]["path"], "/survey/visual/P-1/bad.jpg");
        assert_eq!(skipped[0]["reason"], cycle_detection::MetadataError::MissingTimestamp.to_string());
        assert_eq!(skipped[1]["path"], "/survey/visual/P-3");
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        ReportPayload::new([&sample_report()]).write_json(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"pole\": \"P-2\""));
    }
}
