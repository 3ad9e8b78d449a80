//! Scan, segment and write the daily report

use std::collections::BTreeMap;
use std::path::Path;
use anyhow::{Context, Result};
use tracing::{info, warn};
use cycle_detection::{Category, CycleSegmenter, FolderScanner, TimestampReader};
use daily_report::{merge_side_by_side, write_csv, CategoryReport, ReportPayload};
use crate::config::RunConfig;

/// Build the report of one category root
pub fn analyze_category<R: TimestampReader>(
    scanner: &FolderScanner<R>,
    category: Category,
    root: &Path,
) -> Result<CategoryReport> {
    let scan = scanner
        .scan(category, root)
        .with_context(|| format!("Failed to scan {} folder {}", category, root.display()))?;

    if !scan.failures.is_empty() {
        warn!("{}: skipped {} image(s) without a readable capture time", category, scan.failures.len());
    }
    if !scan.unreadable.is_empty() {
        warn!("{}: skipped {} unreadable folder(s) or file(s)", category, scan.unreadable.len());
    }

    let segmentation = CycleSegmenter::segment(category, scan.records.clone())?;
    info!(
        "{}: {} images in {} cycle(s)",
        category,
        segmentation.records.len(),
        segmentation.cycle_count
    );

    Ok(CategoryReport::new(&scan, segmentation))
}

/// Analyze every configured category, then write the CSV (and JSON) outputs
pub fn run<R: TimestampReader>(config: &RunConfig, reader: R) -> Result<BTreeMap<Category, CategoryReport>> {
    let scanner = FolderScanner::new(reader);

    // Every category must succeed before anything is written
    let mut reports = BTreeMap::new();
    for (&category, root) in &config.folders {
        reports.insert(category, analyze_category(&scanner, category, root)?);
    }

    let rows = merge_side_by_side(
        reports.get(&Category::Visual),
        reports.get(&Category::Thermal),
    );
    write_csv(&config.csv_path(), &rows)?;

    if let Some(json_path) = &config.json_path {
        ReportPayload::new(reports.values()).write_json(json_path)?;
        info!("Wrote summary to {}", json_path.display());
    }

    Ok(reports)
}
