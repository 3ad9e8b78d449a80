//! CSV serialization of the merged report

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use tracing::info;
use crate::layout::Row;

/// Output path for a base name given without extension
pub fn csv_path(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}.csv"))
}

pub fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_rows(rows, file).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn write_rows<W: Write>(rows: &[Row], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
