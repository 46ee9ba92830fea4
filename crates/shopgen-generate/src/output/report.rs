use std::path::{Path, PathBuf};

use crate::errors::GenerationError;
use crate::model::GenerationReport;

pub const REPORT_FILE: &str = "generation_report.json";

/// Write the run report as pretty JSON into `dir`, returning the file path.
pub fn write_generation_report(
    dir: &Path,
    report: &GenerationReport,
) -> Result<PathBuf, GenerationError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILE);
    std::fs::write(&path, serde_json::to_vec_pretty(report)?)?;
    Ok(path)
}
