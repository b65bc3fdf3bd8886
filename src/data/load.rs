use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::record::{RawRecord, Record};

pub fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;

    let rows: Vec<RawRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in dataset file {}", path.display()))?;

    if rows.is_empty() {
        return Err(anyhow!("dataset file {} contains no rows", path.display()));
    }

    Ok(rows.into_iter().map(Record::from_raw).collect())
}
