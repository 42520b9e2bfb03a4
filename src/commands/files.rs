use std::path::Path;

use crate::core::{
    errors::{AppError, AppResult},
    types::CatalogRecord,
};

/// One identifier per line, lowercased. Blank lines are dropped.
pub fn read_identifiers(path: &Path) -> AppResult<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| AppError::Io(format!("{}: {err}", path.display())))?;
    Ok(contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}

pub fn write_output(path: &Path, contents: &str) -> AppResult<()> {
    std::fs::write(path, contents)
        .map_err(|err| AppError::Io(format!("{}: {err}", path.display())))
}

pub fn render_records(records: &[CatalogRecord]) -> String {
    records.iter().map(ToString::to_string).collect()
}
