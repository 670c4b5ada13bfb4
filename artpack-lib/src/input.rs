use std::io::Read;

use crate::PipelineError;

/// Header of the title column, after normalization.
pub const TITLE_COLUMN: &str = "movie name";

/// One data row of the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based index among data rows (the header is not counted)
    pub row: usize,
    pub input: RowInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowInput {
    /// A usable title, exactly as written in the cell
    Title(String),
    /// The title cell is missing or holds only whitespace
    Blank,
    /// The record itself could not be read
    Malformed(String),
}

/// Normalize a header for matching: strip a UTF-8 BOM, trim, lowercase.
pub fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Read the title column out of a CSV table.
///
/// Fails as a whole when the header row has no [`TITLE_COLUMN`]. Individual
/// records that cannot be read are returned as [`RowInput::Malformed`] so the
/// batch can carry on past them.
pub fn read_titles<R: Read>(reader: R) -> Result<Vec<InputRow>, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let column = headers
        .iter()
        .position(|h| h == TITLE_COLUMN)
        .ok_or_else(|| PipelineError::MissingTitleColumn {
            column: TITLE_COLUMN.to_string(),
            found: headers.clone(),
        })?;

    let rows = reader
        .records()
        .enumerate()
        .map(|(i, result)| {
            let input = match result {
                Ok(record) => match record.get(column) {
                    Some(title) if !title.trim().is_empty() => RowInput::Title(title.to_string()),
                    _ => RowInput::Blank,
                },
                Err(e) => RowInput::Malformed(e.to_string()),
            };
            InputRow { row: i + 1, input }
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
