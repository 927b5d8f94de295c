use crate::constants::{FALSE_LITERAL, FIELD_SEPARATOR, TRUE_LITERAL};
use crate::dataset::{Dataset, DatasetError, Example};
use log::{debug, info};
use polars::prelude::{CsvReadOptions, SerReader};
use polars_core::frame::DataFrame;
use std::io::Cursor;
use std::path::Path;

/// Reads a whitespace separated table: a header row naming the category column and the
/// attributes, then one row per example with the category followed by `true`/`false` values.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    info!("Reading data from file {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let dataset = parse_dataset(&text)?;
    info!(
        "Read {} examples with {} attributes",
        dataset.len(),
        dataset.get_attribute_names().len()
    );
    Ok(dataset)
}

pub fn parse_dataset(text: &str) -> Result<Dataset, DatasetError> {
    let table = normalize_table(text)?;
    let frame = read_string_frame(table)?;
    debug!("Parsed frame of shape {:?}", frame.shape());
    frame_to_dataset(&frame)
}

// Collapses runs of whitespace, drops blank lines and checks every row against the header.
fn normalize_table(text: &str) -> Result<String, DatasetError> {
    let mut rows = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<&str>>())
        .filter(|tokens| !tokens.is_empty());

    let header = rows.next().ok_or(DatasetError::MissingHeader)?;
    for (position, name) in header.iter().enumerate() {
        if header[..position].contains(name) {
            return Err(DatasetError::DuplicateAttribute(name.to_string()));
        }
    }

    let separator = char::from(FIELD_SEPARATOR).to_string();
    let mut table = header.join(&separator);
    table.push('\n');

    for (row, tokens) in rows.enumerate() {
        if tokens.len() != header.len() {
            return Err(DatasetError::ArityMismatch {
                row,
                expected: header.len() - 1,
                found: tokens.len() - 1,
            });
        }
        table.push_str(&tokens.join(&separator));
        table.push('\n');
    }
    Ok(table)
}

// Every column is read as a string so boolean literals can be checked with our own rules.
fn read_string_frame(table: String) -> Result<DataFrame, DatasetError> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| {
            options
                .with_separator(FIELD_SEPARATOR)
                .with_quote_char(None)
        })
        .into_reader_with_file_handle(Cursor::new(table.into_bytes()))
        .finish()?;
    Ok(frame)
}

fn parse_boolean(value: Option<&str>, row: usize, attribute: &str) -> Result<bool, DatasetError> {
    match value {
        Some(value) if value.eq_ignore_ascii_case(TRUE_LITERAL) => Ok(true),
        Some(value) if value.eq_ignore_ascii_case(FALSE_LITERAL) => Ok(false),
        other => Err(DatasetError::InvalidBoolean {
            row,
            attribute: attribute.to_string(),
            value: other.unwrap_or_default().to_string(),
        }),
    }
}

fn frame_to_dataset(frame: &DataFrame) -> Result<Dataset, DatasetError> {
    let column_names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let (category_column, attribute_names) = column_names
        .split_first()
        .ok_or(DatasetError::MissingHeader)?;

    let categories: Vec<String> = frame
        .column(category_column)?
        .str()?
        .into_no_null_iter()
        .map(|category| category.to_string())
        .collect();

    let mut columns: Vec<Vec<bool>> = Vec::with_capacity(attribute_names.len());
    for attribute in attribute_names {
        let values = frame
            .column(attribute)?
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, value)| parse_boolean(value, row, attribute))
            .collect::<Result<Vec<bool>, DatasetError>>()?;
        columns.push(values);
    }

    let examples = categories
        .into_iter()
        .enumerate()
        .map(|(row, category)| {
            Example::new(category, columns.iter().map(|values| values[row]).collect())
        })
        .collect();

    Dataset::new(attribute_names.to_vec(), examples)
}
