use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Data source has no header row")]
    MissingHeader,

    #[error("Attribute '{0}' is declared more than once")]
    DuplicateAttribute(String),

    #[error("Row {row} has {found} attribute values, expected {expected}")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: '{value}' is not a boolean value for attribute '{attribute}'")]
    InvalidBoolean {
        row: usize,
        attribute: String,
        value: String,
    },
}

/// A single labeled row: a category plus one boolean per attribute of the owning [`Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    category: String,
    values: Vec<bool>,
}

impl Example {
    pub fn new(category: impl Into<String>, values: Vec<bool>) -> Self {
        Self {
            category: category.into(),
            values,
        }
    }

    pub fn get_category(&self) -> &str {
        &self.category
    }

    pub fn get_value(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    pub fn get_values(&self) -> &[bool] {
        &self.values
    }

    pub fn arity(&self) -> usize {
        self.values.len()
    }
}

/// Immutable table of examples. Value `i` of every example belongs to `attribute_names[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    attribute_names: Vec<String>,
    examples: Vec<Example>,
    categories: Vec<String>,
}

impl Dataset {
    pub fn new(attribute_names: Vec<String>, examples: Vec<Example>) -> Result<Self, DatasetError> {
        for (position, name) in attribute_names.iter().enumerate() {
            if attribute_names[..position].contains(name) {
                return Err(DatasetError::DuplicateAttribute(name.clone()));
            }
        }

        for (row, example) in examples.iter().enumerate() {
            if example.arity() != attribute_names.len() {
                return Err(DatasetError::ArityMismatch {
                    row,
                    expected: attribute_names.len(),
                    found: example.arity(),
                });
            }
        }

        // First-seen order keeps the reference category stable between runs:
        let mut categories: Vec<String> = Vec::new();
        for example in examples.iter() {
            if !categories.iter().any(|c| c == example.get_category()) {
                categories.push(example.get_category().to_string());
            }
        }

        Ok(Self {
            attribute_names,
            examples,
            categories,
        })
    }

    pub fn get_attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn get_examples(&self) -> &[Example] {
        &self.examples
    }

    /// Distinct category labels in the order they first appear.
    pub fn get_categories(&self) -> &[String] {
        &self.categories
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attribute_names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{get_separable_dataset, names};
    use std::error::Error;

    #[test]
    fn test_categories_in_first_seen_order() -> Result<(), Box<dyn Error>> {
        let dataset = Dataset::new(
            names(&["A"]),
            vec![
                Example::new("live", vec![true]),
                Example::new("die", vec![false]),
                Example::new("live", vec![false]),
            ],
        )?;
        assert_eq!(dataset.get_categories(), &["live", "die"]);
        Ok(())
    }

    #[test]
    fn test_attribute_index() {
        let dataset = get_separable_dataset();
        assert_eq!(dataset.attribute_index("A"), Some(0));
        assert_eq!(dataset.attribute_index("B"), Some(1));
        assert_eq!(dataset.attribute_index("C"), None);
    }

    #[test]
    fn test_duplicate_attribute_is_rejected() {
        let result = Dataset::new(names(&["A", "B", "A"]), vec![]);
        assert!(matches!(result, Err(DatasetError::DuplicateAttribute(name)) if name == "A"));
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let result = Dataset::new(
            names(&["A", "B"]),
            vec![
                Example::new("X", vec![true, false]),
                Example::new("Y", vec![true]),
            ],
        );
        assert!(matches!(
            result,
            Err(DatasetError::ArityMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_empty_dataset_is_allowed() -> Result<(), Box<dyn Error>> {
        let dataset = Dataset::new(names(&["A"]), vec![])?;
        assert!(dataset.is_empty());
        assert!(dataset.get_categories().is_empty());
        Ok(())
    }
}
