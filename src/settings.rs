use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Usage: {0} <training-file> <test-file>")]
    Usage(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    training_file: PathBuf,
    test_file: PathBuf,
}

impl Settings {
    pub fn new(training_file: impl Into<PathBuf>, test_file: impl Into<PathBuf>) -> Self {
        Self {
            training_file: training_file.into(),
            test_file: test_file.into(),
        }
    }

    /// Expects the program name followed by exactly two paths.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, SettingsError> {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "bool_trees".to_string());
        let paths: Vec<String> = args.collect();
        match paths.as_slice() {
            [training_file, test_file] => Ok(Self::new(training_file, test_file)),
            _ => Err(SettingsError::Usage(program)),
        }
    }

    pub fn get_training_file(&self) -> &Path {
        &self.training_file
    }

    pub fn get_test_file(&self) -> &Path {
        &self.test_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_two_paths() -> Result<(), SettingsError> {
        let settings = Settings::from_args(args(&["bool_trees", "train.dat", "test.dat"]))?;
        assert_eq!(settings.get_training_file(), Path::new("train.dat"));
        assert_eq!(settings.get_test_file(), Path::new("test.dat"));
        Ok(())
    }

    #[test]
    fn test_wrong_argument_count() {
        let error = Settings::from_args(args(&["bool_trees", "train.dat"])).unwrap_err();
        assert_eq!(error, SettingsError::Usage("bool_trees".to_string()));
        assert_eq!(
            error.to_string(),
            "Usage: bool_trees <training-file> <test-file>"
        );
        assert!(Settings::from_args(args(&["bool_trees", "a", "b", "c"])).is_err());
        assert!(Settings::from_args(Vec::new()).is_err());
    }
}
