use crate::dataset::Dataset;
use crate::display_tree::BinaryTree;
use crate::evaluation::{baseline_accuracy, predict_all};
use crate::majority::majority_category;
use crate::tree::{Node, TreeError};
use crate::tree_builder::train;
use log::info;
use std::fmt;

/// Outcome of training on one dataset and testing on another.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    tree: Node,
    baseline_category: String,
    baseline_confidence: f64,
    predicted_categories: Vec<String>,
    actual_categories: Vec<String>,
    accuracy: f64,
    baseline_accuracy: f64,
}

impl Report {
    pub fn generate(training: &Dataset, test: &Dataset) -> Result<Self, TreeError> {
        if test.is_empty() {
            return Err(TreeError::EmptyEvaluationSet);
        }
        let tree = train(training)?;
        let (baseline_category, baseline_confidence) = majority_category(training.get_examples())?;

        let predicted_categories: Vec<String> =
            predict_all(test.get_examples(), &tree, test.get_attribute_names())?
                .into_iter()
                .map(str::to_string)
                .collect();
        let actual_categories: Vec<String> = test
            .get_examples()
            .iter()
            .map(|example| example.get_category().to_string())
            .collect();

        let correct = predicted_categories
            .iter()
            .zip(&actual_categories)
            .filter(|(predicted, actual)| predicted == actual)
            .count();
        let accuracy = correct as f64 / test.len() as f64;
        let baseline_accuracy = baseline_accuracy(test.get_examples(), &baseline_category)?;
        info!(
            "Accuracy {:.3} against baseline {:.3}",
            accuracy, baseline_accuracy
        );

        Ok(Self {
            tree,
            baseline_category,
            baseline_confidence,
            predicted_categories,
            actual_categories,
            accuracy,
            baseline_accuracy,
        })
    }

    pub fn get_tree(&self) -> &Node {
        &self.tree
    }

    pub fn get_baseline_category(&self) -> &str {
        &self.baseline_category
    }

    pub fn get_baseline_confidence(&self) -> f64 {
        self.baseline_confidence
    }

    pub fn get_predicted_categories(&self) -> &[String] {
        &self.predicted_categories
    }

    pub fn get_actual_categories(&self) -> &[String] {
        &self.actual_categories
    }

    pub fn get_accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn get_baseline_accuracy(&self) -> f64 {
        self.baseline_accuracy
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trained tree:")?;
        write!(f, "{}", self.tree.display_tree())?;
        writeln!(f, "Baseline category: {}", self.baseline_category)?;
        writeln!(f, "Predicted categories: {:?}", self.predicted_categories)?;
        writeln!(f, "Actual categories: {:?}", self.actual_categories)?;
        writeln!(f, "Accuracy: {:.1}%", self.accuracy * 100.0)?;
        writeln!(f, "Baseline Accuracy: {:.1}%", self.baseline_accuracy * 100.0)
    }
}
