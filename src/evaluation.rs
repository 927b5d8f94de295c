use crate::dataset::{Dataset, Example};
use crate::predictor::predict;
use crate::tree::{Node, TreeError};

pub fn predict_all<'t>(
    examples: &[Example],
    tree: &'t Node,
    attribute_names: &[String],
) -> Result<Vec<&'t str>, TreeError> {
    examples
        .iter()
        .map(|example| predict(example, tree, attribute_names))
        .collect()
}

/// Fraction of `examples` whose predicted category matches their own.
pub fn compute_accuracy(
    examples: &[Example],
    tree: &Node,
    attribute_names: &[String],
) -> Result<f64, TreeError> {
    if examples.is_empty() {
        return Err(TreeError::EmptyEvaluationSet);
    }
    let predictions = predict_all(examples, tree, attribute_names)?;
    let correct = examples
        .iter()
        .zip(predictions)
        .filter(|(example, predicted)| example.get_category() == *predicted)
        .count();
    Ok(correct as f64 / examples.len() as f64)
}

/// Accuracy of `tree` on `dataset`, resolving attributes against the dataset's own names.
pub fn evaluate(dataset: &Dataset, tree: &Node) -> Result<f64, TreeError> {
    compute_accuracy(dataset.get_examples(), tree, dataset.get_attribute_names())
}

/// Accuracy of always predicting `baseline_category`.
pub fn baseline_accuracy(examples: &[Example], baseline_category: &str) -> Result<f64, TreeError> {
    if examples.is_empty() {
        return Err(TreeError::EmptyEvaluationSet);
    }
    let matching = examples
        .iter()
        .filter(|example| example.get_category() == baseline_category)
        .count();
    Ok(matching as f64 / examples.len() as f64)
}
