use crate::dataset::{Dataset, Example};
use crate::majority::majority_category;
use crate::purity::compute_purity;
use crate::tree::{Node, TreeError};
use log::{debug, trace};

struct SplitCandidate<'e> {
    attribute_index: usize,
    purity: f64,
    true_set: Vec<&'e Example>,
    false_set: Vec<&'e Example>,
}

/// Grows a decision tree over the examples of one training dataset.
///
/// The training dataset is fixed at construction: it provides the attribute names, the
/// reference category used by the purity score, and the majority leaf returned for empty
/// partitions.
pub struct TreeBuilder<'a> {
    dataset: &'a Dataset,
    reference_category: &'a str,
    fallback_category: String,
    fallback_confidence: f64,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(dataset: &'a Dataset) -> Result<Self, TreeError> {
        let reference_category = dataset
            .get_categories()
            .first()
            .map(String::as_str)
            .ok_or(TreeError::EmptyTrainingSet)?;
        let (fallback_category, fallback_confidence) = majority_category(dataset.get_examples())?;
        debug!(
            "Reference category '{}', fallback '{}' ({:.3})",
            reference_category, fallback_category, fallback_confidence
        );
        Ok(Self {
            dataset,
            reference_category,
            fallback_category,
            fallback_confidence,
        })
    }

    /// Builds a tree over `examples` using only `available_attributes`, tried in the given order.
    pub fn build(
        &self,
        examples: &[&'a Example],
        available_attributes: &[String],
    ) -> Result<Node, TreeError> {
        let available = available_attributes
            .iter()
            .map(|name| {
                self.dataset
                    .attribute_index(name)
                    .ok_or_else(|| TreeError::UnknownAttribute(name.clone()))
            })
            .collect::<Result<Vec<usize>, TreeError>>()?;

        let expected = self.dataset.get_attribute_names().len();
        if let Some(example) = examples.iter().find(|example| example.arity() != expected) {
            return Err(TreeError::AttributeIndexMismatch {
                expected,
                found: example.arity(),
            });
        }
        self.grow(examples, &available)
    }

    /// Builds a tree over the whole training dataset with every attribute available.
    pub fn build_full(&self) -> Result<Node, TreeError> {
        let examples: Vec<&Example> = self.dataset.get_examples().iter().collect();
        let available: Vec<usize> = (0..self.dataset.get_attribute_names().len()).collect();
        self.grow(&examples, &available)
    }

    fn grow(&self, examples: &[&'a Example], available: &[usize]) -> Result<Node, TreeError> {
        // Empty partition: fall back on the majority of the full training set.
        let Some(first) = examples.first() else {
            trace!("Empty partition, using fallback '{}'", self.fallback_category);
            return Ok(Node::leaf(
                self.fallback_category.clone(),
                self.fallback_confidence,
            ));
        };

        if examples
            .iter()
            .all(|example| example.get_category() == first.get_category())
        {
            trace!("Pure partition of {} '{}'", examples.len(), first.get_category());
            return Ok(Node::leaf(first.get_category(), 1.0));
        }

        // Out of attributes: majority of the local partition.
        let Some(best) = self.best_split(examples, available) else {
            let (category, confidence) = majority_category(examples.iter().copied())?;
            trace!(
                "No attributes left for {} examples, majority '{}'",
                examples.len(),
                category
            );
            return Ok(Node::leaf(category, confidence));
        };

        let attribute = &self.dataset.get_attribute_names()[best.attribute_index];
        debug!(
            "Split on '{}' with purity {:.4} ({} true / {} false)",
            attribute,
            best.purity,
            best.true_set.len(),
            best.false_set.len()
        );

        let remaining: Vec<usize> = available
            .iter()
            .copied()
            .filter(|index| *index != best.attribute_index)
            .collect();

        let true_child = self.grow(&best.true_set, &remaining)?;
        let false_child = self.grow(&best.false_set, &remaining)?;
        Ok(Node::decision(attribute.clone(), true_child, false_child))
    }

    // Only a strictly greater purity replaces the current best, so ties keep the earlier attribute.
    fn best_split(
        &self,
        examples: &[&'a Example],
        available: &[usize],
    ) -> Option<SplitCandidate<'a>> {
        let mut optimal_split: Option<SplitCandidate<'a>> = None;

        for &attribute_index in available {
            let (true_set, false_set): (Vec<&'a Example>, Vec<&'a Example>) = examples
                .iter()
                .copied()
                .partition(|example| example.get_value(attribute_index) == Some(true));
            let purity = compute_purity(&true_set, &false_set, self.reference_category);
            let candidate = SplitCandidate {
                attribute_index,
                purity,
                true_set,
                false_set,
            };

            match &optimal_split {
                Some(optimal) if candidate.purity > optimal.purity => {
                    optimal_split = Some(candidate);
                }
                None => {
                    optimal_split = Some(candidate);
                }
                _ => {}
            }
        }

        optimal_split
    }
}

/// Trains a tree on the full dataset with every attribute available.
pub fn train(dataset: &Dataset) -> Result<Node, TreeError> {
    let tree = TreeBuilder::new(dataset)?.build_full()?;
    debug!(
        "Trained tree of depth {} with {} leaves",
        tree.depth(),
        tree.leaf_count()
    );
    Ok(tree)
}
