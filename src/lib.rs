pub mod constants;
pub mod dataset;
pub mod display_tree;
pub mod evaluation;
pub mod majority;
pub mod predictor;
pub mod purity;
pub mod read_data;
pub mod report;
pub mod settings;
pub mod tree;
pub mod tree_builder;

#[cfg(test)]
mod test_utils;

pub use dataset::{Dataset, DatasetError, Example};
pub use evaluation::{baseline_accuracy, compute_accuracy, evaluate};
pub use majority::majority_category;
pub use predictor::predict;
pub use read_data::{parse_dataset, read_dataset};
pub use tree::{Node, TreeError};
pub use tree_builder::{train, TreeBuilder};
