use crate::dataset::{Dataset, Example};
use crate::tree::Node;

pub const TRAINING_FILE_PATH: &str = "data/weather-training.dat";
pub const TEST_FILE_PATH: &str = "data/weather-test.dat";

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// `A` separates X from Y, `B` carries no information.
pub fn get_separable_dataset() -> Dataset {
    Dataset::new(
        names(&["A", "B"]),
        vec![
            Example::new("X", vec![true, true]),
            Example::new("X", vec![true, false]),
            Example::new("Y", vec![false, true]),
            Example::new("Y", vec![false, false]),
        ],
    )
    .unwrap()
}

/// `A` and `B` split the examples equally well.
pub fn get_tied_dataset() -> Dataset {
    Dataset::new(
        names(&["A", "B"]),
        vec![
            Example::new("X", vec![true, true]),
            Example::new("Y", vec![false, false]),
        ],
    )
    .unwrap()
}

/// Three categories with X as both the first-seen and the majority category (3 of 6).
pub fn get_three_category_dataset() -> Dataset {
    Dataset::new(
        names(&["A", "B", "C"]),
        vec![
            Example::new("X", vec![true, true, false]),
            Example::new("X", vec![true, false, true]),
            Example::new("X", vec![true, true, true]),
            Example::new("Y", vec![false, true, false]),
            Example::new("Y", vec![false, false, true]),
            Example::new("Z", vec![false, true, true]),
        ],
    )
    .unwrap()
}

pub fn collect_nodes(tree: &Node) -> Vec<&Node> {
    let mut nodes = vec![tree];
    if let (Some(true_child), Some(false_child)) = (tree.true_child(), tree.false_child()) {
        nodes.extend(collect_nodes(true_child));
        nodes.extend(collect_nodes(false_child));
    }
    nodes
}
