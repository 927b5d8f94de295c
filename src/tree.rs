use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    #[error("Training set is empty, no fallback category can be computed")]
    EmptyTrainingSet,

    #[error("Attribute '{0}' is not known at prediction time")]
    UnknownAttribute(String),

    #[error("Example has {found} attribute values, the training data declares {expected}")]
    AttributeIndexMismatch { expected: usize, found: usize },

    #[error("Cannot compute accuracy over an empty set of examples")]
    EmptyEvaluationSet,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Decision {
        attribute: String,
        true_child: Box<Node>,
        false_child: Box<Node>,
    },
    Leaf {
        category: String,
        confidence: f64,
    },
}

impl Node {
    pub fn decision(attribute: impl Into<String>, true_child: Node, false_child: Node) -> Self {
        Self::Decision {
            attribute: attribute.into(),
            true_child: Box::new(true_child),
            false_child: Box::new(false_child),
        }
    }

    pub fn leaf(category: impl Into<String>, confidence: f64) -> Self {
        Self::Leaf {
            category: category.into(),
            confidence,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Attribute name for a decision node, predicted category for a leaf.
    pub fn name(&self) -> &str {
        match self {
            Self::Decision { attribute, .. } => attribute,
            Self::Leaf { category, .. } => category,
        }
    }

    /// Decision nodes carry no confidence of their own and always report 1.0.
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Decision { .. } => 1.0,
            Self::Leaf { confidence, .. } => *confidence,
        }
    }

    pub fn true_child(&self) -> Option<&Node> {
        match self {
            Self::Decision { true_child, .. } => Some(true_child.as_ref()),
            Self::Leaf { .. } => None,
        }
    }

    pub fn false_child(&self) -> Option<&Node> {
        match self {
            Self::Decision { false_child, .. } => Some(false_child.as_ref()),
            Self::Leaf { .. } => None,
        }
    }

    /// Number of decisions on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Decision {
                true_child,
                false_child,
                ..
            } => 1 + true_child.depth().max(false_child.depth()),
            Self::Leaf { .. } => 0,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Decision {
                true_child,
                false_child,
                ..
            } => true_child.leaf_count() + false_child.leaf_count(),
            Self::Leaf { .. } => 1,
        }
    }
}
