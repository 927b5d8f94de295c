use crate::constants::{FALSE_BRANCH_PREFIX, INDENT, TRUE_BRANCH_PREFIX};
use crate::tree::Node;
use std::fmt;

pub trait BinaryTree {
    fn get_true(&self) -> Option<&Self>;
    fn get_false(&self) -> Option<&Self>;
    fn display_string(&self) -> String;
    fn display_tree(&self) -> IndentedTree<'_, Self> {
        IndentedTree::new(self)
    }
}

impl BinaryTree for Node {
    fn get_true(&self) -> Option<&Self> {
        self.true_child()
    }

    fn get_false(&self) -> Option<&Self> {
        self.false_child()
    }

    fn display_string(&self) -> String {
        match self {
            Node::Decision { attribute, .. } => format!("{}?", attribute),
            Node::Leaf {
                category,
                confidence,
            } => format!("{}. probability = {:.2}", category, confidence),
        }
    }
}

/// One line per node, children indented below their parent, true branch first.
pub struct IndentedTree<'a, T: BinaryTree + ?Sized> {
    root: &'a T,
}

impl<'a, T: BinaryTree + ?Sized> IndentedTree<'a, T> {
    pub fn new(root: &'a T) -> Self {
        Self { root }
    }

    fn write_node(f: &mut fmt::Formatter<'_>, node: &T, depth: usize, prefix: &str) -> fmt::Result {
        writeln!(f, "{}{}{}", INDENT.repeat(depth), prefix, node.display_string())?;
        if let Some(true_node) = node.get_true() {
            Self::write_node(f, true_node, depth + 1, TRUE_BRANCH_PREFIX)?;
        }
        if let Some(false_node) = node.get_false() {
            Self::write_node(f, false_node, depth + 1, FALSE_BRANCH_PREFIX)?;
        }
        Ok(())
    }
}

impl<T: BinaryTree + ?Sized> fmt::Display for IndentedTree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.root, 0, "")
    }
}
