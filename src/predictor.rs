use crate::dataset::Example;
use crate::tree::{Node, TreeError};

/// Walks `node` down to a leaf and returns the leaf's category.
///
/// Decision attributes are resolved by name against `attribute_names`, which must describe the
/// value layout of `example`.
pub fn predict<'t>(
    example: &Example,
    node: &'t Node,
    attribute_names: &[String],
) -> Result<&'t str, TreeError> {
    let mut current = node;
    loop {
        match current {
            Node::Leaf { category, .. } => return Ok(category.as_str()),
            Node::Decision {
                attribute,
                true_child,
                false_child,
            } => {
                let value = attribute_names
                    .iter()
                    .position(|name| name == attribute)
                    .and_then(|index| example.get_value(index))
                    .ok_or_else(|| TreeError::UnknownAttribute(attribute.clone()))?;
                current = if value { true_child.as_ref() } else { false_child.as_ref() };
            }
        }
    }
}
