use crate::dataset::Example;
use crate::tree::TreeError;

/// Most frequent category among `examples` and the fraction of examples carrying it.
///
/// Ties go to the category that appears first in `examples`.
pub fn majority_category<'a, I>(examples: I) -> Result<(String, f64), TreeError>
where
    I: IntoIterator<Item = &'a Example>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut total = 0usize;
    for example in examples {
        total += 1;
        match counts
            .iter_mut()
            .find(|(category, _)| *category == example.get_category())
        {
            Some((_, count)) => *count += 1,
            None => counts.push((example.get_category(), 1)),
        }
    }

    let (category, count) = counts
        .into_iter()
        .fold(None::<(&str, usize)>, |best, (category, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((category, count)),
        })
        .ok_or(TreeError::EmptyTrainingSet)?;

    Ok((category.to_string(), count as f64 / total as f64))
}
