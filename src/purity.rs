// Two-class Gini style purity: every split is scored as "reference category" against the rest.

use crate::dataset::Example;

pub fn count_category(examples: &[&Example], category: &str) -> usize {
    examples
        .iter()
        .filter(|example| example.get_category() == category)
        .count()
}

fn impurity_single_set(examples: &[&Example], reference_category: &str) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let size = examples.len() as f64;
    let p = count_category(examples, reference_category) as f64 / size;
    let q = 1.0 - p;
    p * q
}

/// Purity of splitting a parent set into `true_set` and `false_set`.
///
/// Each subset contributes `p * q` weighted by its share of the parent, where `p` is the
/// proportion of `reference_category`. The result is `1 - weighted impurity`, so higher is
/// better. Empty subsets contribute nothing and two empty subsets score 1.0.
pub fn compute_purity(true_set: &[&Example], false_set: &[&Example], reference_category: &str) -> f64 {
    let parent_size = (true_set.len() + false_set.len()) as f64;
    if parent_size == 0.0 {
        return 1.0;
    }

    let true_weight = true_set.len() as f64 / parent_size;
    let false_weight = false_set.len() as f64 / parent_size;

    let weighted_impurity = true_weight * impurity_single_set(true_set, reference_category)
        + false_weight * impurity_single_set(false_set, reference_category);
    1.0 - weighted_impurity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examples(categories: &[&str]) -> Vec<Example> {
        categories
            .iter()
            .map(|category| Example::new(*category, vec![]))
            .collect()
    }

    fn refs(examples: &[Example]) -> Vec<&Example> {
        examples.iter().collect()
    }

    #[test]
    fn test_pure_split_scores_one() {
        let left = examples(&["X", "X"]);
        let right = examples(&["Y", "Y"]);
        let purity = compute_purity(&refs(&left), &refs(&right), "X");
        assert_eq!(purity, 1.0);
    }

    #[test]
    fn test_evenly_mixed_split() {
        let left = examples(&["X", "Y"]);
        let right = examples(&["X", "Y"]);
        let purity = compute_purity(&refs(&left), &refs(&right), "X");
        assert!((purity - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_side_matches_single_set_impurity() {
        let full = examples(&["X", "X", "X", "Y"]);
        let purity = compute_purity(&[], &refs(&full), "X");
        let (p, q) = (0.75, 0.25);
        assert!((purity - (1.0 - p * q)).abs() < 1e-12);

        let mirrored = compute_purity(&refs(&full), &[], "X");
        assert!((mirrored - purity).abs() < 1e-12);
    }

    #[test]
    fn test_both_sides_empty_scores_one() {
        assert_eq!(compute_purity(&[], &[], "X"), 1.0);
    }

    #[test]
    fn test_weighting_by_subset_size() {
        // 3/4 weight on a mixed set (p = 1/3), 1/4 weight on a pure set:
        let left = examples(&["X", "Y", "Y"]);
        let right = examples(&["Y"]);
        let purity = compute_purity(&refs(&left), &refs(&right), "X");
        let expected = 1.0 - 0.75 * (1.0 / 3.0) * (2.0 / 3.0);
        assert!((purity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_purity_stays_in_unit_interval() {
        let labels = ["X", "Y", "Z"];
        for split in 0..=6 {
            let all: Vec<Example> = (0..6)
                .map(|i| Example::new(labels[(i * 7) % 3], vec![]))
                .collect();
            let (left, right) = all.split_at(split);
            for reference in labels {
                let purity = compute_purity(&refs(left), &refs(right), reference);
                assert!((0.0..=1.0).contains(&purity));
            }
        }
    }

    #[test]
    fn test_count_category() {
        let all = examples(&["X", "Y", "X"]);
        assert_eq!(count_category(&refs(&all), "X"), 2);
        assert_eq!(count_category(&refs(&all), "Z"), 0);
    }
}
