//! Plain-text rendering of census and comparison results.

use crate::census::ParentCensus;
use crate::shared::AncestryComparison;
use crate::Person;

/// ```text
/// [
///  [1, 2, 4]
///  [5, 7, 8, 10]
/// ]
/// ```
pub fn format_census(census: &ParentCensus) -> String {
    format!(
        "[\n [{}]\n [{}]\n]",
        join(&census.zero_parents, ", "),
        join(&census.one_parent, ", ")
    )
}

/// `Ancestors person 6: [3 1 2 5 4]`
pub fn format_ancestor_list(person: Person, ancestors: &[Person]) -> String {
    format!("Ancestors person {}: [{}]", person, join(ancestors, " "))
}

/// `parentChildPairs, 5, 8 => true`
pub fn format_verdict(comparison: &AncestryComparison) -> String {
    format!(
        "parentChildPairs, {}, {} => {}",
        comparison.first, comparison.second, comparison.shared
    )
}

/// Both ancestor listings followed by the verdict, one per line.
pub fn format_comparison(comparison: &AncestryComparison) -> String {
    format!(
        "{}\n{}\n{}",
        format_ancestor_list(comparison.first, &comparison.first_ancestors),
        format_ancestor_list(comparison.second, &comparison.second_ancestors),
        format_verdict(comparison)
    )
}

fn join(people: &[Person], separator: &str) -> String {
    people
        .iter()
        .map(Person::to_string)
        .collect::<Vec<String>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::count_parents;
    use crate::index::AncestorIndex;
    use crate::pairs::SAMPLE_PAIRS;

    #[test]
    fn sample_pairs_census_report() {
        assert_eq!(
            format_census(&count_parents(&SAMPLE_PAIRS)),
            "[\n [1, 2, 4]\n [5, 7, 8, 10]\n]"
        );
    }

    #[test]
    fn empty_census_report() {
        assert_eq!(format_census(&ParentCensus::default()), "[\n []\n []\n]");
    }

    #[test]
    fn sample_pairs_comparison_report() {
        let index = AncestorIndex::from_pairs(&SAMPLE_PAIRS);
        assert_eq!(
            format_comparison(&index.compare(5, 8)),
            "Ancestors person 5: [4]\n\
             Ancestors person 8: [4]\n\
             parentChildPairs, 5, 8 => true"
        );
        assert_eq!(
            format_verdict(&index.compare(1, 6)),
            "parentChildPairs, 1, 6 => false"
        );
        assert_eq!(format_ancestor_list(1, &[]), "Ancestors person 1: []");
        assert_eq!(
            format_ancestor_list(6, &index.ancestors(6)),
            "Ancestors person 6: [3 1 2 5 4]"
        );
    }
}
