use roaring::RoaringBitmap;
use tracing::debug;

use crate::index::AncestorIndex;
use crate::pairs::ParentChildPair;
use crate::Person;

/// The ancestor lists of two people and whether they overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AncestryComparison {
    pub first: Person,
    pub first_ancestors: Vec<Person>,
    pub second: Person,
    pub second_ancestors: Vec<Person>,
    pub shared: bool,
}

impl AncestorIndex {
    pub fn compare(&self, first: Person, second: Person) -> AncestryComparison {
        let first_ancestors = self.ancestors(first);
        let second_ancestors = self.ancestors(second);
        let shared = lists_intersect(&first_ancestors, &second_ancestors);
        debug!(
            first,
            ?first_ancestors,
            second,
            ?second_ancestors,
            shared,
            "compared ancestors"
        );
        AncestryComparison {
            first,
            first_ancestors,
            second,
            second_ancestors,
            shared,
        }
    }

    /// Whether `first` and `second` have at least one ancestor in common.  A
    /// person is not their own ancestor, so a root shares nothing with anyone.
    pub fn share_ancestor(&self, first: Person, second: Person) -> bool {
        self.compare(first, second).shared
    }

    pub fn common_ancestors(&self, first: Person, second: Person) -> RoaringBitmap {
        self.ancestor_set(first) & self.ancestor_set(second)
    }
}

// Checking one direction suffices: intersection is symmetric.
fn lists_intersect(first: &[Person], second: &[Person]) -> bool {
    if first.is_empty() || second.is_empty() {
        cov_mark::hit!(no_ancestors_to_share);
        return false;
    }
    let second: RoaringBitmap = second.iter().copied().collect();
    first.iter().any(|person| second.contains(*person))
}

/// Builds an [`AncestorIndex`] from `pairs` and tells whether `first` and
/// `second` share an ancestor.  Third parents are dropped with a warning.
pub fn compare_ancestors(pairs: &[ParentChildPair], first: Person, second: Person) -> bool {
    AncestorIndex::from_pairs(pairs).share_ancestor(first, second)
}
