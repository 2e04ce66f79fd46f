//! Per-person parent slots built from a list of `(parent, child)` pairs.
//!
//! Every person has two parent slots which are filled in the order the pairs
//! arrive.  A pair naming a third parent for an already complete child is an
//! anomaly; what happens to it is decided by [`ThirdParentPolicy`].
//!
//! Lookups never insert.  Asking about a person absent from every pair is
//! answered as if they had no recorded parents.

use std::collections::BTreeMap;
use std::io::Write;
use std::ops::Range;

use proptest::prelude::*;
use tracing::{debug, warn};

use crate::error::{PedigreeError, Result};
use crate::pairs::ParentChildPair;
use crate::{Person, TraversableAncestry};

/// The (at most two) recorded parents of a person.  `first` is always filled
/// before `second`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parents {
    pub first: Option<Person>,
    pub second: Option<Person>,
}

impl Parents {
    pub fn iter(&self) -> impl Iterator<Item = Person> {
        self.first.into_iter().chain(self.second)
    }

    #[inline]
    pub fn count(&self) -> usize {
        usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.first.is_none()
    }
}

/// What to do with a pair that names a third parent for the same child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThirdParentPolicy {
    /// Log a warning and keep the first two parents.
    #[default]
    Drop,
    /// Fail with [`PedigreeError::ThirdParent`].
    Reject,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AncestorIndex {
    parents: BTreeMap<Person, Parents>,
}

impl TraversableAncestry for AncestorIndex {
    fn extend_with_parents(&self, child: Person, parents: &mut Vec<Person>) {
        if let Some(recorded) = self.parents.get(&child) {
            parents.extend(recorded.iter());
        }
    }
}

impl AncestorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index, dropping third parents with a warning.
    pub fn from_pairs(pairs: &[ParentChildPair]) -> Self {
        let mut index = Self::new();
        for &(parent, child) in pairs {
            if let Some(full) = index.fill_slot(parent, child) {
                warn_dropped(child, full, parent);
            }
        }
        debug!(people = index.person_count(), pairs = pairs.len(), "built ancestor index");
        index
    }

    pub fn from_pairs_with_policy(
        pairs: &[ParentChildPair],
        policy: ThirdParentPolicy,
    ) -> Result<Self> {
        let mut index = Self::new();
        for &(parent, child) in pairs {
            index.record(parent, child, policy)?;
        }
        debug!(people = index.person_count(), pairs = pairs.len(), ?policy, "built ancestor index");
        Ok(index)
    }

    /// Records `parent` as a parent of `child`.  Both people get an entry.
    ///
    /// With [`ThirdParentPolicy::Reject`] an error is returned when `child`
    /// already has two parents.  The child's recorded parents are kept either way.
    pub fn record(
        &mut self,
        parent: Person,
        child: Person,
        policy: ThirdParentPolicy,
    ) -> Result<()> {
        let Some(full) = self.fill_slot(parent, child) else {
            return Ok(());
        };
        match policy {
            ThirdParentPolicy::Drop => {
                warn_dropped(child, full, parent);
                Ok(())
            }
            ThirdParentPolicy::Reject => Err(PedigreeError::ThirdParent {
                child,
                first: full.0,
                second: full.1,
                rejected: parent,
            }),
        }
    }

    /// Returns the two recorded parents when both slots were already taken.
    fn fill_slot(&mut self, parent: Person, child: Person) -> Option<(Person, Person)> {
        self.parents.entry(parent).or_default();
        let slots = self.parents.entry(child).or_default();
        match (slots.first, slots.second) {
            (None, _) => slots.first = Some(parent),
            (Some(_), None) => slots.second = Some(parent),
            (Some(first), Some(second)) => return Some((first, second)),
        }
        None
    }

    pub fn parents_of(&self, person: Person) -> Option<Parents> {
        self.parents.get(&person).copied()
    }

    pub fn contains(&self, person: Person) -> bool {
        self.parents.contains_key(&person)
    }

    #[inline]
    pub fn person_count(&self) -> usize {
        self.parents.len()
    }

    /// Ascending.
    pub fn iter_people(&self) -> impl Iterator<Item = Person> + '_ {
        self.parents.keys().copied()
    }

    /// The recorded relationships, grouped by child in ascending order.
    /// Dropped third parents are not included.
    pub fn iter_pairs(&self) -> impl Iterator<Item = ParentChildPair> + '_ {
        self.parents
            .iter()
            .flat_map(|(child, parents)| parents.iter().map(move |parent| (parent, *child)))
    }

    /// People with no recorded parents.
    pub fn roots(&self) -> Vec<Person> {
        self.parents
            .iter()
            .filter(|(_, parents)| parents.is_root())
            .map(|(person, _)| *person)
            .collect()
    }

    /// Outputs the index in the [Graphviz DOT](https://graphviz.org/) format,
    /// with edges pointing from parent to child.
    pub fn to_dot<W: Write>(&self, output: &mut W) -> std::result::Result<(), std::io::Error> {
        writeln!(output, "digraph pedigree_{} {{", self.person_count())?;

        for person in self.iter_people() {
            writeln!(output, "\t_{}[label=\"{}\"];", person, person)?;
        }

        writeln!(output, "\n")?;

        for (parent, child) in self.iter_pairs() {
            writeln!(output, "\t_{} -> _{};", parent, child)?;
        }

        writeln!(output, "}}")?;
        Ok(())
    }

    pub fn to_dot_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), std::io::Error> {
        let mut file = std::fs::File::create(path)?;
        self.to_dot(&mut file)?;
        Ok(())
    }
}

fn warn_dropped(child: Person, (first, second): (Person, Person), dropped: Person) {
    cov_mark::hit!(third_parent_dropped);
    warn!(child, first, second, dropped, "more than two parents recorded; dropping the extra one");
}

/// Generates shuffled pair lists over people `1..=n`, `n` drawn from
/// `person_count`.  Parents always have smaller ids than their children, so
/// the result is acyclic, and no child gets more than two distinct parents.
pub fn arb_pedigree(person_count: impl Into<Range<Person>>) -> BoxedStrategy<Vec<ParentChildPair>> {
    let person_count: Range<Person> = person_count.into();
    person_count
        .prop_flat_map(|person_count| {
            let pairs_per_child: Vec<BoxedStrategy<Vec<ParentChildPair>>> = (1..=person_count)
                .map(|child| {
                    let candidates: Vec<Person> = (1..child).collect();
                    let max_parents = candidates.len().min(2);
                    proptest::sample::subsequence(candidates, 0..=max_parents)
                        .prop_map(move |parents| {
                            parents
                                .into_iter()
                                .map(|parent| (parent, child))
                                .collect::<Vec<ParentChildPair>>()
                        })
                        .boxed()
                })
                .collect();
            pairs_per_child
        })
        .prop_map(|pairs_per_child| pairs_per_child.into_iter().flatten().collect::<Vec<_>>())
        .prop_shuffle()
        .boxed()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::pairs::SAMPLE_PAIRS;

    #[test]
    fn sample_pairs_parents() {
        let index = AncestorIndex::from_pairs(&SAMPLE_PAIRS);
        assert_eq!(index.person_count(), 9);
        assert_eq!(
            index.parents_of(3),
            Some(Parents {
                first: Some(1),
                second: Some(2)
            })
        );
        assert_eq!(
            index.parents_of(6),
            Some(Parents {
                first: Some(3),
                second: Some(5)
            })
        );
        assert_eq!(
            index.parents_of(10),
            Some(Parents {
                first: Some(8),
                second: None
            })
        );
        assert_eq!(index.parents_of(4), Some(Parents::default()));
        assert_eq!(index.roots(), vec![1, 2, 4]);
    }

    #[test]
    fn lookups_do_not_insert() {
        let index = AncestorIndex::from_pairs(&SAMPLE_PAIRS);
        assert_eq!(index.parents_of(42), None);
        assert!(!index.contains(42));
        let mut parents = Vec::new();
        index.extend_with_parents(42, &mut parents);
        assert!(parents.is_empty());
        assert_eq!(index.person_count(), 9);
    }

    #[test]
    fn third_parent_is_dropped() {
        cov_mark::check!(third_parent_dropped);
        let index = AncestorIndex::from_pairs(&[(1, 4), (2, 4), (3, 4)]);
        assert_eq!(
            index.parents_of(4),
            Some(Parents {
                first: Some(1),
                second: Some(2)
            })
        );
        // The dropped parent is still a known person.
        assert_eq!(index.parents_of(3), Some(Parents::default()));
    }

    #[test]
    fn third_parent_is_rejected_under_strict_policy() {
        let result = AncestorIndex::from_pairs_with_policy(
            &[(1, 4), (2, 4), (3, 4)],
            ThirdParentPolicy::Reject,
        );
        assert_eq!(
            result,
            Err(PedigreeError::ThirdParent {
                child: 4,
                first: 1,
                second: 2,
                rejected: 3,
            })
        );
    }

    #[test]
    fn rejection_keeps_recorded_parents() {
        let mut index = AncestorIndex::from_pairs(&[(1, 4), (2, 4)]);
        let before = index.clone();
        assert!(index.record(3, 4, ThirdParentPolicy::Reject).is_err());
        assert_eq!(index.parents_of(4), before.parents_of(4));
    }

    #[test]
    fn repeated_pair_fills_both_slots() {
        let index = AncestorIndex::from_pairs(&[(7, 9), (7, 9)]);
        assert_eq!(
            index.parents_of(9),
            Some(Parents {
                first: Some(7),
                second: Some(7)
            })
        );
    }

    #[test]
    fn zero_is_an_ordinary_person() {
        let index = AncestorIndex::from_pairs(&[(0, 1)]);
        assert_eq!(index.parents_of(1).map(|p| p.first), Some(Some(0)));
        assert!(index.contains(0));
    }

    #[test]
    fn sample_pairs_to_dot() {
        let index = AncestorIndex::from_pairs(&[(1, 3), (2, 3)]);
        let mut output = Vec::new();
        index.to_dot(&mut output).unwrap();
        let expected = "digraph pedigree_3 {\n\
                        \t_1[label=\"1\"];\n\
                        \t_2[label=\"2\"];\n\
                        \t_3[label=\"3\"];\n\
                        \n\n\
                        \t_1 -> _3;\n\
                        \t_2 -> _3;\n\
                        }\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    proptest! {
        #[test]
        fn index_keeps_every_generated_pair(pairs in arb_pedigree(0..30)) {
            let index = AncestorIndex::from_pairs(&pairs);
            let expected: HashSet<ParentChildPair> = pairs.iter().copied().collect();
            let recorded: HashSet<ParentChildPair> = index.iter_pairs().collect();
            prop_assert_eq!(recorded, expected);
            prop_assert_eq!(index.iter_pairs().count(), pairs.len());
        }

        #[test]
        fn every_person_has_at_most_two_parents(
            pairs in proptest::collection::vec((1..20u32, 1..20u32), 0..80),
        ) {
            let index = AncestorIndex::from_pairs(&pairs);
            for person in index.iter_people() {
                let parents = index.parents_of(person).unwrap();
                prop_assert!(parents.count() <= 2);
                prop_assert!(parents.first.is_some() || parents.second.is_none());
            }
        }
    }
}
