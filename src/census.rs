use std::collections::BTreeMap;

use crate::pairs::ParentChildPair;
use crate::Person;

/// Maps every person mentioned in a pair list to the number of pairs that
/// name them as the child.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentTally {
    counts: BTreeMap<Person, u32>,
}

impl ParentTally {
    /// A person seen only as a parent is still tallied, with a count of 0.
    pub fn from_pairs(pairs: &[ParentChildPair]) -> Self {
        let mut counts: BTreeMap<Person, u32> = BTreeMap::new();
        for &(parent, child) in pairs {
            counts.entry(parent).or_insert(0);
            *counts.entry(child).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns `None` for people absent from every pair.
    pub fn count(&self, person: Person) -> Option<u32> {
        self.counts.get(&person).copied()
    }

    #[inline]
    pub fn person_count(&self) -> usize {
        self.counts.len()
    }

    /// Ascending by person.
    pub fn iter(&self) -> impl Iterator<Item = (Person, u32)> + '_ {
        self.counts.iter().map(|(person, count)| (*person, *count))
    }

    pub fn census(&self) -> ParentCensus {
        let mut census = ParentCensus::default();
        for (person, count) in self.iter() {
            match count {
                0 => census.zero_parents.push(person),
                1 => census.one_parent.push(person),
                _ => {}
            }
        }
        census
    }
}

/// People with zero and with exactly one recorded parent, each in ascending
/// order.  People with two or more parents appear in neither list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentCensus {
    pub zero_parents: Vec<Person>,
    pub one_parent: Vec<Person>,
}

pub fn count_parents(pairs: &[ParentChildPair]) -> ParentCensus {
    ParentTally::from_pairs(pairs).census()
}
