//! Parent counts and shared-ancestor queries over lists of `(parent, child)`
//! pairs.
//!
//! Every person is an integer identifier.  A person has at most two recorded
//! parents; a third parent for the same child is reported and dropped (see
//! [`ThirdParentPolicy`]).
//!
//! # Entry points
//!
//! See [`count_parents`], [`compare_ancestors`] and [`AncestorIndex::from_pairs`].

pub mod census;
pub mod error;
pub mod index;
pub mod logging;
pub mod pairs;
pub mod report;
pub mod shared;
pub mod traversal;

pub type Person = u32;

trait TraversableAncestry {
    fn extend_with_parents(&self, child: Person, parents: &mut Vec<Person>);
}

pub use census::{count_parents, ParentCensus, ParentTally};
pub use error::PedigreeError;
pub use index::{arb_pedigree, AncestorIndex, Parents, ThirdParentPolicy};
pub use pairs::{parse_pair, ParentChildPair, SAMPLE_PAIRS};
pub use shared::{compare_ancestors, AncestryComparison};
