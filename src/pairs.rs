use crate::error::{PedigreeError, Result};
use crate::Person;

/// A `(parent, child)` relationship record.
pub type ParentChildPair = (Person, Person);

/// ```text
/// 1   2   4
///  \ /   / \
///   3   5   8
///    \ / \   \
///     6   7   10
/// ```
pub const SAMPLE_PAIRS: [ParentChildPair; 8] = [
    (1, 3),
    (2, 3),
    (3, 6),
    (5, 6),
    (5, 7),
    (4, 5),
    (4, 8),
    (8, 10),
];

/// Parses `"PARENT,CHILD"`.  Whitespace around either id is ignored.
pub fn parse_pair(text: &str) -> Result<ParentChildPair> {
    let (left, right) = text
        .split_once(',')
        .ok_or_else(|| PedigreeError::MalformedPair(text.to_string()))?;
    Ok((parse_person(left)?, parse_person(right)?))
}

fn parse_person(text: &str) -> Result<Person> {
    let text = text.trim();
    text.parse::<Person>()
        .map_err(|_| PedigreeError::InvalidId(text.to_string()))
}
