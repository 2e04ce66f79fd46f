use roaring::RoaringBitmap;
use tracing::warn;

use crate::index::AncestorIndex;
use crate::{Person, TraversableAncestry};

impl AncestorIndex {
    /// All ancestors of `person` in depth-first pre-order: each parent is
    /// followed by its own ancestors, first parent's branch before the second
    /// parent's.  A person reachable along several paths is listed once per
    /// path.
    pub fn ancestors(&self, person: Person) -> Vec<Person> {
        self.iter_ancestors_pre_order(person).collect()
    }

    /// See [`Self::ancestors`].
    pub fn iter_ancestors_pre_order(&self, person: Person) -> PreOrderAncestorsIterator<'_> {
        let mut on_chain = RoaringBitmap::new();
        on_chain.insert(person);
        let mut iter = PreOrderAncestorsIterator {
            index: self,
            to_visit: Vec::new(),
            chain: vec![person],
            on_chain,
            buffer: Vec::new(),
        };
        iter.push_parents(person, 1);
        iter
    }

    /// Visit every ancestor of `person` exactly once in a depth-first-search
    /// (DFS) order.
    pub fn iter_ancestors_dfs(&self, person: Person) -> DfsAncestorsIterator<'_> {
        let mut visited = RoaringBitmap::new();
        visited.insert(person);
        let mut iter = DfsAncestorsIterator {
            index: self,
            visited,
            to_visit: Vec::new(),
            buffer: Vec::new(),
        };
        iter.push_parents(person);
        iter
    }

    pub fn ancestor_set(&self, person: Person) -> RoaringBitmap {
        self.iter_ancestors_dfs(person).collect()
    }
}

/// See [`AncestorIndex::iter_ancestors_pre_order`].
///
/// Keeps the chain of people from the starting person down to the ancestor
/// emitted last.  A parent link pointing back into that chain would make the
/// traversal loop forever on malformed input, so it is skipped with a warning.
pub struct PreOrderAncestorsIterator<'a> {
    index: &'a AncestorIndex,
    to_visit: Vec<(Person, usize)>,
    chain: Vec<Person>,
    on_chain: RoaringBitmap,
    buffer: Vec<Person>,
}

impl<'a> PreOrderAncestorsIterator<'a> {
    fn push_parents(&mut self, child: Person, depth: usize) {
        self.buffer.clear();
        self.index.extend_with_parents(child, &mut self.buffer);
        // Reversed so that the first parent is popped first.
        self.to_visit
            .extend(self.buffer.drain(..).rev().map(|parent| (parent, depth)));
    }

    fn unwind_to(&mut self, depth: usize) {
        while self.chain.len() > depth {
            if let Some(person) = self.chain.pop() {
                self.on_chain.remove(person);
            }
        }
    }
}

impl<'a> Iterator for PreOrderAncestorsIterator<'a> {
    type Item = Person;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((person, depth)) = self.to_visit.pop() {
            self.unwind_to(depth);
            if self.on_chain.contains(person) {
                cov_mark::hit!(cycle_link_skipped);
                warn!(
                    ancestor = person,
                    descendant = self.chain.last().copied(),
                    "parent link closes a cycle; not following it"
                );
                continue;
            }
            self.chain.push(person);
            self.on_chain.insert(person);
            self.push_parents(person, depth + 1);
            return Some(person);
        }
        None
    }
}

/// See [`AncestorIndex::iter_ancestors_dfs`].
pub struct DfsAncestorsIterator<'a> {
    index: &'a AncestorIndex,
    visited: RoaringBitmap,
    to_visit: Vec<Person>,
    buffer: Vec<Person>,
}

impl<'a> DfsAncestorsIterator<'a> {
    fn push_parents(&mut self, child: Person) {
        self.buffer.clear();
        self.index.extend_with_parents(child, &mut self.buffer);
        let visited = &self.visited;
        self.to_visit.extend(
            self.buffer
                .drain(..)
                .rev()
                .filter(|parent| !visited.contains(*parent)),
        );
    }
}

impl<'a> Iterator for DfsAncestorsIterator<'a> {
    type Item = Person;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(person) = self.to_visit.pop() {
            if !self.visited.insert(person) {
                continue;
            }
            self.push_parents(person);
            return Some(person);
        }
        None
    }
}
