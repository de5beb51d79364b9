use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;
use seahash::SeaHasher;
use crate::model::Position;

pub type SeaBuildHasher = BuildHasherDefault<SeaHasher>;

/// Term -> positions of every record whose text contains the term.
/// Postings are kept in insertion order, which is ascending position order.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Position>, SeaBuildHasher>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `term` occurs in the record at `position`.
    ///
    /// Positions must arrive in non-decreasing order. A term repeated within
    /// one record lands on the tail of its own postings list, so comparing
    /// against the last entry is enough to keep each position once.
    pub fn insert(&mut self, term: String, position: Position) {
        let list = self.postings.entry(term).or_default();
        debug_assert!(list.last().map_or(true, |&last| last <= position));
        if list.last() != Some(&position) {
            list.push(position);
        }
    }

    /// Postings for `term`, empty when the term was never indexed.
    pub fn postings(&self, term: &str) -> &[Position] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Positions present in both lists.
    ///
    /// A membership set is built from the shorter list and probed with the
    /// longer one, so the output keeps the longer list's (ascending) order.
    pub fn intersect(a: &[Position], b: &[Position]) -> Vec<Position> {
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        if small.is_empty() {
            return Vec::new();
        }

        let members: HashSet<Position, SeaBuildHasher> = small.iter().copied().collect();
        large.iter().copied().filter(|p| members.contains(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_term_in_one_record_is_posted_once() {
        let mut idx = InvertedIndex::new();
        idx.insert("disk".into(), 0);
        idx.insert("disk".into(), 0);
        idx.insert("disk".into(), 3);
        assert_eq!(idx.postings("disk"), &[0, 3]);
        assert_eq!(idx.term_count(), 1);
    }

    #[test]
    fn unknown_term_has_empty_postings() {
        let idx = InvertedIndex::new();
        assert!(idx.postings("network").is_empty());
    }

    #[test]
    fn intersect_keeps_common_positions_in_order() {
        assert_eq!(InvertedIndex::intersect(&[1, 4, 7, 9], &[0, 4, 9]), vec![4, 9]);
        assert_eq!(InvertedIndex::intersect(&[0, 4, 9], &[1, 4, 7, 9]), vec![4, 9]);
    }

    #[test]
    fn intersect_with_empty_is_empty() {
        assert!(InvertedIndex::intersect(&[], &[1, 2, 3]).is_empty());
        assert!(InvertedIndex::intersect(&[1, 2, 3], &[]).is_empty());
        assert!(InvertedIndex::intersect(&[1, 2], &[3, 4]).is_empty());
    }

    #[test]
    fn intersect_large_lists() {
        let evens: Vec<Position> = (0..10_000).step_by(2).collect();
        let threes: Vec<Position> = (0..10_000).step_by(3).collect();
        let both = InvertedIndex::intersect(&evens, &threes);
        let expected: Vec<Position> = (0..10_000).step_by(6).collect();
        assert_eq!(both, expected);
    }
}
