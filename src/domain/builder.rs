//! Greedy builder for the discriminator tree.
//!
//! At every node the builder picks the attribute/value test whose yes/no
//! partition is closest to an even split, then recurses on both halves.

use itertools::Itertools;
use tracing::{debug, instrument, trace, warn};

use crate::domain::entities::{Attribute, Character};
use crate::domain::error::{DomainError, TreeResult};
use crate::domain::tree::Node;

/// A candidate `attribute == value` test over a set of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'c> {
    pub attribute: Attribute,
    pub value: &'c str,
    pub yes_count: usize,
    pub no_count: usize,
}

impl<'c> Split<'c> {
    /// Count how `candidates` fall on either side of `attribute == value`.
    pub fn count(attribute: Attribute, value: &'c str, candidates: &[&Character]) -> Self {
        let yes_count = candidates
            .iter()
            .filter(|c| attribute.matches(c, value))
            .count();
        Self {
            attribute,
            value,
            yes_count,
            no_count: candidates.len() - yes_count,
        }
    }

    /// Both branches non-empty.
    pub fn is_eligible(&self) -> bool {
        self.yes_count > 0 && self.no_count > 0
    }

    /// Imbalance score `|yes - no|`; 0 is a perfect halving.
    pub fn score(&self) -> usize {
        self.yes_count.abs_diff(self.no_count)
    }
}

/// Every split considered at a node, in scan order: boolean attributes first,
/// then categorical attributes, each value in order of first appearance.
///
/// Ineligible splits are included; callers filter with [`Split::is_eligible`].
pub fn candidate_splits<'c>(candidates: &[&'c Character]) -> Vec<Split<'c>> {
    let mut splits = Vec::new();
    for attribute in Attribute::BOOLEAN {
        splits.push(Split::count(attribute, Attribute::TRUE_VALUE, candidates));
    }
    for attribute in Attribute::CATEGORICAL {
        let values = candidates
            .iter()
            .copied()
            .map(|c| attribute.value_of(c))
            .unique();
        for value in values {
            splits.push(Split::count(attribute, value, candidates));
        }
    }
    splits
}

/// The eligible split with the smallest imbalance score.
///
/// Ties keep the first split in scan order. `None` when no attribute
/// separates the candidates.
pub fn best_split<'c>(candidates: &[&'c Character]) -> Option<Split<'c>> {
    let mut best: Option<Split<'c>> = None;
    for split in candidate_splits(candidates) {
        if !split.is_eligible() {
            continue;
        }
        trace!(
            "split {}={} yes={} no={} score={}",
            split.attribute,
            split.value,
            split.yes_count,
            split.no_count,
            split.score()
        );
        if best.map_or(true, |b| split.score() < b.score()) {
            best = Some(split);
        }
    }
    best
}

/// Builds a [`Node`] tree from an ordered character collection.
///
/// The result is deterministic for a given input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the discriminator tree.
    ///
    /// # Errors
    /// [`DomainError::NoData`] when `characters` is empty.
    #[instrument(level = "debug", skip_all, fields(characters = characters.len()))]
    pub fn build(&self, characters: &[Character]) -> TreeResult<Node> {
        if characters.is_empty() {
            return Err(DomainError::NoData);
        }
        let candidates: Vec<&Character> = characters.iter().collect();
        let root = self.build_node(&candidates);
        let stats = root.stats();
        debug!(
            "built tree: leaves={} internal={} depth={}..{}",
            stats.leaves, stats.internal, stats.min_depth, stats.max_depth
        );
        Ok(root)
    }

    /// `candidates` is never empty: every caller either checks or guards.
    fn build_node(&self, candidates: &[&Character]) -> Node {
        if let [only] = candidates {
            return Node::leaf((*only).clone());
        }

        let Some(split) = best_split(candidates) else {
            return self.name_split(candidates);
        };
        debug!(
            "n={} -> {}={} ({}/{})",
            candidates.len(),
            split.attribute,
            split.value,
            split.yes_count,
            split.no_count
        );

        let (yes, no): (Vec<&Character>, Vec<&Character>) = candidates
            .iter()
            .copied()
            .partition(|c| split.attribute.matches(c, split.value));

        let yes_node = self.branch(&yes, candidates);
        let no_node = self.branch(&no, candidates);
        Node::internal(split.attribute, split.value, yes_node, no_node)
    }

    /// Recurse into one side of a partition.
    ///
    /// An empty side cannot come out of an eligible split; if it ever does,
    /// it becomes a leaf for the parent's first candidate.
    fn branch(&self, part: &[&Character], parent: &[&Character]) -> Node {
        debug_assert!(!part.is_empty(), "eligible split produced an empty branch");
        if part.is_empty() {
            warn!("empty branch under {} candidates, substituting first candidate", parent.len());
            return Node::leaf(parent[0].clone());
        }
        self.build_node(part)
    }

    /// Peel candidates off one at a time by name when no attribute separates them.
    ///
    /// No attribute separates any subset either, so the whole chain is built
    /// here, innermost pair first.
    fn name_split(&self, candidates: &[&Character]) -> Node {
        let Some((last, init)) = candidates.split_last() else {
            unreachable!("name split on empty candidate set");
        };
        debug!("n={} -> name split chain", candidates.len());

        init.iter().rev().fold(Node::leaf((*last).clone()), |no, c| {
            trace!("name split on {}", c.name);
            Node::internal(Attribute::Name, c.name.as_str(), Node::leaf((*c).clone()), no)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, gender: &str, alive: &str) -> Character {
        Character::from_fields(&[name, gender, alive, "adult", "art", "french", "none", "no"])
            .unwrap()
    }

    #[test]
    fn given_split_when_scoring_then_absolute_difference() {
        let a = person("a", "male", "yes");
        let b = person("b", "male", "no");
        let c = person("c", "male", "no");
        let refs = vec![&a, &b, &c];
        let split = Split::count(Attribute::Alive, "true", &refs);
        assert_eq!((split.yes_count, split.no_count), (1, 2));
        assert_eq!(split.score(), 1);
        assert!(split.is_eligible());
    }

    #[test]
    fn given_shared_value_when_counting_then_split_is_ineligible() {
        let a = person("a", "male", "yes");
        let b = person("b", "male", "yes");
        let refs = vec![&a, &b];
        let split = Split::count(Attribute::Gender, "male", &refs);
        assert!(!split.is_eligible());
    }

    #[test]
    fn given_equal_scores_when_selecting_then_first_seen_wins() {
        // alive and gender both split 1/1; alive is scanned first
        let a = person("a", "male", "yes");
        let b = person("b", "female", "no");
        let refs = vec![&a, &b];
        let best = best_split(&refs).unwrap();
        assert_eq!(best.attribute, Attribute::Alive);
    }

    #[test]
    fn given_categorical_values_when_listing_then_in_order_of_first_appearance() {
        let a = person("a", "female", "yes");
        let b = person("b", "male", "yes");
        let c = person("c", "female", "yes");
        let refs = vec![&a, &b, &c];
        let genders: Vec<_> = candidate_splits(&refs)
            .into_iter()
            .filter(|s| s.attribute == Attribute::Gender)
            .map(|s| s.value)
            .collect();
        assert_eq!(genders, vec!["female", "male"]);
    }
}
