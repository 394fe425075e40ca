//! Core data types: the item catalog entry and the binary individual.

use rand::Rng;
use std::fmt;

/// One entry in the item catalog: a value/weight pair.
///
/// The catalog is supplied once per run and read-only thereafter.
/// Every gene position of an [`Individual`] maps 1:1 to the
/// same-indexed catalog item for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Value gained by including this item.
    pub value: u64,
    /// Weight this item adds against the knapsack capacity.
    pub weight: u64,
}

impl Item {
    /// Creates a new item.
    pub const fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item(value={}, weight={})", self.value, self.weight)
    }
}

/// A candidate solution: a fixed-length vector of binary genes.
///
/// Gene `i` is `1` when catalog item `i` is included in the knapsack.
/// Individuals are value-like — operators produce new individuals rather
/// than editing their inputs, so a parent selected into two breeding
/// events is never corrupted by either one.
///
/// The length is fixed at construction and never changes over the
/// individual's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<u8>,
}

impl Individual {
    /// Creates an individual from an explicit gene vector.
    ///
    /// # Panics
    /// Panics if any gene is not `0` or `1`.
    pub fn new(genes: Vec<u8>) -> Self {
        assert!(
            genes.iter().all(|&g| g <= 1),
            "genes must be 0 or 1"
        );
        Self { genes }
    }

    /// Creates an individual of `len` genes, each drawn independently
    /// and uniformly from `{0, 1}`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_range(0..=1)).collect(),
        }
    }

    /// The gene vector.
    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    /// Number of genes (equals the catalog size).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the individual has zero genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Indices of the catalog items this individual includes.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &g)| g == 1)
            .map(|(i, _)| i)
    }
}

impl From<Vec<u8>> for Individual {
    fn from(genes: Vec<u8>) -> Self {
        Self::new(genes)
    }
}
