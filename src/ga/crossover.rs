//! Recombination operators.
//!
//! Crossover combines two equal-length parents into two children of the
//! same length. Parents are never modified and remain usable afterwards.

use super::error::GaError;
use super::types::Individual;
use rand::Rng;

/// Strategy for recombining two parents into two children.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single-point crossover: one cut index drawn uniformly from
    /// `[1, length - 1]`; each child takes one parent's prefix and the
    /// other's suffix.
    SinglePoint,

    /// Uniform crossover with inheritance probability `p`: at each gene
    /// position, with probability `p` child 1 inherits from parent 1
    /// (and child 2 from parent 2), otherwise the inheritance swaps.
    ///
    /// `p = 1.0` yields children identical to their same-numbered
    /// parent; `p = 0.0` yields fully swapped children.
    Uniform(f64),
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::SinglePoint
    }
}

impl Crossover {
    /// Uniform crossover with `p` clamped to `[0, 1]`.
    pub fn uniform(p: f64) -> Self {
        Crossover::Uniform(p.clamp(0.0, 1.0))
    }

    /// Produces two children from two parents.
    ///
    /// Both children have the same length as the parents. With length
    /// ≤ 1 no crossover point exists and both children are exact copies
    /// of the respective parents.
    ///
    /// # Errors
    /// Returns [`GaError::LengthMismatch`] when the parents have
    /// different lengths.
    pub fn cross<R: Rng + ?Sized>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Result<(Individual, Individual), GaError> {
        if parent1.len() != parent2.len() {
            return Err(GaError::LengthMismatch {
                left: parent1.len(),
                right: parent2.len(),
            });
        }
        if parent1.len() <= 1 {
            return Ok((parent1.clone(), parent2.clone()));
        }

        Ok(match *self {
            Crossover::SinglePoint => single_point(parent1, parent2, rng),
            Crossover::Uniform(p) => uniform(parent1, parent2, p.clamp(0.0, 1.0), rng),
        })
    }
}

fn single_point<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    let g1 = parent1.genes();
    let g2 = parent2.genes();
    let cut = rng.random_range(1..g1.len());

    let child1: Vec<u8> = g1[..cut].iter().chain(&g2[cut..]).copied().collect();
    let child2: Vec<u8> = g2[..cut].iter().chain(&g1[cut..]).copied().collect();
    (Individual::new(child1), Individual::new(child2))
}

fn uniform<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    p: f64,
    rng: &mut R,
) -> (Individual, Individual) {
    let len = parent1.len();
    let mut child1 = Vec::with_capacity(len);
    let mut child2 = Vec::with_capacity(len);

    for (&a, &b) in parent1.genes().iter().zip(parent2.genes()) {
        if rng.random_bool(p) {
            child1.push(a);
            child2.push(b);
        } else {
            child1.push(b);
            child2.push(a);
        }
    }
    (Individual::new(child1), Individual::new(child2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_point_splices_at_one_cut() {
        let p1 = Individual::new(vec![0; 8]);
        let p2 = Individual::new(vec![1; 8]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let (c1, c2) = Crossover::SinglePoint.cross(&p1, &p2, &mut rng).unwrap();
            // child1 must be 0^cut 1^(8-cut) with cut in 1..8,
            // and child2 the complement splice at the same cut.
            let cut = c1.genes().iter().take_while(|&&g| g == 0).count();
            assert!((1..8).contains(&cut), "cut {cut} out of range");
            assert!(c1.genes()[cut..].iter().all(|&g| g == 1));
            assert!(c2.genes()[..cut].iter().all(|&g| g == 1));
            assert!(c2.genes()[cut..].iter().all(|&g| g == 0));
        }
    }

    #[test]
    fn test_children_match_parent_length() {
        let p1 = Individual::new(vec![1, 0, 1, 1, 0]);
        let p2 = Individual::new(vec![0, 1, 0, 0, 1]);
        let mut rng = StdRng::seed_from_u64(42);

        for strategy in [Crossover::SinglePoint, Crossover::Uniform(0.5)] {
            let (c1, c2) = strategy.cross(&p1, &p2, &mut rng).unwrap();
            assert_eq!(c1.len(), 5);
            assert_eq!(c2.len(), 5);
        }
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let p1 = Individual::new(vec![1, 0, 1]);
        let p2 = Individual::new(vec![0, 1]);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            Crossover::SinglePoint.cross(&p1, &p2, &mut rng),
            Err(GaError::LengthMismatch { left: 3, right: 2 })
        );
        assert_eq!(
            Crossover::Uniform(0.5).cross(&p1, &p2, &mut rng),
            Err(GaError::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_degenerate_length_returns_copies() {
        let mut rng = StdRng::seed_from_u64(42);

        for strategy in [Crossover::SinglePoint, Crossover::Uniform(0.5)] {
            let p1 = Individual::new(vec![1]);
            let p2 = Individual::new(vec![0]);
            let (c1, c2) = strategy.cross(&p1, &p2, &mut rng).unwrap();
            assert_eq!(c1, p1);
            assert_eq!(c2, p2);

            let empty = Individual::new(vec![]);
            let (c1, c2) = strategy.cross(&empty, &empty, &mut rng).unwrap();
            assert!(c1.is_empty());
            assert!(c2.is_empty());
        }
    }

    #[test]
    fn test_uniform_extreme_probabilities() {
        let p1 = Individual::new(vec![1, 1, 0, 1, 0, 0]);
        let p2 = Individual::new(vec![0, 0, 1, 0, 1, 1]);
        let mut rng = StdRng::seed_from_u64(42);

        let (c1, c2) = Crossover::Uniform(1.0).cross(&p1, &p2, &mut rng).unwrap();
        assert_eq!((c1, c2), (p1.clone(), p2.clone()));

        let (c1, c2) = Crossover::Uniform(0.0).cross(&p1, &p2, &mut rng).unwrap();
        assert_eq!((c1, c2), (p2, p1));
    }

    #[test]
    fn test_uniform_constructor_clamps_probability() {
        assert_eq!(Crossover::uniform(1.5), Crossover::Uniform(1.0));
        assert_eq!(Crossover::uniform(-0.5), Crossover::Uniform(0.0));
    }

    #[test]
    fn test_parents_unchanged_after_crossover() {
        let p1 = Individual::new(vec![1, 0, 1, 1]);
        let p2 = Individual::new(vec![0, 1, 0, 0]);
        let p1_before = p1.clone();
        let p2_before = p2.clone();
        let mut rng = StdRng::seed_from_u64(42);

        for strategy in [Crossover::SinglePoint, Crossover::Uniform(0.3)] {
            for _ in 0..20 {
                strategy.cross(&p1, &p2, &mut rng).unwrap();
            }
        }
        assert_eq!(p1, p1_before);
        assert_eq!(p2, p2_before);
    }

    proptest! {
        #[test]
        fn prop_uniform_children_take_each_gene_from_a_parent(
            genes1 in proptest::collection::vec(0u8..=1, 2..40),
            seed in any::<u64>(),
        ) {
            let genes2: Vec<u8> = genes1.iter().map(|&g| 1 - g).collect();
            let p1 = Individual::new(genes1.clone());
            let p2 = Individual::new(genes2.clone());
            let mut rng = StdRng::seed_from_u64(seed);

            let (c1, c2) = Crossover::Uniform(0.5).cross(&p1, &p2, &mut rng).unwrap();
            prop_assert_eq!(c1.len(), genes1.len());
            prop_assert_eq!(c2.len(), genes1.len());
            for i in 0..genes1.len() {
                // At every position the two children split the two
                // parents' genes between them.
                let pair = (c1.genes()[i], c2.genes()[i]);
                let expected = (genes1[i], genes2[i]);
                let swapped = (genes2[i], genes1[i]);
                prop_assert!(pair == expected || pair == swapped);
            }
        }
    }
}
