/*
 * Sampling Module
 *
 * A small weighted picker shared by object type and movement selection.
 * Backed by rand's WeightedIndex (cumulative weights + one uniform draw).
 */

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::SkyError;

#[derive(Clone, Debug)]
pub struct WeightedChoice<T> {
    items: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Copy> WeightedChoice<T> {
    // Fails when there are no items or every weight is zero
    pub fn new(entries: impl IntoIterator<Item = (T, u32)>) -> Result<Self, SkyError> {
        let (items, weights): (Vec<T>, Vec<u32>) = entries.into_iter().unzip();
        let index = WeightedIndex::new(weights)?;
        Ok(Self { items, index })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.items[self.index.sample(rng)]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_weight_items_are_never_picked() {
        let choice = WeightedChoice::new([('a', 0), ('b', 5), ('c', 0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert_eq!(choice.sample(&mut rng), 'b');
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let result = WeightedChoice::<char>::new(Vec::new());
        assert!(matches!(result, Err(SkyError::Sampling(_))));
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        assert!(WeightedChoice::new([(1u8, 0), (2u8, 0)]).is_err());
    }

    #[test]
    fn heavier_items_come_up_more_often() {
        let choice = WeightedChoice::new([(0usize, 90), (1usize, 10)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[choice.sample(&mut rng)] += 1;
        }
        assert!(counts[0] > counts[1] * 4);
        assert_eq!(choice.len(), 2);
    }
}
