use core::marker::PhantomData;

use super::{BoundedRingDeque, IndexedValue};

/// Trait for defining the trend a wedge keeps from front to back
///
/// # Methods
///
/// * `dominates(new: &T, existing: &T) -> bool` - Returns true if `existing` can
///   never again be the extremum once `new` is in the window
pub trait OrderPolicy<T> {
    fn dominates(new: &T, existing: &T) -> bool;
}

/// Order policy for minimum, the wedge is non-decreasing
#[derive(Debug, Clone)]
pub struct Min;

/// Order policy for maximum, the wedge is non-increasing
#[derive(Debug, Clone)]
pub struct Max;

// Ties count as dominated: the later equal value outlives the earlier one.
impl<T: PartialOrd> OrderPolicy<T> for Min {
    #[inline]
    fn dominates(new: &T, existing: &T) -> bool {
        existing >= new
    }
}

impl<T: PartialOrd> OrderPolicy<T> for Max {
    #[inline]
    fn dominates(new: &T, existing: &T) -> bool {
        existing <= new
    }
}

/// Monotonic sequence of candidate extrema over a trailing window
///
/// The wedge does not count samples itself; callers pass the sequence number of
/// each sample so that two wedges can share one counter.
///
/// # Type Parameters
///
/// * `T` - The type of the sample values
/// * `O` - The order policy of the wedge
#[derive(Debug, Clone)]
pub struct Wedge<T, O> {
    deque: BoundedRingDeque<IndexedValue<T>>,
    width: usize,
    _order: PhantomData<O>,
    /// Records removed by pruning or expiry
    #[cfg(test)]
    pruned: usize,
}

impl<T, O> Wedge<T, O>
where
    T: PartialOrd + Copy + Default,
    O: OrderPolicy<T>,
{
    /// Creates a new `Wedge` for a window of `width` samples.
    ///
    /// The deque holds `width + 1` records, the most it contains between a push
    /// and the following expiry.
    #[inline]
    pub fn new(width: usize) -> Self {
        Self {
            deque: BoundedRingDeque::new(width + 1),
            width,
            _order: PhantomData,
            #[cfg(test)]
            pruned: 0,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub const fn len(&self) -> usize {
        self.deque.len()
    }

    #[cfg(test)]
    pub const fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    #[cfg(test)]
    pub const fn capacity(&self) -> usize {
        self.deque.capacity()
    }

    /// Value of the most recently pushed record
    #[inline]
    pub fn back_value(&self) -> Option<T> {
        (!self.deque.is_empty()).then(|| self.deque.back().value)
    }

    /// Value of the oldest surviving record, the current extremum
    #[inline]
    pub fn front_value(&self) -> Option<T> {
        (!self.deque.is_empty()).then(|| self.deque.front().value)
    }

    /// Drops records from the back that `value` dominates
    #[inline]
    pub fn prune_dominated(&mut self, value: T) {
        while !self.deque.is_empty() && O::dominates(&value, &self.deque.back().value) {
            self.deque.prune_back();
            #[cfg(test)]
            {
                self.pruned += 1;
            }
        }
    }

    /// Appends the sample with sequence number `index`
    #[inline]
    pub fn push(&mut self, index: usize, value: T) {
        self.deque.push_back(IndexedValue::new(index, value));
    }

    /// Drops the front record if it left the window ending at `index`
    #[inline]
    pub fn expire(&mut self, index: usize) {
        if !self.deque.is_empty() && self.deque.front().index + self.width == index {
            self.deque.prune_front();
            #[cfg(test)]
            {
                self.pruned += 1;
            }
        }
    }

    /// Runs one full single-sided step for the sample with sequence number `index`
    #[inline]
    pub fn update(&mut self, index: usize, value: T) {
        self.prune_dominated(value);
        self.push(index, value);
        self.expire(index);
    }

    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.deque.clear();
        #[cfg(test)]
        {
            self.pruned = 0;
        }
        self
    }

    #[cfg(test)]
    pub const fn pruned(&self) -> usize {
        self.pruned
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &IndexedValue<T>> {
        self.deque.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::{Max, Min, Wedge};
    use alloc::vec::Vec;

    fn run<O: super::OrderPolicy<i32>>(input: &[i32], width: usize) -> Vec<i32> {
        let mut wedge = Wedge::<i32, O>::new(width);
        input
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                wedge.update(i, v);
                wedge.front_value().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_equal_values_keep_latest() {
        let mut wedge = Wedge::<i32, Min>::new(3);
        wedge.update(0, 5);
        wedge.update(1, 5);
        wedge.update(2, 5);

        assert_eq!(wedge.len(), 1);
        assert_eq!(wedge.iter().next().unwrap().index, 2);
        assert_eq!(wedge.front_value(), Some(5));
    }

    #[test]
    fn test_min_sliding_window() {
        let input = [31, 4, 52, 60, 61, 15, 28, 2, 36, 1];
        assert_eq!(
            run::<Min>(&input, 3),
            vec![31, 4, 4, 4, 52, 15, 15, 2, 2, 1]
        );
    }

    #[test]
    fn test_max_sliding_window() {
        let input = [31, 4, 52, 60, 61, 15, 28, 2, 36, 1];
        assert_eq!(
            run::<Max>(&input, 3),
            vec![31, 31, 52, 60, 61, 61, 61, 28, 36, 36]
        );
    }

    #[test]
    fn test_single_element_window() {
        let input = [9, 7, 8, 8, 1];
        assert_eq!(run::<Min>(&input, 1), input);
        assert_eq!(run::<Max>(&input, 1), input);
    }

    #[test]
    fn test_ascending_descending_sequences() {
        let ascending = [1, 2, 3, 4, 5, 6];
        assert_eq!(run::<Min>(&ascending, 3), vec![1, 1, 1, 2, 3, 4]);
        assert_eq!(run::<Max>(&ascending, 3), vec![1, 2, 3, 4, 5, 6]);

        let descending = [6, 5, 4, 3, 2, 1];
        assert_eq!(run::<Max>(&descending, 3), vec![6, 6, 6, 5, 4, 3]);
    }

    #[test]
    fn test_expire_only_matches_exact_index() {
        let mut wedge = Wedge::<i32, Max>::new(2);
        wedge.push(0, 10);
        wedge.expire(1);
        assert_eq!(wedge.len(), 1);
        wedge.expire(2);
        assert!(wedge.is_empty());
        assert_eq!(wedge.pruned(), 1);
    }

    #[test]
    fn test_pruned_counts_back_and_front_removals() {
        let mut wedge = Wedge::<i32, Min>::new(2);
        wedge.update(0, 3);
        wedge.update(1, 5);
        assert_eq!(wedge.pruned(), 0);

        // Index 0 expires.
        wedge.update(2, 6);
        assert_eq!(wedge.pruned(), 1);

        // 5 and 6 are dominated by 4.
        wedge.update(3, 4);
        assert_eq!(wedge.pruned(), 3);
        assert_eq!(wedge.len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut wedge = Wedge::<i32, Min>::new(3);
        wedge.update(0, 14);
        wedge.update(1, 13);
        wedge.reset();
        assert!(wedge.is_empty());
        assert_eq!(wedge.front_value(), None);
        assert_eq!(wedge.back_value(), None);

        wedge.update(0, 10);
        assert_eq!(wedge.front_value(), Some(10));
        assert_eq!(wedge.width(), 3);
    }

    #[test]
    fn test_capacity_covers_transient_record() {
        for width in 1..40 {
            let wedge = Wedge::<i32, Min>::new(width);
            assert!(wedge.capacity() >= width + 1);
        }
    }
}
