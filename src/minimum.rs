use num_traits::Float;

use crate::{
    Error,
    utils::{Min, Wedge},
};

/// # Moving Minimum
///
/// Tracks only the minimum of the last `W` samples. Same wedge as the lower
/// half of [`SlidingExtremum`](crate::SlidingExtremum), with half the
/// bookkeeping per sample.
#[derive(Debug, Clone)]
pub struct MovingMin<T = f32> {
    wedge: Wedge<T, Min>,
    count: usize,
}

impl<T: Default + Clone + Float> MovingMin<T> {
    /// Creates a new MovingMin instance with the specified window width
    ///
    /// # Arguments
    ///
    /// * `window_width` - The number of samples in the window, must be > 0
    ///
    /// # Returns
    ///
    /// A new MovingMin instance
    pub fn new(window_width: usize) -> Self {
        assert!(window_width > 0, "window width can not be zero");
        tracing::debug!(
            target: "sliding_extrema",
            filter = "moving_min",
            window_width,
            "filter_created"
        );

        Self {
            wedge: Wedge::new(window_width),
            count: 0,
        }
    }

    /// Creates a new MovingMin instance, rejecting a zero window width
    pub fn try_new(window_width: usize) -> Result<Self, Error> {
        if window_width == 0 {
            return Err(Error::ZeroWindowWidth);
        }
        Ok(Self::new(window_width))
    }

    /// Returns the window width
    pub const fn window_width(&self) -> usize {
        self.wedge.width()
    }

    /// Returns the number of samples processed
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true once a full window of samples has been seen
    pub const fn is_ready(&self) -> bool {
        self.count >= self.window_width()
    }

    /// Pushes a new value into the rolling window
    ///
    /// # Examples
    ///
    /// ```
    /// # use sliding_extrema::MovingMin;
    /// let mut filter = MovingMin::new(3);
    /// let mut results = vec![];
    ///
    /// for v in [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0] {
    ///     results.extend(filter.update(v).min());
    /// }
    ///
    /// assert_eq!(results, [3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0]);
    /// ```
    #[inline]
    pub fn update(&mut self, value: T) -> &mut Self {
        self.wedge.update(self.count, value);
        self.count += 1;
        self
    }

    /// Returns the minimum value in the rolling window
    ///
    /// # Returns
    ///
    /// None before the first sample, otherwise the minimum over the last
    /// `min(count, window_width)` samples
    #[inline]
    pub fn min(&self) -> Option<T> {
        self.wedge.front_value()
    }

    /// Resets the rolling window
    pub fn reset(&mut self) -> &mut Self {
        self.wedge.reset();
        self.count = 0;
        self
    }
}

impl<T: Default + Clone + Float> Extend<T> for MovingMin<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::MovingMin;
    use crate::{Error, utils::reference::brute_force_extrema};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);

        for width in [1, 2, 3, 5, 8, 50, 500] {
            let values: alloc::vec::Vec<f32> =
                (0..300).map(|_| rng.gen_range(0..10) as f32).collect();
            let (mins, _) = brute_force_extrema(&values, width);

            let mut filter = MovingMin::new(width);
            for (i, &v) in values.iter().enumerate() {
                assert_eq!(filter.update(v).min(), Some(mins[i]));
                assert!(filter.wedge.len() <= width);
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut filter = MovingMin::new(3);
        filter.extend([14.0f32, 13.0, 12.0]);
        assert_eq!(filter.min(), Some(12.0));
        assert!(filter.is_ready());

        filter.reset();
        assert_eq!(filter.min(), None);
        assert_eq!(filter.count(), 0);

        filter.update(20.0);
        assert_eq!(filter.min(), Some(20.0));
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(
            MovingMin::<f32>::try_new(0).unwrap_err(),
            Error::ZeroWindowWidth
        );
        assert_eq!(MovingMin::<f32>::try_new(6).unwrap().window_width(), 6);
    }
}
