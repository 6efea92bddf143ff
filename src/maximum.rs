use num_traits::Float;

use crate::{
    Error,
    utils::{Max, Wedge},
};

/// # Moving Maximum
///
/// Tracks only the maximum of the last `W` samples. Same wedge as the upper
/// half of [`SlidingExtremum`](crate::SlidingExtremum), with half the
/// bookkeeping per sample.
#[derive(Debug, Clone)]
pub struct MovingMax<T = f32> {
    wedge: Wedge<T, Max>,
    count: usize,
}

impl<T: Default + Clone + Float> MovingMax<T> {
    /// Creates a new MovingMax instance with the specified window width
    ///
    /// # Arguments
    ///
    /// * `window_width` - The number of samples in the window, must be > 0
    ///
    /// # Returns
    ///
    /// A new MovingMax instance
    pub fn new(window_width: usize) -> Self {
        assert!(window_width > 0, "window width can not be zero");
        tracing::debug!(
            target: "sliding_extrema",
            filter = "moving_max",
            window_width,
            "filter_created"
        );

        Self {
            wedge: Wedge::new(window_width),
            count: 0,
        }
    }

    /// Creates a new MovingMax instance, rejecting a zero window width
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
    /// # use sliding_extrema::MovingMax;
    /// let mut filter = MovingMax::new(3);
    /// let mut results = vec![];
    ///
    /// for v in [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0] {
    ///     results.extend(filter.update(v).max());
    /// }
    ///
    /// assert_eq!(results, [3.0, 3.0, 4.0, 4.0, 5.0, 9.0, 9.0, 9.0]);
    /// ```
    #[inline]
    pub fn update(&mut self, value: T) -> &mut Self {
        self.wedge.update(self.count, value);
        self.count += 1;
        self
    }

    /// Returns the maximum value in the rolling window
    ///
    /// # Returns
    ///
    /// None before the first sample, otherwise the maximum over the last
    /// `min(count, window_width)` samples
    #[inline]
    pub fn max(&self) -> Option<T> {
        self.wedge.front_value()
    }

    /// Resets the rolling window
    pub fn reset(&mut self) -> &mut Self {
        self.wedge.reset();
        self.count = 0;
        self
    }
}

impl<T: Default + Clone + Float> Extend<T> for MovingMax<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}
