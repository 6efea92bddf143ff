use num_traits::Float;

use crate::{
    Error,
    utils::{Max, Min, Wedge},
};

/// # Sliding Minimum and Maximum
///
/// Tracks both extrema of the last `W` samples of a stream with the monotonic
/// wedge algorithm of Lemire (2006). Each update costs amortized O(1) and at
/// most three comparisons per sample on average, and no memory is allocated
/// after construction.
///
/// The lower wedge is non-decreasing from front to back and holds the
/// candidates for the minimum; the upper wedge is non-increasing and holds the
/// candidates for the maximum. The front of each wedge is the current extremum.
///
/// Until `W` samples have been seen, the extrema cover every sample so far.
#[derive(Debug, Clone)]
pub struct SlidingExtremum<T = f32> {
    /// Candidates for the minimum
    lower: Wedge<T, Min>,
    /// Candidates for the maximum
    upper: Wedge<T, Max>,
    /// Number of samples processed
    count: usize,
}

impl<T> SlidingExtremum<T>
where
    T: Default + Clone + Float,
{
    /// Creates a new `SlidingExtremum` over a window of `window_width` samples
    ///
    /// # Arguments
    ///
    /// * `window_width` - Number of most recent samples to track, must be > 0
    ///
    /// # Returns
    ///
    /// * `Self` - The filter
    ///
    /// # Panics
    ///
    /// Panics if `window_width` is zero. See [`SlidingExtremum::try_new`].
    pub fn new(window_width: usize) -> Self {
        assert!(window_width > 0, "window width can not be zero");
        tracing::debug!(
            target: "sliding_extrema",
            filter = "sliding_extremum",
            window_width,
            "filter_created"
        );

        Self {
            lower: Wedge::new(window_width),
            upper: Wedge::new(window_width),
            count: 0,
        }
    }

    /// Creates a new `SlidingExtremum`, rejecting a zero window width
    ///
    /// # Examples
    ///
    /// ```
    /// # use sliding_extrema::{Error, SlidingExtremum};
    /// assert!(SlidingExtremum::<f32>::try_new(4).is_ok());
    /// assert_eq!(
    ///     SlidingExtremum::<f32>::try_new(0).unwrap_err(),
    ///     Error::ZeroWindowWidth
    /// );
    /// ```
    pub fn try_new(window_width: usize) -> Result<Self, Error> {
        if window_width == 0 {
            return Err(Error::ZeroWindowWidth);
        }
        Ok(Self::new(window_width))
    }

    /// Returns the window width
    #[inline]
    pub const fn window_width(&self) -> usize {
        self.lower.width()
    }

    /// Returns the number of samples processed since construction or the last reset
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true once a full window of samples has been seen
    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.count >= self.window_width()
    }

    /// Feeds the next sample into the filter
    ///
    /// # Arguments
    ///
    /// * `value` - The new sample
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The filter, so results can be read in the same expression
    ///
    /// # Examples
    ///
    /// ```
    /// # use sliding_extrema::SlidingExtremum;
    /// let mut filter = SlidingExtremum::new(2);
    /// assert_eq!(filter.update(4.0).max(), Some(4.0));
    /// assert_eq!(filter.update(7.0).min(), Some(4.0));
    /// assert_eq!(filter.update(5.0).min(), Some(5.0));
    /// ```
    #[inline]
    pub fn update(&mut self, value: T) -> &mut Self {
        let index = self.count;

        // Both backs hold the previous sample, so one comparison picks the
        // only wedge that can need pruning.
        match self.upper.back_value() {
            Some(prev) if value > prev => self.upper.prune_dominated(value),
            Some(_) => self.lower.prune_dominated(value),
            None => {}
        }

        self.lower.push(index, value);
        self.upper.push(index, value);

        self.lower.expire(index);
        self.upper.expire(index);

        self.count += 1;
        self
    }

    /// Returns the minimum of the current window, `None` before the first sample
    #[inline]
    pub fn min(&self) -> Option<T> {
        self.lower.front_value()
    }

    /// Returns the maximum of the current window, `None` before the first sample
    #[inline]
    pub fn max(&self) -> Option<T> {
        self.upper.front_value()
    }

    /// Returns `max - min` of the current window
    ///
    /// # Examples
    ///
    /// ```
    /// # use sliding_extrema::SlidingExtremum;
    /// let mut filter = SlidingExtremum::new(3);
    /// assert_eq!(filter.range(), None);
    /// filter.extend([1.0, 6.0, 2.0, 3.0]);
    /// assert_eq!(filter.range(), Some(4.0));
    /// ```
    #[inline]
    pub fn range(&self) -> Option<T> {
        Some(self.max()? - self.min()?)
    }

    /// Resets the filter to its freshly constructed state without reallocating
    pub fn reset(&mut self) -> &mut Self {
        tracing::debug!(
            target: "sliding_extrema",
            filter = "sliding_extremum",
            samples = self.count,
            "filter_reset"
        );
        self.lower.reset();
        self.upper.reset();
        self.count = 0;
        self
    }
}

impl<T> Extend<T> for SlidingExtremum<T>
where
    T: Default + Clone + Float,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}
