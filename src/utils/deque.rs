use alloc::boxed::Box;

/// A sample value tagged with its position in the stream.
///
/// `index` is the global sequence number of the sample, not its position inside
/// the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndexedValue<T> {
    /// Sequence number of the sample
    pub index: usize,
    /// Sample value
    pub value: T,
}

impl<T> IndexedValue<T> {
    /// Creates a new record
    #[inline]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

/// A fixed-capacity double-ended queue backed by a power-of-two ring buffer
///
/// Slots are allocated once at construction and never reallocated. Every cursor
/// update is a bitmask, so all operations are O(1).
///
/// Pushing into a full deque and popping or peeking an empty one are caller
/// errors. They panic in debug builds and are left unchecked otherwise.
#[derive(Debug, Clone)]
pub struct BoundedRingDeque<T> {
    /// Backing slots, length is a power of two
    buf: Box<[T]>,
    /// `buf.len() - 1`
    mask: usize,
    /// Slot holding the front element
    front: usize,
    /// Slot where the next back element will be written
    back: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T> BoundedRingDeque<T>
where
    T: Default + Clone,
{
    /// Creates a new deque able to hold at least `capacity` elements.
    ///
    /// The backing array has `(capacity + 1).next_power_of_two()` slots.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The minimum number of elements the deque must hold
    ///
    /// # Returns
    ///
    /// * `Self` - The `BoundedRingDeque` instance
    ///
    /// # Examples
    ///
    /// ```
    /// # use sliding_extrema::BoundedRingDeque;
    /// let deque = BoundedRingDeque::<f32>::new(5);
    /// assert_eq!(deque.capacity(), 8);
    /// assert!(deque.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        let slots = (capacity + 1).next_power_of_two();
        tracing::debug!(
            target: "sliding_extrema",
            requested = capacity,
            slots,
            "deque_created"
        );

        Self {
            buf: vec![T::default(); slots].into_boxed_slice(),
            mask: slots - 1,
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Returns the number of elements the deque can hold
    ///
    /// This is the slot count, `(requested + 1).next_power_of_two()`. The
    /// explicit length keeps a full deque distinct from an empty one, so every
    /// slot is usable.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Returns the current number of elements stored in the deque
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the deque is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no further element can be pushed
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Removes every element, leaving the slots allocated
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.buf.fill(T::default());
        self.front = 0;
        self.back = 0;
        self.len = 0;
        self
    }

    /// Pushes an element in front of the current front element
    ///
    /// # Arguments
    ///
    /// * `item` - The element to push
    #[inline]
    pub fn push_front(&mut self, item: T) {
        debug_assert!(!self.is_full(), "push_front on a full deque");
        self.front = self.front.wrapping_sub(1) & self.mask;
        self.buf[self.front] = item;
        self.len += 1;
    }

    /// Pushes an element behind the current back element
    ///
    /// # Arguments
    ///
    /// * `item` - The element to push
    #[inline]
    pub fn push_back(&mut self, item: T) {
        debug_assert!(!self.is_full(), "push_back on a full deque");
        self.buf[self.back] = item;
        self.back = (self.back + 1) & self.mask;
        self.len += 1;
    }

    /// Removes and returns the front element
    ///
    /// # Returns
    ///
    /// * `T` - The element that was at the front
    #[inline]
    pub fn pop_front(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_front on an empty deque");
        let item = core::mem::take(&mut self.buf[self.front]);
        self.prune_front();
        item
    }

    /// Removes and returns the back element
    ///
    /// # Returns
    ///
    /// * `T` - The element that was at the back
    #[inline]
    pub fn pop_back(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_back on an empty deque");
        self.prune_back();
        core::mem::take(&mut self.buf[self.back])
    }

    /// Drops the front element without reading it
    #[inline]
    pub fn prune_front(&mut self) {
        debug_assert!(!self.is_empty(), "prune_front on an empty deque");
        self.front = (self.front + 1) & self.mask;
        self.len -= 1;
    }

    /// Drops the back element without reading it
    #[inline]
    pub fn prune_back(&mut self) {
        debug_assert!(!self.is_empty(), "prune_back on an empty deque");
        self.back = self.back.wrapping_sub(1) & self.mask;
        self.len -= 1;
    }

    /// Returns a reference to the front element
    #[inline]
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front on an empty deque");
        &self.buf[self.front]
    }

    /// Returns a reference to the back element
    ///
    /// `back` points at the next free slot, so the last element sits one slot
    /// before it.
    #[inline]
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back on an empty deque");
        &self.buf[self.back.wrapping_sub(1) & self.mask]
    }

    /// Returns an iterator over the elements from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| &self.buf[(self.front + i) & self.mask])
    }
}
