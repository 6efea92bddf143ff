mod deque;
pub use deque::{BoundedRingDeque, IndexedValue};

mod wedge;
pub use wedge::{Max, Min, Wedge};

#[cfg(test)]
pub mod reference;
