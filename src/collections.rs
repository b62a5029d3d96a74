/// A binary min-heap priority queue.
///
/// Elements are ordered by a non-negative integer priority; lower values are
/// served first.
pub mod priority_queue;
