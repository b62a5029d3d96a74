#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors reported by the priority queue.
pub enum QueueError {
    /// Priorities must be non-negative.
    InvalidPriority {
        /// The rejected priority.
        priority: i64,
    },
    /// The operation needs at least one element.
    EmptyQueue {
        /// What was attempted, e.g. `"remove the front element"`.
        operation: &'static str,
    },
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPriority { priority } => {
                write!(f, "Queue error: Priority {priority} is negative.")
            },
            Self::EmptyQueue { operation } => {
                write!(f, "Queue error: Cannot {operation} of an empty queue.")
            },
        }
    }
}

impl std::error::Error for QueueError {}
