/// Parsing errors.
///
/// Defines every way an expression can be malformed: unrecognized tokens,
/// unbalanced parentheses, operators without operands and operands without
/// operators. All of them are detected before a tree exists.
pub mod parse_error;
/// Queue errors.
///
/// Raised by the priority queue for negative priorities and for reads from an
/// empty queue.
pub mod queue_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a well formed tree,
/// such as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use queue_error::QueueError;
pub use runtime_error::RuntimeError;
