use crate::error::QueueError;

/// Result type used by the priority queue.
pub type QueueResult<T> = Result<T, QueueError>;

/// A priority queue backed by an array-based binary min-heap.
///
/// Every entry pairs a non-negative `i64` priority with an element. Lower
/// priorities are served first; ties are served in no particular order.
///
/// The entries live in a dense vector laid out as an implicit binary tree:
/// the parent of slot `i` is `(i - 1) / 2` and its children are `2i + 1` and
/// `2i + 2`. For every slot other than the root, the parent's priority is less
/// than or equal to the slot's priority.
///
/// ## Example
/// ```
/// use exprheap::collections::priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert(5, "write report").unwrap();
/// queue.insert(1, "fix build").unwrap();
/// queue.insert(3, "review").unwrap();
///
/// assert_eq!(queue.peek(), Ok(&"fix build"));
/// assert_eq!(queue.remove_front(), Ok("fix build"));
/// assert_eq!(queue.remove_front(), Ok("review"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<E> {
    nodes: Vec<(i64, E)>,
}

impl<E> Default for PriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PriorityQueue<E> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Adds `element` with the given priority.
    ///
    /// # Errors
    /// `InvalidPriority` if `priority` is negative; the queue is left
    /// unchanged.
    pub fn insert(&mut self, priority: i64, element: E) -> QueueResult<()> {
        if priority < 0 {
            log::debug!("rejected negative priority {priority}");
            return Err(QueueError::InvalidPriority { priority });
        }

        self.nodes.push((priority, element));
        self.heapify_up(self.nodes.len() - 1);
        log::trace!("inserted priority {priority}, queue size {}", self.nodes.len());
        Ok(())
    }

    /// Inserts every `(priority, element)` pair in order.
    ///
    /// # Errors
    /// Stops at the first pair with a negative priority and returns
    /// `InvalidPriority`. Pairs before it stay inserted.
    ///
    /// ## Example
    /// ```
    /// use exprheap::{collections::priority_queue::PriorityQueue, error::QueueError};
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.insert_all([(4, 'd'), (2, 'b')]).unwrap();
    ///
    /// let err = queue.insert_all([(3, 'c'), (-1, 'x'), (1, 'a')]).unwrap_err();
    /// assert_eq!(err, QueueError::InvalidPriority { priority: -1 });
    /// assert_eq!(queue.len(), 3);
    /// ```
    pub fn insert_all<I>(&mut self, pairs: I) -> QueueResult<()>
        where I: IntoIterator<Item = (i64, E)>
    {
        for (priority, element) in pairs {
            self.insert(priority, element)?;
        }
        Ok(())
    }

    /// Removes and returns the element with the lowest priority.
    ///
    /// The last entry takes the root's slot and is moved down until the heap
    /// order holds again.
    ///
    /// # Errors
    /// `EmptyQueue` if there is nothing to remove.
    pub fn remove_front(&mut self) -> QueueResult<E> {
        if self.nodes.is_empty() {
            return Err(QueueError::EmptyQueue { operation: "remove the front element" });
        }

        let (priority, element) = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.heapify_down(0);
        }

        log::trace!("removed priority {priority}, queue size {}", self.nodes.len());
        Ok(element)
    }

    /// Returns the element with the lowest priority without removing it.
    ///
    /// # Errors
    /// `EmptyQueue` if the queue has no elements.
    pub fn peek(&self) -> QueueResult<&E> {
        self.nodes
            .first()
            .map(|(_, element)| element)
            .ok_or(QueueError::EmptyQueue { operation: "peek at the front element" })
    }

    /// Returns every priority in heap order.
    #[must_use]
    pub fn all_priorities(&self) -> Vec<i64> {
        self.nodes.iter().map(|(priority, _)| *priority).collect()
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks the heap order over every parent and child pair.
    #[must_use]
    pub fn is_valid_heap(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[parent(i)].0 <= self.nodes[i].0)
    }

    /// Consumes the queue, returning its elements from lowest to highest
    /// priority.
    ///
    /// ## Example
    /// ```
    /// use exprheap::collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.insert_all([(5, 'e'), (1, 'a'), (3, 'c')]).unwrap();
    /// assert_eq!(queue.into_sorted_vec(), ['a', 'c', 'e']);
    /// ```
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        std::iter::from_fn(|| self.remove_front().ok()).collect()
    }

    /// Moves the entry at `index` towards the root while its parent has a
    /// strictly greater priority.
    fn heapify_up(&mut self, mut index: usize) {
        while index > 0 {
            let above = parent(index);
            if self.nodes[above].0 <= self.nodes[index].0 {
                break;
            }
            self.nodes.swap(index, above);
            index = above;
        }
    }

    /// Moves the entry at `index` towards the leaves, swapping with its
    /// smaller child while that child has a strictly lower priority.
    fn heapify_down(&mut self, mut index: usize) {
        let len = self.nodes.len();

        loop {
            let mut lowest = index;
            for child in [left_child(index), right_child(index)] {
                if child < len && self.nodes[child].0 < self.nodes[lowest].0 {
                    lowest = child;
                }
            }

            if lowest == index {
                break;
            }
            self.nodes.swap(index, lowest);
            index = lowest;
        }
    }
}

impl<E: Clone> PriorityQueue<E> {
    /// Returns every element in heap order.
    #[must_use]
    pub fn all_elements(&self) -> Vec<E> {
        self.nodes.iter().map(|(_, element)| element.clone()).collect()
    }
}

impl<E: PartialEq> PriorityQueue<E> {
    /// Returns `true` if the queue holds an element equal to `element`.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.nodes.iter().any(|(_, e)| e == element)
    }

    /// Returns the priority of `element`, or `None` if it is not queued.
    ///
    /// If several entries are equal to `element`, the lowest of their
    /// priorities is returned.
    #[must_use]
    pub fn priority_of(&self, element: &E) -> Option<i64> {
        self.nodes
            .iter()
            .filter(|(_, e)| e == element)
            .map(|(priority, _)| *priority)
            .min()
    }

    /// Sets the priority of every entry equal to `element` to `new_priority`
    /// and restores the heap order around each changed entry.
    ///
    /// A lowered priority is moved up towards the root, a raised one down
    /// towards the leaves.
    ///
    /// # Returns
    /// The number of entries whose priority changed. Entries that already
    /// had `new_priority` are not counted; an absent element gives `0`.
    ///
    /// # Errors
    /// `InvalidPriority` if `new_priority` is negative.
    ///
    /// ## Example
    /// ```
    /// use exprheap::collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.insert(5, "a").unwrap();
    /// queue.insert(1, "b").unwrap();
    ///
    /// assert_eq!(queue.change_priority(&"a", 0), Ok(1));
    /// assert_eq!(queue.remove_front(), Ok("a"));
    /// ```
    pub fn change_priority(&mut self, element: &E, new_priority: i64) -> QueueResult<usize> {
        if new_priority < 0 {
            return Err(QueueError::InvalidPriority { priority: new_priority });
        }

        let mut changed = 0;
        while let Some(index) =
            self.nodes.iter().position(|(priority, e)| e == element && *priority != new_priority)
        {
            let old_priority = std::mem::replace(&mut self.nodes[index].0, new_priority);
            if new_priority < old_priority {
                self.heapify_up(index);
            } else {
                self.heapify_down(index);
            }
            changed += 1;
        }

        log::trace!("changed {changed} entries to priority {new_priority}");
        Ok(changed)
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn left_child(index: usize) -> usize {
    2 * index + 1
}

const fn right_child(index: usize) -> usize {
    2 * index + 2
}
