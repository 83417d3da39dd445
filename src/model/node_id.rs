//! Node identifiers and the counter handing them out.

use std::fmt;

// =#========================================================================#=
// NODE ID
// =#========================================================================$=
/// Unique identifier of a [TreeNode](crate::model::TreeNode).
///
/// Ids are only used to derive unique diagram identifiers
/// (see [crate::diagram]); they play no role in equality or serialization.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct NodeId(u64);

impl NodeId {
    /// Returns the raw integer value of this id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =#========================================================================#=
// ID COUNTER
// =#========================================================================$=
/// Monotonically increasing source of [NodeId]s.
///
/// There is no process-wide counter: a counter is owned by a
/// [LabeledTree](crate::model::LabeledTree) or a
/// [TreeNotationParser](crate::notation::TreeNotationParser) and can be
/// handed from one to the next, so ids stay unique across everything built
/// from the same counter.
///
/// # Example
/// ```
/// use treemaker::model::IdCounter;
///
/// let mut ids = IdCounter::new();
/// assert_eq!(ids.next_id().value(), 0);
/// assert_eq!(ids.next_id().value(), 1);
/// ids.reset();
/// assert_eq!(ids.next_id().value(), 0);
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Creates a counter whose next id is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }

    /// Returns a fresh id and advances the counter.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Returns the id the next call to [next_id](Self::next_id) will hand out.
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }

    /// Restores the counter to zero.
    ///
    /// Meant for test isolation: ids handed out afterwards collide with
    /// ids of nodes that are still alive.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
