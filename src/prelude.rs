//! Convenient re-exports of the most commonly used types and entry
//! points.
//!
//! ```
//! use flowdom::prelude::*;
//!
//! let graph = FlowGraph::from_adjacency(&[vec![1], vec![]])?;
//! let tree = compute_dominators(&graph);
//! assert_eq!(tree.immediate_dominator(NodeId::new(1)), Some(NodeId::new(0)));
//! # Ok::<(), flowdom::Error>(())
//! ```

/// The error type for all fallible operations.
pub use crate::Error;

/// The result type used throughout the crate.
pub use crate::Result;

/// Graph building blocks.
pub use crate::graph::{FlowGraph, NodeId, ReversedFlowGraph};

/// Graph abstraction traits.
pub use crate::graph::{GraphBase, Predecessors, RootedGraph, Successors};

/// The packed bit vector underlying the set-based analyses.
pub use crate::bitset::BitSet;

/// The analyses.
pub use crate::algorithms::{
    compute_dominators, compute_dominators_from, indirect_predecessor_sets,
    indirect_predecessors_of_frontier, reverse_dominance_frontier, DominatorTree,
};
