//! Graph representations for the dominance analyses.
//!
//! # Key Components
//!
//! - [`NodeId`] - strongly-typed node identifier
//! - [`FlowGraph`] - validated forward adjacency list, entry at node 0
//! - [`ReversedFlowGraph`] - validated reverse adjacency list
//! - [`GraphBase`] / [`Successors`] / [`Predecessors`] / [`RootedGraph`] -
//!   abstraction traits the algorithms are written against
//!
//! Graphs are built once and then treated as immutable; the concrete
//! types precompute both edge directions on construction so adjacency
//! queries are slice borrows.

mod adjacency;
mod node;
mod traits;

pub use adjacency::{FlowGraph, ReversedFlowGraph};
pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, RootedGraph, Successors};
