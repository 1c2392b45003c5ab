//! Dominance-based graph analyses.
//!
//! # Available Analyses
//!
//! - [`compute_dominators`] / [`compute_dominators_from`] - immediate
//!   dominators via Lengauer-Tarjan, wrapped in a [`DominatorTree`]
//! - [`reverse_dominance_frontier`] - which nodes' dominance frontiers
//!   contain each node
//! - [`indirect_predecessor_sets`] - nodes reachable backwards through
//!   walks of length >= 2
//! - [`indirect_predecessors_of_frontier`] - the two combined
//! - [`dfs`] - iterative pre-order traversal
//!
//! | Analysis | Time | Input orientation |
//! |----------|------|-------------------|
//! | Dominator tree | O(V α(V) + E) | forward |
//! | Dominance frontier | O((V + E) · V/64) | forward |
//! | Indirect predecessors | O((V + E) · V/64) | reverse |
//!
//! All analyses are pure functions: they allocate their own working
//! state, return freshly allocated results, and share nothing mutable.

pub mod dominators;
pub mod frontier;
pub mod predecessors;
pub mod traversal;

pub use dominators::{compute_dominators, compute_dominators_from, DominatorTree};
pub use frontier::reverse_dominance_frontier;
pub use predecessors::indirect_predecessor_sets;
pub use traversal::{dfs, DfsIterator};

use crate::graph::{NodeId, ReversedFlowGraph, RootedGraph};

/// Computes the indirect predecessor sets of the reverse dominance
/// frontier.
///
/// Runs [`reverse_dominance_frontier`] on the graph, then treats its
/// output as a reverse adjacency list and feeds it to
/// [`indirect_predecessor_sets`]: the result for node `v` lists the
/// nodes whose frontier relation reaches `v` through at least two
/// steps. SSA-construction passes use this to batch phi placement
/// across chained join points.
#[must_use]
pub fn indirect_predecessors_of_frontier<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: RootedGraph,
{
    let rdf = reverse_dominance_frontier(graph);
    indirect_predecessor_sets(&ReversedFlowGraph::from_node_lists(rdf))
}
