//! Validated adjacency-list graphs.
//!
//! This module provides the two concrete graph types consumed by the
//! analyses: [`FlowGraph`], a forward adjacency list with node 0 as the
//! entry, and [`ReversedFlowGraph`], the same shape with edge direction
//! flipped (`incoming[v]` lists the predecessors of `v`).
//!
//! Keeping the two orientations as distinct types prevents a reversed
//! adjacency list from being handed to an analysis that expects the
//! forward orientation, which plain nested vectors cannot catch.
//!
//! Both types validate edge targets on construction and precompute the
//! opposite-direction lists, so every adjacency query afterwards is a
//! slice borrow.

use crate::{
    graph::{GraphBase, NodeId, Predecessors, RootedGraph, Successors},
    Error, Result,
};

/// Checks every edge target and splits a raw adjacency list into
/// typed per-node edge lists plus the flipped orientation.
fn build_lists(adjacency: &[Vec<usize>]) -> Result<(Vec<Vec<NodeId>>, Vec<Vec<NodeId>>)> {
    let n = adjacency.len();
    let mut forward: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    let mut flipped: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    for (index, targets) in adjacency.iter().enumerate() {
        for &target in targets {
            if target >= n {
                return Err(Error::InvalidGraph {
                    index,
                    target,
                    node_count: n,
                });
            }
            forward[index].push(NodeId::new(target));
            flipped[target].push(NodeId::new(index));
        }
    }
    Ok((forward, flipped))
}

/// A control-flow graph in forward orientation.
///
/// `graph[i]` is the ordered list of successors of node `i`; node 0 is
/// the entry. Duplicate edges and self-loops are allowed and preserved.
/// Nodes unreachable from the entry are valid; the analyses report them
/// as unreached rather than failing.
///
/// # Examples
///
/// ```
/// use flowdom::{FlowGraph, NodeId};
/// use flowdom::graph::Successors;
///
/// // diamond: 0 -> {1, 2} -> 3
/// let graph = FlowGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]])?;
/// assert_eq!(graph.node_count(), 4);
/// let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
/// assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2)]);
/// # Ok::<(), flowdom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FlowGraph {
    /// Successor lists, in input order.
    succ: Vec<Vec<NodeId>>,
    /// Predecessor lists, derived on construction.
    pred: Vec<Vec<NodeId>>,
}

impl FlowGraph {
    /// Builds a flow graph from a forward adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if any edge references a node
    /// index `>=` the number of nodes.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let (succ, pred) = build_lists(adjacency)?;
        Ok(Self { succ, pred })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.succ.len()
    }

    /// Returns the successors of a node as a slice, in input order.
    #[must_use]
    pub fn successors_of(&self, node: NodeId) -> &[NodeId] {
        &self.succ[node.index()]
    }

    /// Returns the predecessors of a node as a slice.
    #[must_use]
    pub fn predecessors_of(&self, node: NodeId) -> &[NodeId] {
        &self.pred[node.index()]
    }
}

impl GraphBase for FlowGraph {
    fn node_count(&self) -> usize {
        self.succ.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.succ.len()).map(NodeId::new)
    }
}

impl Successors for FlowGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.succ[node.index()].iter().copied()
    }
}

impl Predecessors for FlowGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.pred[node.index()].iter().copied()
    }
}

impl RootedGraph for FlowGraph {
    fn entry(&self) -> NodeId {
        NodeId::new(0)
    }
}

/// A control-flow graph given in reverse orientation.
///
/// `graph[i]` lists the *predecessors* of node `i` in the underlying
/// graph. This is the input shape of
/// [`indirect_predecessor_sets`](crate::algorithms::indirect_predecessor_sets);
/// a dedicated type keeps it from being mistaken for a forward adjacency
/// list. The forward lists are derived on construction so both
/// directions can be traversed.
#[derive(Debug, Clone)]
pub struct ReversedFlowGraph {
    /// The given lists: `incoming[v]` are the predecessors of `v`.
    incoming: Vec<Vec<NodeId>>,
    /// Forward lists derived from `incoming`.
    outgoing: Vec<Vec<NodeId>>,
}

impl ReversedFlowGraph {
    /// Builds a reversed flow graph from a reverse adjacency list
    /// (`adjacency[v]` lists the predecessors of `v`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if any edge references a node
    /// index `>=` the number of nodes.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let (incoming, outgoing) = build_lists(adjacency)?;
        Ok(Self { incoming, outgoing })
    }

    /// Builds a reversed flow graph from already-typed predecessor
    /// lists, skipping validation. Used to chain one analysis's output
    /// into another.
    pub(crate) fn from_node_lists(incoming: Vec<Vec<NodeId>>) -> Self {
        let mut outgoing: Vec<Vec<NodeId>> = vec![Vec::new(); incoming.len()];
        for (to, sources) in incoming.iter().enumerate() {
            for &from in sources {
                outgoing[from.index()].push(NodeId::new(to));
            }
        }
        Self { incoming, outgoing }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.incoming.len()
    }

    /// Returns the predecessors of a node in the underlying graph:
    /// the list this graph was built from.
    #[must_use]
    pub fn predecessors_of(&self, node: NodeId) -> &[NodeId] {
        &self.incoming[node.index()]
    }

    /// Returns the successors of a node in the underlying graph,
    /// derived from the given predecessor lists.
    #[must_use]
    pub fn successors_of(&self, node: NodeId) -> &[NodeId] {
        &self.outgoing[node.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_flow_graph_construction() {
        let graph =
            FlowGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.entry(), id(0));
        assert_eq!(graph.successors_of(id(0)), &[id(1), id(2)]);
        assert_eq!(graph.predecessors_of(id(3)), &[id(1), id(2)]);
        assert!(graph.successors_of(id(3)).is_empty());
        assert!(graph.predecessors_of(id(0)).is_empty());
    }

    #[test]
    fn test_flow_graph_rejects_out_of_range_edges() {
        let err = FlowGraph::from_adjacency(&[vec![1], vec![4]]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGraph {
                index: 1,
                target: 4,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_flow_graph_keeps_duplicates_and_self_loops() {
        let graph = FlowGraph::from_adjacency(&[vec![0, 1, 1], vec![]]).unwrap();
        assert_eq!(graph.successors_of(id(0)), &[id(0), id(1), id(1)]);
        assert_eq!(graph.predecessors_of(id(1)), &[id(0), id(0)]);
        assert_eq!(graph.predecessors_of(id(0)), &[id(0)]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = FlowGraph::from_adjacency(&[]).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.node_ids().count(), 0);
    }

    #[test]
    fn test_reversed_graph_orientations() {
        // underlying graph: 0 -> 1 -> 2, given as predecessors
        let rev =
            ReversedFlowGraph::from_adjacency(&[vec![], vec![0], vec![1]]).unwrap();

        assert_eq!(rev.predecessors_of(id(2)), &[id(1)]);
        assert_eq!(rev.successors_of(id(0)), &[id(1)]);
        assert_eq!(rev.successors_of(id(1)), &[id(2)]);
        assert!(rev.successors_of(id(2)).is_empty());
    }

    #[test]
    fn test_reversed_graph_validation() {
        let err = ReversedFlowGraph::from_adjacency(&[vec![7]]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGraph {
                index: 0,
                target: 7,
                node_count: 1
            }
        );
    }
}
