//! Trait definitions for graph abstractions.
//!
//! These traits let the analyses work against any graph representation
//! that can answer adjacency queries, not just the concrete
//! [`FlowGraph`](crate::FlowGraph) type. The hierarchy is minimal and
//! composable:
//!
//! - [`GraphBase`] - node count and node iteration
//! - [`Successors`] - forward edge traversal
//! - [`Predecessors`] - backward edge traversal
//! - [`RootedGraph`] - graphs with a designated entry node
//!
//! All adjacency queries return iterators rather than collections, so
//! implementations can traverse lazily without allocating.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers, by ascending index.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`.
    /// Duplicate edges yield duplicate entries.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of the given node.
    ///
    /// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
    /// Duplicate edges yield duplicate entries.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs with a designated entry (root) node.
///
/// The entry node is the starting point for forward traversals and the
/// root of the dominator tree. In a control flow graph this is the first
/// basic block of a function.
pub trait RootedGraph: Successors + Predecessors {
    /// Returns the entry node of the graph.
    fn entry(&self) -> NodeId;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal edge-list graph for exercising the traits directly.
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == node)
                .map(|(_, dst)| *dst)
        }
    }

    impl Predecessors for TestGraph {
        fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(_, dst)| *dst == node)
                .map(|(src, _)| *src)
        }
    }

    impl RootedGraph for TestGraph {
        fn entry(&self) -> NodeId {
            NodeId::new(0)
        }
    }

    #[test]
    fn test_adjacency_queries() {
        let graph = TestGraph {
            node_count: 4,
            edges: vec![
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(0), NodeId::new(2)),
                (NodeId::new(1), NodeId::new(3)),
                (NodeId::new(2), NodeId::new(3)),
            ],
        };

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.node_ids().count(), 4);
        assert_eq!(graph.entry(), NodeId::new(0));

        let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
        assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2)]);

        let pred: Vec<NodeId> = graph.predecessors(NodeId::new(3)).collect();
        assert_eq!(pred, vec![NodeId::new(1), NodeId::new(2)]);

        assert!(graph.successors(NodeId::new(3)).next().is_none());
        assert!(graph.predecessors(NodeId::new(0)).next().is_none());
    }

    #[test]
    fn test_analyses_accept_custom_graphs() {
        // a diamond expressed through the traits alone
        let graph = TestGraph {
            node_count: 4,
            edges: vec![
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(0), NodeId::new(2)),
                (NodeId::new(1), NodeId::new(3)),
                (NodeId::new(2), NodeId::new(3)),
            ],
        };

        let tree = crate::algorithms::compute_dominators(&graph);
        assert_eq!(tree.immediate_dominator(NodeId::new(3)), Some(NodeId::new(0)));
    }
}
