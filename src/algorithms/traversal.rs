//! Depth-first graph traversal.
//!
//! Provides an iterative (non-recursive) pre-order DFS iterator. The
//! explicit stack keeps deep graphs from exhausting the call stack, and
//! successors are expanded in adjacency-list order so the visitation
//! sequence matches what a recursive traversal would produce.

use crate::graph::{NodeId, Successors};

/// Depth-first search iterator over graph nodes.
///
/// Visits each node reachable from the start exactly once, in pre-order,
/// expanding successors in adjacency-list order.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // push unvisited successors in reverse so the first successor
        // is expanded first
        let successors: Vec<NodeId> = self.graph.successors(node).collect();
        for &succ in successors.iter().rev() {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.stack.push(succ);
            }
        }

        Some(node)
    }
}

/// Returns a pre-order depth-first iterator starting from `start`.
///
/// Nodes not reachable from `start` are not visited; a `start` outside
/// the graph yields an empty iterator.
///
/// # Examples
///
/// ```
/// use flowdom::{FlowGraph, NodeId};
/// use flowdom::algorithms::dfs;
///
/// let graph = FlowGraph::from_adjacency(&[vec![1, 2], vec![3], vec![], vec![]])?;
/// let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
/// assert_eq!(order.iter().map(|n| n.index()).collect::<Vec<_>>(), vec![0, 1, 3, 2]);
/// # Ok::<(), flowdom::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FlowGraph;

    fn indices<G: Successors>(graph: &G, start: usize) -> Vec<usize> {
        dfs(graph, NodeId::new(start)).map(NodeId::index).collect()
    }

    #[test]
    fn test_dfs_visits_first_successor_first() {
        let graph = FlowGraph::from_adjacency(&[
            vec![1, 4],
            vec![2],
            vec![3],
            vec![],
            vec![],
        ])
        .unwrap();
        assert_eq!(indices(&graph, 0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_skips_unreachable_and_handles_cycles() {
        let graph = FlowGraph::from_adjacency(&[
            vec![1],
            vec![2],
            vec![0],
            vec![0],
        ])
        .unwrap();
        assert_eq!(indices(&graph, 0), vec![0, 1, 2]);
    }

    #[test]
    fn test_dfs_from_out_of_range_start() {
        let graph = FlowGraph::from_adjacency(&[vec![]]).unwrap();
        assert!(dfs(&graph, NodeId::new(9)).next().is_none());
    }
}
