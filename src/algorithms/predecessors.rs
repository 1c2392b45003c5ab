//! Indirect predecessor sets.
//!
//! A node `u` is an *indirect predecessor* of `v` if some directed walk
//! of length at least 2 leads from `u` to `v`. Direct-only predecessors
//! are excluded, but a node that reaches itself around a cycle is an
//! indirect predecessor of itself.
//!
//! The computation runs Kosaraju's algorithm to contract the graph to
//! its condensation, propagates per-component predecessor sets as
//! [`BitSet`]s over the condensation in topological order, and expands
//! the component sets back to node lists. Within a strongly connected
//! component every member trivially reaches every other (and itself)
//! through the component's cycles, so all members share one result
//! list; only components that are a single node without a self-loop
//! need care, since reaching such a node in one step says nothing about
//! reaching it in two.
//!
//! Both DFS passes use explicit stacks.

use crate::{
    bitset::BitSet,
    graph::{NodeId, ReversedFlowGraph},
};

/// Marker for nodes not yet assigned to a component.
const UNASSIGNED: usize = usize::MAX;

/// Computes the indirect predecessor set of every node.
///
/// The input is a *reverse* adjacency list: `graph[v]` lists the
/// predecessors of `v`. The result for node `v` lists every node `u`
/// from which a directed walk of length >= 2 reaches `v`, grouped by
/// ascending strongly-connected-component discovery order and, within a
/// component, in input order. All nodes of one component share the same
/// list.
///
/// # Examples
///
/// ```
/// use flowdom::ReversedFlowGraph;
/// use flowdom::algorithms::indirect_predecessor_sets;
///
/// // chain 0 -> 1 -> 2 -> 3, given as predecessor lists
/// let rev = ReversedFlowGraph::from_adjacency(&[vec![], vec![0], vec![1], vec![2]])?;
/// let sets = indirect_predecessor_sets(&rev);
/// let raw: Vec<Vec<usize>> = sets
///     .iter()
///     .map(|row| row.iter().map(|n| n.index()).collect())
///     .collect();
/// // node 1 is only one step from 0; nodes 2 and 3 are further
/// assert_eq!(raw, vec![vec![], vec![], vec![0], vec![0, 1]]);
/// # Ok::<(), flowdom::Error>(())
/// ```
#[must_use]
pub fn indirect_predecessor_sets(graph: &ReversedFlowGraph) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let mut result: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    if n == 0 {
        return result;
    }

    // Kosaraju pass 1: post-order over the forward edges
    let mut visited = vec![false; n];
    let mut finish: Vec<NodeId> = Vec::with_capacity(n);
    for i in 0..n {
        if !visited[i] {
            post_order(graph, NodeId::new(i), &mut visited, &mut finish);
        }
    }

    // pass 2: sweep the finish stack backwards, labelling components
    // along the reverse edges; the label order is a topological order
    // of the condensation (predecessor components get smaller labels)
    let mut component = vec![UNASSIGNED; n];
    let mut component_count = 0;
    for &v in finish.iter().rev() {
        if component[v.index()] == UNASSIGNED {
            label_component(graph, v, component_count, &mut component);
            component_count += 1;
        }
    }

    // condensation: per-component members (in input order) and direct
    // predecessor components, deduplicated
    let mut members: Vec<Vec<NodeId>> = vec![Vec::new(); component_count];
    let mut pred_components: Vec<Vec<usize>> = vec![Vec::new(); component_count];
    for i in 0..n {
        let c = component[i];
        members[c].push(NodeId::new(i));
        for &p in graph.predecessors_of(NodeId::new(i)) {
            if component[p.index()] != c {
                pred_components[c].push(component[p.index()]);
            }
        }
    }
    for preds in &mut pred_components {
        preds.sort_unstable();
        preds.dedup();
    }

    // reaching sets over the condensation: every component that reaches
    // c, c itself included; predecessors carry smaller labels, so one
    // ascending sweep suffices
    let mut reaching: Vec<BitSet> = vec![BitSet::new(component_count); component_count];
    for c in 0..component_count {
        let (done, rest) = reaching.split_at_mut(c);
        let set = &mut rest[0];
        set.insert(c);
        for &p in &pred_components[c] {
            set.union_with(&done[p]);
        }
    }

    // a lone node without a self-loop cannot reach itself at all, and
    // its one-step predecessors only count when they reach it some
    // longer way; everything else keeps its full reaching set
    for c in 0..component_count {
        let lone = members[c].len() == 1 && {
            let v = members[c][0];
            !graph.predecessors_of(v).contains(&v)
        };

        let mut bits;
        if lone {
            bits = BitSet::new(component_count);
            for &p in &pred_components[c] {
                let mut reach_p = reaching[p].clone();
                if members[p].len() == 1 && {
                    let u = members[p][0];
                    !graph.predecessors_of(u).contains(&u)
                } {
                    reach_p.remove(p);
                }
                bits.union_with(&reach_p);
            }
        } else {
            bits = reaching[c].clone();
        }

        let mut expanded = Vec::new();
        for d in bits.ones() {
            expanded.extend_from_slice(&members[d]);
        }
        for &v in &members[c] {
            result[v.index()] = expanded.clone();
        }
    }

    result
}

/// Iterative post-order DFS over the forward edges, pushing each node
/// after all of its descendants.
fn post_order(
    graph: &ReversedFlowGraph,
    start: NodeId,
    visited: &mut [bool],
    finish: &mut Vec<NodeId>,
) {
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
    visited[start.index()] = true;
    while let Some(&mut (node, ref mut next)) = stack.last_mut() {
        let edges = graph.successors_of(node);
        if *next < edges.len() {
            let succ = edges[*next];
            *next += 1;
            if !visited[succ.index()] {
                visited[succ.index()] = true;
                stack.push((succ, 0));
            }
        } else {
            finish.push(node);
            stack.pop();
        }
    }
}

/// Flood-fills one strongly connected component along the reverse
/// edges.
fn label_component(
    graph: &ReversedFlowGraph,
    start: NodeId,
    label: usize,
    component: &mut [usize],
) {
    let mut stack = vec![start];
    component[start.index()] = label;
    while let Some(node) = stack.pop() {
        for &pred in graph.predecessors_of(node) {
            if component[pred.index()] == UNASSIGNED {
                component[pred.index()] = label;
                stack.push(pred);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip_indices(reversed: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let graph = ReversedFlowGraph::from_adjacency(reversed).unwrap();
        indirect_predecessor_sets(&graph)
            .iter()
            .map(|row| row.iter().map(|n| n.index()).collect())
            .collect()
    }

    #[test]
    fn test_empty_graph() {
        assert!(ip_indices(&[]).is_empty());
    }

    #[test]
    fn test_single_node() {
        assert_eq!(ip_indices(&[vec![]]), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_self_loop_reaches_itself() {
        assert_eq!(ip_indices(&[vec![0]]), vec![vec![0]]);
    }

    #[test]
    fn test_chain_excludes_direct_predecessors() {
        // 0 -> 1 -> 2 -> 3
        assert_eq!(
            ip_indices(&[vec![], vec![0], vec![1], vec![2]]),
            vec![vec![], vec![], vec![0], vec![0, 1]]
        );
    }

    #[test]
    fn test_direct_predecessor_kept_when_longer_walk_exists() {
        // 0 -> 1 and 0 -> 2 -> 1: node 0 reaches 1 both ways, node 2
        // only directly
        assert_eq!(
            ip_indices(&[vec![], vec![0, 2], vec![0]]),
            vec![vec![], vec![0], vec![]]
        );
    }

    #[test]
    fn test_cycle_members_reach_each_other() {
        // 3-cycle 0 -> 1 -> 2 -> 0
        assert_eq!(
            ip_indices(&[vec![2], vec![0], vec![1]]),
            vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]]
        );
    }

    #[test]
    fn test_cycle_with_tail() {
        // 0 -> 1 -> 2 -> 1, 2 -> 3: component {1, 2} feeds 3
        assert_eq!(
            ip_indices(&[vec![], vec![0, 2], vec![1], vec![2]]),
            vec![vec![], vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]]
        );
    }

    #[test]
    fn test_two_step_only_through_branches() {
        // 0 -> {1, 2}, {1, 2} -> 3: both branch nodes are direct-only
        // for 3, the root arrives through either branch
        assert_eq!(
            ip_indices(&[vec![], vec![0], vec![0], vec![1, 2]]),
            vec![vec![], vec![], vec![], vec![0]]
        );
    }

    #[test]
    fn test_disconnected_parts() {
        // 0 -> 1 and separately 2 -> 3 -> 2
        assert_eq!(
            ip_indices(&[vec![], vec![0], vec![3], vec![2]]),
            vec![vec![], vec![], vec![2, 3], vec![2, 3]]
        );
    }
}
