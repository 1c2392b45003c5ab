//! Dominator tree computation using the Lengauer-Tarjan algorithm.
//!
//! A node `d` **dominates** a node `n` if every path from the entry node
//! to `n` passes through `d`. The **immediate dominator** of `n` is the
//! unique strict dominator of `n` closest to it; making each node's
//! immediate dominator its parent yields the dominator tree, rooted at
//! the entry. The tree drives SSA construction, loop analysis, and the
//! dominance-frontier computation in
//! [`frontier`](crate::algorithms::frontier).
//!
//! This implementation runs Lengauer-Tarjan with semi-dominators and a
//! path-compressing link-eval forest, achieving O(V α(V)) time. DFS
//! numbers are 1-based internally so 0 can flag "unreached"; nodes not
//! reachable from the entry are excluded from the computation and
//! reported with no immediate dominator. All traversals use explicit
//! stacks, so deep graphs cannot overflow the call stack.

use crate::{
    algorithms::traversal::dfs,
    graph::{GraphBase, NodeId, Predecessors, RootedGraph, Successors},
};

/// Result of dominator tree computation.
///
/// Holds the immediate-dominator table and the DFS order of the reached
/// nodes, and answers dominance queries against them.
///
/// # Examples
///
/// ```
/// use flowdom::{FlowGraph, NodeId};
/// use flowdom::algorithms::compute_dominators;
///
/// // diamond: 0 -> {1, 2} -> 3
/// let graph = FlowGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]])?;
/// let tree = compute_dominators(&graph);
///
/// // the join point is dominated by the entry, not by either branch
/// assert_eq!(tree.immediate_dominator(NodeId::new(3)), Some(NodeId::new(0)));
/// assert!(tree.dominates(NodeId::new(0), NodeId::new(3)));
/// assert!(!tree.strictly_dominates(NodeId::new(1), NodeId::new(3)));
/// # Ok::<(), flowdom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DominatorTree {
    /// The entry (root) node of the dominator tree.
    entry: NodeId,
    /// Immediate dominator per node; `None` for the entry and for nodes
    /// unreachable from it.
    idom: Vec<Option<NodeId>>,
    /// Reached nodes in DFS visitation order from the entry.
    dfs_order: Vec<NodeId>,
}

impl DominatorTree {
    /// Returns the entry (root) node of the dominator tree.
    #[inline]
    #[must_use]
    pub fn entry(&self) -> NodeId {
        self.entry
    }

    /// Returns the number of nodes in the underlying graph.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.idom.len()
    }

    /// Returns the immediate dominator of a node.
    ///
    /// `None` for the entry node and for nodes unreachable from the
    /// entry.
    ///
    /// # Panics
    ///
    /// Panics if the node index is out of bounds.
    #[inline]
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        self.idom[node.index()]
    }

    /// Returns the full immediate-dominator table, indexed by node.
    #[must_use]
    pub fn immediate_dominators(&self) -> &[Option<NodeId>] {
        &self.idom
    }

    /// Returns the reached nodes in DFS visitation order from the
    /// entry. Its length is the number of reached nodes, which can be
    /// less than [`node_count`](Self::node_count).
    #[must_use]
    pub fn dfs_order(&self) -> &[NodeId] {
        &self.dfs_order
    }

    /// Returns `true` if the node is reachable from the entry.
    ///
    /// # Panics
    ///
    /// Panics if the node index is out of bounds.
    #[must_use]
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.idom[node.index()].is_some() || (node == self.entry && !self.dfs_order.is_empty())
    }

    /// Checks whether `a` dominates `b`. A node dominates itself;
    /// unreached nodes dominate nothing and are dominated by nothing.
    ///
    /// Walks the dominator tree upwards from `b`, so the cost is the
    /// depth of `b`.
    #[must_use]
    pub fn dominates(&self, a: NodeId, b: NodeId) -> bool {
        if !self.is_reached(a) || !self.is_reached(b) {
            return false;
        }
        if a == b {
            return true;
        }
        let mut current = self.idom[b.index()];
        while let Some(dominator) = current {
            if dominator == a {
                return true;
            }
            current = self.idom[dominator.index()];
        }
        false
    }

    /// Checks whether `a` strictly dominates `b` (dominates it and is
    /// not equal to it).
    #[inline]
    #[must_use]
    pub fn strictly_dominates(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns, for every node, the size of its dominator-tree subtree:
    /// the number of nodes it dominates, itself included. Unreached
    /// nodes have count 0.
    ///
    /// Computed by bottom-up accumulation over reverse DFS order.
    #[must_use]
    pub fn dominated_node_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.idom.len()];
        for &w in self.dfs_order.iter().skip(1).rev() {
            counts[w.index()] += 1;
            if let Some(parent) = self.idom[w.index()] {
                counts[parent.index()] += counts[w.index()];
            }
        }
        if !self.dfs_order.is_empty() {
            counts[self.entry.index()] += 1;
        }
        counts
    }

    /// Returns the nodes in DFS pre-order over the dominator tree
    /// itself, children visited in ascending node order. Unreached
    /// nodes do not appear.
    #[must_use]
    pub fn tree_dfs_order(&self) -> Vec<NodeId> {
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); self.idom.len()];
        for (index, dominator) in self.idom.iter().enumerate() {
            if let Some(parent) = dominator {
                children[parent.index()].push(NodeId::new(index));
            }
        }
        if self.dfs_order.is_empty() {
            return Vec::new();
        }
        let tree = DominatorTreeEdges { children };
        dfs(&tree, self.entry).collect()
    }
}

/// Successor view of the dominator tree, for traversing it as a graph.
struct DominatorTreeEdges {
    children: Vec<Vec<NodeId>>,
}

impl GraphBase for DominatorTreeEdges {
    fn node_count(&self) -> usize {
        self.children.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.children.len()).map(NodeId::new)
    }
}

impl Successors for DominatorTreeEdges {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.children[node.index()].iter().copied()
    }
}

/// Computes the dominator tree of a rooted graph.
///
/// Equivalent to [`compute_dominators_from`] with the graph's own entry
/// node.
#[must_use]
pub fn compute_dominators<G>(graph: &G) -> DominatorTree
where
    G: RootedGraph,
{
    compute_dominators_from(graph, graph.entry())
}

/// Computes the dominator tree of a graph from the given entry node
/// using the Lengauer-Tarjan algorithm.
///
/// Nodes unreachable from `entry` are tolerated: they receive no
/// immediate dominator and are absent from the DFS order. Self-loops
/// and parallel edges are tolerated as well.
///
/// # Panics
///
/// Panics if `entry` is out of bounds for a non-empty graph.
#[must_use]
pub fn compute_dominators_from<G>(graph: &G, entry: NodeId) -> DominatorTree
where
    G: Successors + Predecessors,
{
    let node_count = graph.node_count();
    if node_count == 0 {
        return DominatorTree {
            entry,
            idom: Vec::new(),
            dfs_order: Vec::new(),
        };
    }

    let mut lt = LengauerTarjan::new(node_count);
    lt.run(graph, entry);

    let mut idom = vec![None; node_count];
    for &w in lt.vertex.iter().skip(1) {
        idom[w.index()] = Some(lt.idom[w.index()]);
    }

    DominatorTree {
        entry,
        idom,
        dfs_order: lt.vertex,
    }
}

/// Working state of the Lengauer-Tarjan algorithm.
///
/// All arrays are indexed by node; DFS numbers are 1-based so that 0
/// marks a node the DFS never reached.
struct LengauerTarjan {
    /// DFS number per node, 0 if unreached.
    dfnum: Vec<usize>,
    /// `vertex[k]` is the node with DFS number `k + 1`.
    vertex: Vec<NodeId>,
    /// DFS-tree parent, meaningful for reached non-entry nodes.
    parent: Vec<NodeId>,
    /// Semi-dominator, initialized to the node itself.
    semi: Vec<NodeId>,
    /// Immediate dominator, filled during bucket processing.
    idom: Vec<NodeId>,
    /// Link-eval forest: parent pointer, self when the node is a root.
    dsu: Vec<NodeId>,
    /// Vertex with minimal `dfnum[semi[..]]` on the forest path to the
    /// root, maintained under path compression.
    best: Vec<NodeId>,
    /// `bucket[w]` holds the nodes whose semi-dominator is `w`.
    bucket: Vec<Vec<NodeId>>,
    /// Scratch for the iterative path compression in `eval`.
    path: Vec<NodeId>,
}

impl LengauerTarjan {
    fn new(n: usize) -> Self {
        Self {
            dfnum: vec![0; n],
            vertex: Vec::with_capacity(n),
            parent: (0..n).map(NodeId::new).collect(),
            semi: (0..n).map(NodeId::new).collect(),
            idom: (0..n).map(NodeId::new).collect(),
            dsu: (0..n).map(NodeId::new).collect(),
            best: (0..n).map(NodeId::new).collect(),
            bucket: vec![Vec::new(); n],
            path: Vec::new(),
        }
    }

    fn run<G: Successors + Predecessors>(&mut self, graph: &G, entry: NodeId) {
        self.dfs(graph, entry);
        let reached = self.vertex.len();

        // process nodes in reverse DFS order, down to DFS number 2
        for k in (1..reached).rev() {
            let w = self.vertex[k];

            // semi-dominator of w: minimum over evaluated predecessors
            for v in graph.predecessors(w) {
                if self.dfnum[v.index()] == 0 {
                    continue;
                }
                let u = self.eval(v);
                if self.semi_dfnum(u) < self.semi_dfnum(w) {
                    self.semi[w.index()] = self.semi[u.index()];
                }
            }

            // link w into the forest under its DFS parent
            let p = self.parent[w.index()];
            self.dsu[w.index()] = p;
            let s = self.semi[w.index()];
            self.bucket[s.index()].push(w);

            // decide idoms deferred on p's bucket
            for v in std::mem::take(&mut self.bucket[p.index()]) {
                let u = self.eval(v);
                self.idom[v.index()] = if self.semi[u.index()] == p { p } else { u };
            }
        }

        // resolve deferred idoms in DFS order
        for k in 1..reached {
            let w = self.vertex[k];
            if self.idom[w.index()] != self.semi[w.index()] {
                self.idom[w.index()] = self.idom[self.idom[w.index()].index()];
            }
        }
    }

    /// DFS number lookup for the semi-dominator of a node's `best`
    /// comparisons.
    #[inline]
    fn semi_dfnum(&self, v: NodeId) -> usize {
        self.dfnum[self.semi[v.index()].index()]
    }

    /// Iterative DFS assigning 1-based DFS numbers and the DFS-tree
    /// parents. Successors are expanded in adjacency order, so the
    /// numbering matches a recursive traversal.
    fn dfs<G: Successors>(&mut self, graph: &G, entry: NodeId) {
        let mut stack = vec![(entry, entry)];
        while let Some((node, parent)) = stack.pop() {
            if self.dfnum[node.index()] != 0 {
                continue;
            }
            self.parent[node.index()] = parent;
            self.vertex.push(node);
            self.dfnum[node.index()] = self.vertex.len();

            let successors: Vec<NodeId> = graph.successors(node).collect();
            for &succ in successors.iter().rev() {
                if self.dfnum[succ.index()] == 0 {
                    stack.push((succ, node));
                }
            }
        }
    }

    /// Evaluates `v` in the link-eval forest: path-compresses `v`'s
    /// path to its root and returns the vertex with minimal
    /// `dfnum[semi[..]]` recorded along it.
    fn eval(&mut self, v: NodeId) -> NodeId {
        let mut current = v;
        while self.dsu[current.index()] != current {
            self.path.push(current);
            current = self.dsu[current.index()];
        }
        let root = current;

        // replay the recursion from the node nearest the root back down
        // to v, so each node sees its (already updated) old parent
        for i in (0..self.path.len()).rev() {
            let u = self.path[i];
            let old_parent = if i + 1 < self.path.len() {
                self.path[i + 1]
            } else {
                root
            };
            if self.semi_dfnum(self.best[old_parent.index()]) < self.semi_dfnum(self.best[u.index()])
            {
                self.best[u.index()] = self.best[old_parent.index()];
            }
            self.dsu[u.index()] = root;
        }
        self.path.clear();

        self.best[v.index()]
    }
}
