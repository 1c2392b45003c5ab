use thiserror::Error;

/// The error type covering every failure this library can report.
///
/// All failures are structural and detected before any analysis runs:
/// either the input adjacency list is malformed, or a bit-string
/// constructor received a character that is not a bit. There are no
/// recoverable internal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An adjacency list references a node index outside the graph.
    ///
    /// Reported by [`FlowGraph::from_adjacency`](crate::FlowGraph::from_adjacency)
    /// and [`ReversedFlowGraph::from_adjacency`](crate::ReversedFlowGraph::from_adjacency)
    /// when an edge references an index `>= node_count`.
    #[error("invalid graph: adjacency list {index} references node {target} outside 0..{node_count}")]
    InvalidGraph {
        /// Index of the adjacency list holding the offending entry.
        index: usize,
        /// The out-of-range node reference.
        target: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// A bit-string contained a character other than `'0'` or `'1'`.
    ///
    /// Reported by the [`FromStr`](std::str::FromStr) implementation of
    /// [`BitSet`](crate::BitSet).
    #[error("invalid bit string: unexpected character {found:?} at position {position}")]
    InvalidBitString {
        /// The offending character.
        found: char,
        /// Its position within the string.
        position: usize,
    },
}
