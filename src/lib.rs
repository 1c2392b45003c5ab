// Copyright 2025-2026 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # flowdom
//!
//! Dominance analyses for control-flow graphs: dominator trees,
//! dominance frontiers, and indirect predecessor sets, as used by
//! SSA-form intermediate-representation transforms.
//!
//! # Architecture
//!
//! The library works on 0-indexed directed graphs whose entry is node 0
//! and is organized into three layers:
//!
//! - [`graph`] - validated adjacency-list graphs ([`FlowGraph`],
//!   [`ReversedFlowGraph`]) and the abstraction traits the algorithms
//!   are generic over
//! - [`bitset`] - the packed bit vector backing the set-heavy analyses
//! - [`algorithms`] - the analyses themselves: Lengauer-Tarjan
//!   dominator trees, bitset-based reverse dominance frontiers, and
//!   SCC-condensation indirect predecessor sets
//!
//! Everything is a pure function: graphs are built once, analyses
//! allocate their own working state and return owned results, and
//! distinct inputs can be analyzed from distinct threads without any
//! coordination.
//!
//! # Usage
//!
//! ```
//! use flowdom::prelude::*;
//!
//! // a diamond with a loop on one shoulder:
//! //   0 -> {1, 2},  1 -> 3,  2 -> {2, 3}
//! let graph = FlowGraph::from_adjacency(&[
//!     vec![1, 2],
//!     vec![3],
//!     vec![2, 3],
//!     vec![],
//! ])?;
//!
//! let tree = compute_dominators(&graph);
//! assert_eq!(tree.immediate_dominator(NodeId::new(3)), Some(NodeId::new(0)));
//!
//! let rdf = reverse_dominance_frontier(&graph);
//! // the join node 3 is in the frontier of both shoulders
//! assert_eq!(rdf[3], vec![NodeId::new(1), NodeId::new(2)]);
//! # Ok::<(), flowdom::Error>(())
//! ```
//!
//! Indirect predecessor sets take the opposite orientation, a list of
//! predecessors per node:
//!
//! ```
//! use flowdom::prelude::*;
//!
//! // chain 0 -> 1 -> 2, as predecessor lists
//! let rev = ReversedFlowGraph::from_adjacency(&[vec![], vec![0], vec![1]])?;
//! let sets = indirect_predecessor_sets(&rev);
//! assert_eq!(sets[2], vec![NodeId::new(0)]);
//! # Ok::<(), flowdom::Error>(())
//! ```
//!
//! # Error Handling
//!
//! The only fallible step is graph construction: adjacency lists are
//! validated up front and [`Error::InvalidGraph`] is returned before
//! any analysis runs. Unreachable nodes, self-loops, and parallel
//! edges are not errors; the analyses tolerate all three.

pub mod algorithms;
pub mod bitset;
pub mod graph;
pub mod prelude;

mod error;

pub use bitset::BitSet;
pub use error::Error;
pub use graph::{FlowGraph, NodeId, ReversedFlowGraph};

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
