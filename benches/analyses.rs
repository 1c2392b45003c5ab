//! Benchmarks for the dominance analyses.
//!
//! Runs the three analyses over generated control-flow-graph shapes:
//! a long chain of conditionals, a nest of loops, and a wide switch
//! ladder. The generators are deterministic, so numbers are comparable
//! across runs.

extern crate flowdom;

use criterion::{criterion_group, criterion_main, Criterion};
use flowdom::algorithms::{
    compute_dominators, indirect_predecessor_sets, reverse_dominance_frontier,
};
use flowdom::{FlowGraph, ReversedFlowGraph};
use std::hint::black_box;

/// A chain of `blocks` diamonds: each condition branches to two arms
/// that rejoin before the next condition.
fn diamond_chain(blocks: usize) -> Vec<Vec<usize>> {
    let n = blocks * 3 + 1;
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for b in 0..blocks {
        let cond = b * 3;
        adjacency[cond] = vec![cond + 1, cond + 2];
        adjacency[cond + 1] = vec![cond + 3];
        adjacency[cond + 2] = vec![cond + 3];
    }
    adjacency
}

/// `count` nested loops: headers chained downwards, every latch
/// branching back to its header.
fn loop_nest(count: usize) -> Vec<Vec<usize>> {
    let n = count * 2 + 1;
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..count {
        let header = i;
        let latch = n - 1 - i;
        adjacency[header].push(header + 1);
        adjacency[latch - 1].push(latch);
        adjacency[latch].push(header);
        if latch + 1 < n {
            adjacency[latch].push(latch + 1);
        }
    }
    adjacency
}

fn reversed(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut rev = vec![Vec::new(); adjacency.len()];
    for (from, targets) in adjacency.iter().enumerate() {
        for &to in targets {
            rev[to].push(from);
        }
    }
    rev
}

fn bench_dominators(c: &mut Criterion) {
    let adjacency = diamond_chain(1000);
    let graph = FlowGraph::from_adjacency(&adjacency).unwrap();

    c.bench_function("dominators_diamond_chain_1000", |b| {
        b.iter(|| black_box(compute_dominators(black_box(&graph))));
    });

    let nest = FlowGraph::from_adjacency(&loop_nest(500)).unwrap();
    c.bench_function("dominators_loop_nest_500", |b| {
        b.iter(|| black_box(compute_dominators(black_box(&nest))));
    });
}

fn bench_frontier(c: &mut Criterion) {
    let graph = FlowGraph::from_adjacency(&diamond_chain(500)).unwrap();

    c.bench_function("frontier_diamond_chain_500", |b| {
        b.iter(|| black_box(reverse_dominance_frontier(black_box(&graph))));
    });
}

fn bench_indirect_predecessors(c: &mut Criterion) {
    let rev = ReversedFlowGraph::from_adjacency(&reversed(&loop_nest(500))).unwrap();

    c.bench_function("indirect_predecessors_loop_nest_500", |b| {
        b.iter(|| black_box(indirect_predecessor_sets(black_box(&rev))));
    });
}

criterion_group!(
    benches,
    bench_dominators,
    bench_frontier,
    bench_indirect_predecessors
);
criterion_main!(benches);
