//! Depth-first traversal, cycle detection and topological ordering.
//!
//! Every routine exists twice: a recursive helper that reads like the textbook
//! algorithm, and an iterative one that keeps `(node, next adjacency position)`
//! frames on a heap-allocated stack. A frame resumes exactly where the recursive
//! call would have returned, so both produce the same pre-order, post-order and
//! cycle verdict. The iterative form is the default because the recursive one
//! needs call-stack depth equal to the longest explored path.

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{DiGraph, EdgeType, NodeKey, Recursion, Weight};
use fixedbitset::FixedBitSet;
use std::borrow::Borrow;
use std::hash::Hash;

type Adjacency = [Vec<(usize, Weight)>];

/// Node state during cycle detection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

impl<K: NodeKey, Ty: EdgeType> Graph<K, Ty> {
    /// Nodes reachable from `start` in depth-first pre-order.
    ///
    /// Neighbors are explored in the order their edges were added.
    pub fn dfs<Q>(&self, start: &Q) -> Result<Vec<&K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        self.dfs_with(start, Recursion::default())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count(), mode = %mode))]
    pub fn dfs_with<Q>(&self, start: &Q, mode: Recursion) -> Result<Vec<&K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + std::fmt::Debug + ?Sized,
    {
        let s = self.index_of(start)?;
        let mut visited = FixedBitSet::with_capacity(self.node_count());
        let mut order = Vec::new();
        match mode {
            Recursion::Iterative => preorder_iterative(self.adjacency(), s, &mut visited, &mut order),
            Recursion::Recursive => preorder_recursive(self.adjacency(), s, &mut visited, &mut order),
        }
        Ok(order.into_iter().map(|u| self.key(u)).collect())
    }
}

impl<K: NodeKey> DiGraph<K> {
    /// True when no directed cycle exists. A self-loop is a cycle.
    pub fn is_dag(&self) -> bool {
        self.is_dag_with(Recursion::default())
    }

    /// Three-colour DFS started from every unvisited node in insertion order. An
    /// edge into an in-progress node (one still on the DFS stack) closes a cycle.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.node_count(), edges = self.edge_count(), mode = %mode))]
    pub fn is_dag_with(&self, mode: Recursion) -> bool {
        let adjacency = self.adjacency();
        let mut color = vec![Color::Unvisited; self.node_count()];
        for u in 0..self.node_count() {
            if color[u] != Color::Unvisited {
                continue;
            }
            let cycle = match mode {
                Recursion::Iterative => has_cycle_iterative(adjacency, u, &mut color),
                Recursion::Recursive => has_cycle_recursive(adjacency, u, &mut color),
            };
            if cycle {
                tracing::debug!(from = ?self.key(u), "cycle found");
                return false;
            }
        }
        true
    }

    /// Nodes ordered so that every edge `u -> v` has `u` before `v`.
    ///
    /// Returns `None` when the graph has a cycle.
    pub fn topological_sort(&self) -> Option<Vec<&K>> {
        self.topological_sort_with(Recursion::default())
    }

    /// Reversed DFS finish order over all components, roots taken in insertion order.
    pub fn topological_sort_with(&self, mode: Recursion) -> Option<Vec<&K>> {
        if !self.is_dag_with(mode) {
            return None;
        }

        let adjacency = self.adjacency();
        let mut visited = FixedBitSet::with_capacity(self.node_count());
        let mut finished = Vec::with_capacity(self.node_count());
        for u in 0..self.node_count() {
            if visited.contains(u) {
                continue;
            }
            match mode {
                Recursion::Iterative => postorder_iterative(adjacency, u, &mut visited, &mut finished),
                Recursion::Recursive => postorder_recursive(adjacency, u, &mut visited, &mut finished),
            }
        }
        Some(finished.into_iter().rev().map(|u| self.key(u)).collect())
    }
}

pub(crate) fn preorder_recursive<L>(adjacency: &[L], u: usize, visited: &mut FixedBitSet, order: &mut Vec<usize>)
where
    L: AsRef<[(usize, Weight)]>,
{
    visited.insert(u);
    order.push(u);
    for &(v, _) in adjacency[u].as_ref() {
        if !visited.contains(v) {
            preorder_recursive(adjacency, v, visited, order);
        }
    }
}

pub(crate) fn preorder_iterative<L>(adjacency: &[L], s: usize, visited: &mut FixedBitSet, order: &mut Vec<usize>)
where
    L: AsRef<[(usize, Weight)]>,
{
    visited.insert(s);
    order.push(s);
    let mut stack = vec![(s, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        match adjacency[u].as_ref().get(next) {
            Some(&(v, _)) => {
                frame.1 += 1;
                if !visited.put(v) {
                    order.push(v);
                    stack.push((v, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}

fn postorder_recursive(adjacency: &Adjacency, u: usize, visited: &mut FixedBitSet, finished: &mut Vec<usize>) {
    visited.insert(u);
    for &(v, _) in &adjacency[u] {
        if !visited.contains(v) {
            postorder_recursive(adjacency, v, visited, finished);
        }
    }
    finished.push(u);
}

fn postorder_iterative(adjacency: &Adjacency, s: usize, visited: &mut FixedBitSet, finished: &mut Vec<usize>) {
    visited.insert(s);
    let mut stack = vec![(s, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        match adjacency[u].get(next) {
            Some(&(v, _)) => {
                frame.1 += 1;
                if !visited.put(v) {
                    stack.push((v, 0));
                }
            }
            None => {
                finished.push(u);
                stack.pop();
            }
        }
    }
}

/// Returns true if a back edge is reachable from `u`.
fn has_cycle_recursive(adjacency: &Adjacency, u: usize, color: &mut [Color]) -> bool {
    color[u] = Color::InProgress;
    for &(v, _) in &adjacency[u] {
        match color[v] {
            Color::InProgress => return true,
            Color::Unvisited => {
                if has_cycle_recursive(adjacency, v, color) {
                    return true;
                }
            }
            Color::Done => {}
        }
    }
    color[u] = Color::Done;
    false
}

fn has_cycle_iterative(adjacency: &Adjacency, s: usize, color: &mut [Color]) -> bool {
    color[s] = Color::InProgress;
    let mut stack = vec![(s, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        match adjacency[u].get(next) {
            Some(&(v, _)) => {
                frame.1 += 1;
                match color[v] {
                    Color::InProgress => return true,
                    Color::Unvisited => {
                        color[v] = Color::InProgress;
                        stack.push((v, 0));
                    }
                    Color::Done => {}
                }
            }
            None => {
                color[u] = Color::Done;
                stack.pop();
            }
        }
    }
    false
}
