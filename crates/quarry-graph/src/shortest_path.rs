//! Dijkstra single-source shortest paths.
//!
//! Uses the [`quarry_heap`] min-heap with lazy deletion: a vertex may be
//! pushed several times as its tentative distance improves, and stale
//! entries are skipped on pop by comparing against the settled distance.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use quarry_heap::MinHeap;

use crate::error::GraphError;
use crate::graph::Graph;

/// Path cost ordered by `f64::total_cmp`.
///
/// Only finite, non-negative sums enter the heap — edge weights are
/// validated at insertion — so the total order is the usual numeric one.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Distances and predecessors from one Dijkstra run.
///
/// Unreachable vertices report `f64::INFINITY` distance and have no path.
#[derive(Debug)]
pub struct ShortestPaths<V> {
    source: V,
    distances: IndexMap<V, f64>,
    predecessors: IndexMap<V, Option<V>>,
}

impl<V: Clone + Eq + Hash> ShortestPaths<V> {
    /// The source vertex the run started from.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest distance from the source to `v`.
    ///
    /// `f64::INFINITY` when unreachable; `None` when `v` was not in the
    /// graph at the time of the run.
    pub fn distance(&self, v: &V) -> Option<f64> {
        self.distances.get(v).copied()
    }

    /// Whether `v` is reachable from the source.
    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    /// The predecessor of `v` on a shortest path, if any.
    ///
    /// The source and unreachable vertices have none.
    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.predecessors.get(v).and_then(|p| p.as_ref())
    }

    /// The shortest path from the source to `target`, inclusive.
    ///
    /// `None` when `target` is unknown or unreachable; the path to the
    /// source itself is `[source]`.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let distance = *self.distances.get(target)?;
        if distance.is_infinite() {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(Some(prev)) = self.predecessors.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<V: Clone + Eq + Hash + fmt::Debug> Graph<V> {
    /// Single-source shortest paths from `start`.
    ///
    /// Edge weights are non-negative by construction, so the classic
    /// settle-the-minimum argument applies.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] when `start` is not in the graph.
    pub fn dijkstra(&self, start: &V) -> Result<ShortestPaths<V>, GraphError> {
        let source = self.require(start)?.clone();

        let mut distances: IndexMap<V, f64> = self
            .adjacency()
            .keys()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        let mut predecessors: IndexMap<V, Option<V>> = self
            .adjacency()
            .keys()
            .map(|v| (v.clone(), None))
            .collect();
        distances.insert(source.clone(), 0.0);

        let mut heap = MinHeap::new();
        heap.push(Cost(0.0), source.clone());

        while let Some((Cost(d), u)) = heap.pop() {
            if d > distances[&u] {
                // Stale entry: u was settled at a smaller distance.
                continue;
            }
            for (v, w) in &self.adjacency()[&u] {
                let next = d + w;
                if next < distances[v] {
                    distances.insert(v.clone(), next);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    heap.push(Cost(next), v.clone());
                }
            }
        }

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }
}
