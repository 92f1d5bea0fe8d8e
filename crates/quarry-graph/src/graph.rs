//! The adjacency-list graph and its traversals.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::error::GraphError;

/// A weighted graph over insertion-ordered adjacency maps.
///
/// Vertices are any `Clone + Eq + Hash + Debug` type. Undirected graphs
/// mirror every edge; weights must be non-negative (enforced at
/// [`add_edge`](Graph::add_edge), which keeps Dijkstra correct by
/// construction).
///
/// Iteration order everywhere — `vertices`, `neighbors`, traversals — is
/// the order vertices and edges were first inserted, so results are
/// deterministic for a given construction sequence.
///
/// # Example
///
/// ```
/// use quarry_graph::Graph;
///
/// let mut g = Graph::undirected();
/// g.add_edge("A", "B", 2.0)?;
/// g.add_edge("A", "C", 1.0)?;
/// assert_eq!(g.bfs(&"A")?, vec!["A", "B", "C"]);
/// # Ok::<(), quarry_graph::GraphError>(())
/// ```
pub struct Graph<V> {
    directed: bool,
    adjacency: IndexMap<V, IndexMap<V, f64>>,
}

impl<V: Clone + Eq + Hash + fmt::Debug> Graph<V> {
    fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: IndexMap::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    ///
    /// [`GraphError::NegativeWeight`] on the first invalid weight.
    pub fn from_edges(
        directed: bool,
        edges: impl IntoIterator<Item = (V, V, f64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(directed);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Ensure `v` exists, with no incident edges if new.
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// Add an edge from `u` to `v` (and `v` to `u` when undirected).
    ///
    /// Both endpoints are created if absent. Re-adding an edge replaces
    /// its weight.
    ///
    /// # Errors
    ///
    /// [`GraphError::NegativeWeight`] unless `weight >= 0` (NaN is
    /// rejected too).
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) -> Result<(), GraphError> {
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        self.adjacency[&u].insert(v.clone(), weight);
        if !self.directed {
            self.adjacency[&v].insert(u, weight);
        }
        Ok(())
    }

    /// Remove the edge from `u` to `v` (both directions when undirected).
    ///
    /// Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        if let Some(neighbors) = self.adjacency.get_mut(u) {
            neighbors.shift_remove(v);
        }
        if !self.directed {
            if let Some(neighbors) = self.adjacency.get_mut(v) {
                neighbors.shift_remove(u);
            }
        }
    }

    /// Remove `v` and every edge incident to it.
    pub fn remove_vertex(&mut self, v: &V) {
        self.adjacency.shift_remove(v);
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(v);
        }
    }

    /// Whether `v` is in the graph.
    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges (each undirected edge counted once).
    pub fn edge_count(&self) -> usize {
        let arcs: usize = self.adjacency.values().map(IndexMap::len).sum();
        if self.directed {
            arcs
        } else {
            // Every undirected edge is stored as two arcs, except
            // self-loops, which are stored once.
            let loops = self
                .adjacency
                .iter()
                .filter(|(v, neighbors)| neighbors.contains_key(*v))
                .count();
            (arcs - loops) / 2 + loops
        }
    }

    /// The vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// The neighbours of `v` and their edge weights, in insertion order.
    ///
    /// `None` when `v` is not in the graph.
    pub fn neighbors(&self, v: &V) -> Option<impl Iterator<Item = (&V, f64)>> {
        self.adjacency
            .get(v)
            .map(|neighbors| neighbors.iter().map(|(n, &w)| (n, w)))
    }

    /// Every edge as a `(u, v, weight)` triple.
    ///
    /// For undirected graphs each edge appears once, oriented from the
    /// earlier-inserted endpoint.
    pub fn edges(&self) -> Vec<(V, V, f64)> {
        let mut out = Vec::new();
        for (ui, (u, neighbors)) in self.adjacency.iter().enumerate() {
            for (v, &w) in neighbors {
                if self.directed {
                    out.push((u.clone(), v.clone(), w));
                } else {
                    let vi = self
                        .adjacency
                        .get_index_of(v)
                        .expect("neighbor is always a vertex");
                    if ui <= vi {
                        out.push((u.clone(), v.clone(), w));
                    }
                }
            }
        }
        out
    }

    /// Breadth-first traversal from `start`, in visit order.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] when `start` is not in the graph.
    pub fn bfs(&self, start: &V) -> Result<Vec<V>, GraphError> {
        let _ = self.require(start)?;
        let mut visited: IndexSet<&V> = IndexSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            order.push(u.clone());
            for v in self.adjacency[u].keys() {
                if visited.insert(v) {
                    queue.push_back(v);
                }
            }
        }
        Ok(order)
    }

    /// Depth-first preorder traversal from `start`.
    ///
    /// Matches the order of the recursive formulation: a vertex is
    /// visited, then each unvisited neighbour is explored to exhaustion
    /// before the next.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] when `start` is not in the graph.
    pub fn dfs(&self, start: &V) -> Result<Vec<V>, GraphError> {
        let _ = self.require(start)?;
        let mut visited: IndexSet<&V> = IndexSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(u) = stack.pop() {
            if !visited.insert(u) {
                continue;
            }
            order.push(u.clone());
            // Reversed so the first-inserted neighbour is explored first.
            for v in self.adjacency[u].keys().rev() {
                if !visited.contains(v) {
                    stack.push(v);
                }
            }
        }
        Ok(order)
    }

    /// Topological order via Kahn's algorithm.
    ///
    /// # Errors
    ///
    /// [`GraphError::Undirected`] on an undirected graph;
    /// [`GraphError::Cycle`] when a cycle prevents a complete order.
    pub fn topological_sort(&self) -> Result<Vec<V>, GraphError> {
        if !self.directed {
            return Err(GraphError::Undirected);
        }

        let mut indegree: IndexMap<&V, usize> =
            self.adjacency.keys().map(|v| (v, 0)).collect();
        for neighbors in self.adjacency.values() {
            for v in neighbors.keys() {
                *indegree.get_mut(v).expect("neighbor is always a vertex") += 1;
            }
        }

        let mut queue: VecDeque<&V> = indegree
            .iter()
            .filter(|(_, &d)| d == 0)
            .map(|(&v, _)| v)
            .collect();
        let mut order = Vec::new();

        while let Some(u) = queue.pop_front() {
            order.push(u.clone());
            for v in self.adjacency[u].keys() {
                let d = indegree.get_mut(v).expect("neighbor is always a vertex");
                *d -= 1;
                if *d == 0 {
                    queue.push_back(v);
                }
            }
        }

        if order.len() != self.adjacency.len() {
            return Err(GraphError::Cycle);
        }
        Ok(order)
    }

    /// Resolve `v` or fail with [`GraphError::UnknownVertex`].
    pub(crate) fn require(&self, v: &V) -> Result<&V, GraphError> {
        self.adjacency
            .get_key_value(v)
            .map(|(k, _)| k)
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: format!("{v:?}"),
            })
    }

    /// Adjacency access for sibling modules.
    pub(crate) fn adjacency(&self) -> &IndexMap<V, IndexMap<V, f64>> {
        &self.adjacency
    }
}

impl<V: Clone + Eq + Hash + fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "DiGraph" } else { "Graph" };
        write!(
            f,
            "<{kind} | V={} E={}>",
            self.vertex_count(),
            self.edge_count()
        )
    }
}
