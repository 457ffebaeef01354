//! Directed graph container APIs used by `trailmap-layout`.
//!
//! Nodes and edges are kept in insertion order so that every traversal the layout solver performs
//! is deterministic; id lookups go through side indexes. Labels are generic so the solver can hang
//! its own bookkeeping off nodes, edges, and the graph itself.

use rustc_hash::FxHashMap;

/// Identifies a directed edge by its endpoints. The container is not a multigraph: setting an
/// edge that already exists replaces its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    graph_label: G,
    default_node_label: Box<dyn Fn() -> N + Send + Sync>,
    default_edge_label: Box<dyn Fn() -> E + Send + Sync>,

    nodes: Vec<NodeEntry<N>>,
    node_index: FxHashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: FxHashMap<EdgeKey, usize>,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            default_node_label: Box::new(N::default),
            default_edge_label: Box::new(E::default),
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            edges: Vec::new(),
            edge_index: FxHashMap::default(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn set_default_node_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> N + Send + Sync + 'static,
    {
        self.default_node_label = Box::new(f);
        self
    }

    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Box::new(f);
        self
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        let label = (self.default_node_label)();
        self.set_node(id, label)
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&str, &N),
    {
        for n in &self.nodes {
            f(&n.id, &n.label);
        }
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in &mut self.nodes {
            f(&n.id, &mut n.label);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        let label = (self.default_edge_label)();
        self.set_edge_with_label(v, w, label)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let key = EdgeKey { v, w };
        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].label = label;
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            label,
        });
        self.edge_index.insert(key, idx);
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains_key(&EdgeKey::new(v, w))
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_index
            .get(&EdgeKey::new(v, w))
            .map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        self.edge_index
            .get(&EdgeKey::new(v, w))
            .copied()
            .map(move |idx| &mut self.edges[idx].label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge_index.get(key).map(|&idx| &self.edges[idx].label)
    }

    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> bool {
        let Some(idx) = self.edge_index.remove(key) else {
            return false;
        };
        self.edges.remove(idx);
        // Removal shifts everything after idx; rebuild the index rather than patching it.
        self.edge_index.clear();
        for (i, e) in self.edges.iter().enumerate() {
            self.edge_index.insert(e.key.clone(), i);
        }
        true
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.key.v == v)
            .map(|e| e.key.w.as_str())
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.key.w == v)
            .map(|e| e.key.v.as_str())
            .collect()
    }

    pub fn out_edges(&self, v: &str) -> Vec<EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.key.v == v)
            .map(|e| e.key.clone())
            .collect()
    }

    pub fn in_edges(&self, v: &str) -> Vec<EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.key.w == v)
            .map(|e| e.key.clone())
            .collect()
    }

    /// Nodes with no incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| e.key.w == n.id))
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Nodes with no outgoing edges, in insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| e.key.v == n.id))
            .map(|n| n.id.as_str())
            .collect()
    }
}

impl<N, E, G> std::fmt::Debug for Graph<N, E, G>
where
    N: Default + std::fmt::Debug + 'static,
    E: Default + std::fmt::Debug + 'static,
    G: Default + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("graph", &self.graph_label)
            .field("nodes", &self.nodes.iter().map(|n| &n.id).collect::<Vec<_>>())
            .field("edges", &self.edges.iter().map(|e| &e.key).collect::<Vec<_>>())
            .finish()
    }
}
