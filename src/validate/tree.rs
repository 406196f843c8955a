//! Arena view of the entity tree.
//!
//! Entities are indexed into a petgraph graph under a synthetic document
//! root. Traversal uses an explicit stack, so depth is bounded only by memory.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::{Entity, EntityId};

pub struct DocumentTree<'a> {
    graph: DiGraph<Option<&'a Entity>, ()>,
    root: NodeIndex,
}

impl<'a> DocumentTree<'a> {
    pub fn build(roots: &'a [Entity]) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(None);

        // Siblings are pushed in reverse so they pop, and get indexed, in
        // document order.
        let mut stack: Vec<(NodeIndex, &'a Entity)> =
            roots.iter().rev().map(|e| (root, e)).collect();
        while let Some((parent, entity)) = stack.pop() {
            let idx = graph.add_node(Some(entity));
            graph.add_edge(parent, idx, ());
            stack.extend(entity.children.iter().rev().map(|c| (idx, c)));
        }

        DocumentTree { graph, root }
    }

    /// Every entity in document order (pre-order, children in order).
    pub fn pre_order(&self) -> Vec<&'a Entity> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            if let Some(entity) = self.graph[idx] {
                out.push(entity);
            }
            stack.extend(self.children_of(idx).into_iter().rev());
        }
        out
    }

    pub fn find(&self, id: &EntityId) -> Option<&'a Entity> {
        self.graph
            .node_weights()
            .flatten()
            .copied()
            .find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn children_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        // Node indices follow insertion order, which is document order.
        children.sort_unstable();
        children
    }
}
