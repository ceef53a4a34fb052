//! The graph store: single owner of the node and edge collections and the
//! only mutation surface. Every operation is atomic per call — failures
//! leave the collections untouched.

use crate::catalog::{BusType, NodeKind};
use crate::error::{GraphError, Result};
use crate::export::json::ProjectImport;
use crate::model::{AttrMap, CommEdge, ComponentNode, GraphSnapshot, Position};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

/// Authoritative node/edge collections for one edit session.
///
/// Synchronous and single-threaded by design: read-side components never see
/// the live store, only [`GraphStore::snapshot`] copies.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<ComponentNode>,
    edges: Vec<CommEdge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing snapshot, enforcing referential
    /// integrity like any other bulk load.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self> {
        let mut store = Self::new();
        store.replace_all(snapshot.nodes, snapshot.edges)?;
        Ok(store)
    }

    // ── Node operations ──

    /// Add a node of the given kind, returning its generated id.
    ///
    /// Seeds `label`, `hwId`, and `swVersion` defaults; `initial` attributes
    /// override them. Position defaults to the origin — placement is the
    /// caller's concern.
    pub fn add_node(&mut self, kind: NodeKind, initial: AttrMap) -> String {
        let id = format!("{}-{}", kind, Uuid::new_v4());
        let mut attrs = AttrMap::new();
        attrs.insert("label".into(), format!("New {}", kind).into());
        attrs.insert("hwId".into(), format!("HW-{}", &id[id.len() - 12..]).into());
        attrs.insert("swVersion".into(), "v1.0.0".into());
        attrs.extend(initial);

        debug!(id = %id, kind = %kind, "node added");
        self.nodes.push(ComponentNode {
            id: id.clone(),
            kind,
            position: Position::default(),
            attrs,
        });
        id
    }

    /// Clone an existing node under a fresh id, offset on the canvas.
    pub fn clone_node(&mut self, id: &str) -> Result<String> {
        let source = self
            .node(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        let copy = ComponentNode {
            id: format!("{}-{}", source.kind, Uuid::new_v4()),
            kind: source.kind,
            position: Position::new(source.position.x + 50.0, source.position.y + 50.0),
            attrs: source.attrs.clone(),
        };
        let new_id = copy.id.clone();
        debug!(from = %id, id = %new_id, "node cloned");
        self.nodes.push(copy);
        Ok(new_id)
    }

    /// Merge an attribute patch into the node. Keys absent from the patch
    /// are left untouched.
    pub fn patch_node(&mut self, id: &str, patch: AttrMap) -> Result<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        node.attrs.extend(patch);
        Ok(())
    }

    pub fn move_node(&mut self, id: &str, position: Position) -> Result<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        node.position = position;
        Ok(())
    }

    /// Delete the node and every edge touching it. The cascade keeps the
    /// no-dangling-edges invariant without a separate repair pass.
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        if !self.nodes.iter().any(|n| n.id == id) {
            return Err(GraphError::NodeNotFound(id.to_string()));
        }
        self.nodes.retain(|n| n.id != id);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        debug!(id = %id, cascaded = before - self.edges.len(), "node removed");
        Ok(())
    }

    // ── Edge operations ──

    /// Connect two existing nodes, returning the new edge id.
    ///
    /// Bus defaults (bandwidth, latency) come from the catalog; caller
    /// attributes override them. Parallel edges and self-loops are allowed.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        bus: BusType,
        attrs: AttrMap,
    ) -> Result<String> {
        for endpoint in [source, target] {
            if !self.nodes.iter().any(|n| n.id == endpoint) {
                return Err(GraphError::NodeNotFound(endpoint.to_string()));
            }
        }
        let id = format!("e-{}", Uuid::new_v4());
        let spec = bus.spec();
        let mut data = AttrMap::new();
        data.insert("busType".into(), bus.as_str().into());
        data.insert("bandwidth".into(), spec.default_bandwidth.into());
        data.insert("latency".into(), spec.default_latency.into());
        data.extend(attrs);

        debug!(id = %id, source = %source, target = %target, bus = %bus, "edge connected");
        self.edges.push(CommEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            attrs: data,
        });
        Ok(id)
    }

    pub fn patch_edge(&mut self, id: &str, patch: AttrMap) -> Result<()> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_string()))?;
        edge.attrs.extend(patch);
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &str) -> Result<()> {
        if !self.edges.iter().any(|e| e.id == id) {
            return Err(GraphError::EdgeNotFound(id.to_string()));
        }
        self.edges.retain(|e| e.id != id);
        Ok(())
    }

    // ── Bulk loads ──

    /// Replace both collections wholesale (template loading, import).
    ///
    /// Referential integrity is checked against the supplied node set before
    /// anything is committed; a dangling edge rejects the whole load.
    pub fn replace_all(&mut self, nodes: Vec<ComponentNode>, edges: Vec<CommEdge>) -> Result<()> {
        check_integrity(&nodes, &edges)?;
        info!(nodes = nodes.len(), edges = edges.len(), "graph replaced");
        self.nodes = nodes;
        self.edges = edges;
        Ok(())
    }

    /// Apply a parsed project document. Partial documents are valid: a
    /// nodes-only import leaves the edge set untouched and vice versa. The
    /// merged result must still be referentially whole.
    pub fn apply_import(&mut self, doc: ProjectImport) -> Result<()> {
        let nodes = doc.nodes.unwrap_or_else(|| self.nodes.clone());
        let edges = doc.edges.unwrap_or_else(|| self.edges.clone());
        self.replace_all(nodes, edges)
    }

    // ── Reads ──

    pub fn node(&self, id: &str) -> Option<&ComponentNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&CommEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Defensive copy of the current collections. Mutating the store later
    /// never invalidates a snapshot already handed out.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}

/// Reject duplicate node ids and edges whose endpoints are not in the node
/// set. Runs before any bulk load commits.
fn check_integrity(nodes: &[ComponentNode], edges: &[CommEdge]) -> Result<()> {
    let mut ids: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(GraphError::InvalidGraph(format!(
                "duplicate node id: {}",
                node.id
            )));
        }
    }
    for edge in edges {
        for endpoint in [&edge.source, &edge.target] {
            if !ids.contains(endpoint.as_str()) {
                return Err(GraphError::InvalidGraph(format!(
                    "edge {} references missing node {}",
                    edge.id, endpoint
                )));
            }
        }
    }
    Ok(())
}

impl From<&GraphStore> for GraphSnapshot {
    fn from(store: &GraphStore) -> Self {
        store.snapshot()
    }
}
