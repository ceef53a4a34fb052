//! Topology analytics: descriptive statistics over a snapshot. No
//! validation happens here — every well-formed snapshot, including the
//! empty graph, produces a result.

use crate::catalog::NodeKind;
use crate::model::{parse_leading_number, GraphSnapshot};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Bus-type bucket for edges that carry no `busType` attribute.
pub const UNKNOWN_BUS: &str = "Unknown";

/// Aggregate statistics for one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TopologyAnalysis {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub nodes_by_kind: BTreeMap<NodeKind, usize>,
    /// Keyed by the raw bus label; missing labels collapse into
    /// [`UNKNOWN_BUS`].
    pub edges_by_bus: BTreeMap<String, usize>,
    /// Distinct `domain` attribute values, sorted. Order carries no meaning.
    pub domains: Vec<String>,
}

pub fn analyze_topology(snapshot: &GraphSnapshot) -> TopologyAnalysis {
    let mut nodes_by_kind: BTreeMap<NodeKind, usize> = BTreeMap::new();
    let mut domains: BTreeSet<String> = BTreeSet::new();
    for node in &snapshot.nodes {
        *nodes_by_kind.entry(node.kind).or_insert(0) += 1;
        if let Some(domain) = node.domain() {
            if domain.truthy() {
                domains.insert(domain.to_string());
            }
        }
    }

    let mut edges_by_bus: BTreeMap<String, usize> = BTreeMap::new();
    for edge in &snapshot.edges {
        let bus = edge.bus_label().unwrap_or(UNKNOWN_BUS);
        *edges_by_bus.entry(bus.to_string()).or_insert(0) += 1;
    }

    TopologyAnalysis {
        total_nodes: snapshot.nodes.len(),
        total_edges: snapshot.edges.len(),
        nodes_by_kind,
        edges_by_bus,
        domains: domains.into_iter().collect(),
    }
}

// ── Latency path estimate ─────────────────────────────────────

/// Hop collection between two endpoints with summed latency.
///
/// An estimate, not a shortest path: it gathers edges leaving the start or
/// arriving at the end, and reads latency with the same tolerant numeric
/// parsing as validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LatencyPath {
    /// Ids of the collected edges.
    pub hops: Vec<String>,
    pub total_latency_ms: f64,
}

impl LatencyPath {
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }
}

impl fmt::Display for LatencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms over {} hops", self.total_latency_ms, self.hops.len())
    }
}

pub fn latency_path(snapshot: &GraphSnapshot, start: &str, end: &str) -> LatencyPath {
    let mut path = LatencyPath::default();
    for edge in &snapshot.edges {
        if edge.source == start || edge.target == end {
            path.total_latency_ms += parse_leading_number(edge.latency().unwrap_or("0"));
            path.hops.push(edge.id.clone());
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttrValue, CommEdge, ComponentNode};

    fn node(id: &str, kind: NodeKind) -> ComponentNode {
        ComponentNode::new(id, kind)
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        let analysis = analyze_topology(&GraphSnapshot::default());
        assert_eq!(analysis.total_nodes, 0);
        assert_eq!(analysis.total_edges, 0);
        assert!(analysis.nodes_by_kind.is_empty());
        assert!(analysis.edges_by_bus.is_empty());
        assert!(analysis.domains.is_empty());
    }

    #[test]
    fn nodes_group_by_kind() {
        let snap = GraphSnapshot::new(
            vec![
                node("s1", NodeKind::Sensor),
                node("s2", NodeKind::Sensor),
                node("s3", NodeKind::Sensor),
                node("gw", NodeKind::Gateway),
            ],
            vec![],
        );
        let analysis = analyze_topology(&snap);
        assert_eq!(analysis.total_nodes, 4);
        assert_eq!(analysis.nodes_by_kind[&NodeKind::Sensor], 3);
        assert_eq!(analysis.nodes_by_kind[&NodeKind::Gateway], 1);
    }

    #[test]
    fn duplicate_domains_collapse() {
        let mut a = node("a", NodeKind::DomainController);
        a.attrs.insert("domain".into(), "ADAS".into());
        let mut b = node("b", NodeKind::DomainController);
        b.attrs.insert("domain".into(), "Body".into());
        let mut c = node("c", NodeKind::Ecu);
        c.attrs.insert("domain".into(), "ADAS".into());
        // Empty string is falsy and contributes nothing.
        let mut d = node("d", NodeKind::Ecu);
        d.attrs.insert("domain".into(), "".into());

        let analysis = analyze_topology(&GraphSnapshot::new(vec![a, b, c, d], vec![]));
        assert_eq!(analysis.domains, vec!["ADAS".to_string(), "Body".to_string()]);
    }

    #[test]
    fn edges_without_bus_type_bucket_as_unknown() {
        let mut tagged = CommEdge::new("e1", "a", "b");
        tagged.attrs.insert("busType".into(), "CAN".into());
        let untagged = CommEdge::new("e2", "a", "b");

        let snap = GraphSnapshot::new(
            vec![node("a", NodeKind::Ecu), node("b", NodeKind::Ecu)],
            vec![tagged, untagged],
        );
        let analysis = analyze_topology(&snap);
        assert_eq!(analysis.edges_by_bus["CAN"], 1);
        assert_eq!(analysis.edges_by_bus[UNKNOWN_BUS], 1);
    }

    #[test]
    fn latency_path_sums_tolerantly() {
        let mut e1 = CommEdge::new("e1", "start", "mid");
        e1.attrs.insert("latency".into(), "5ms".into());
        let mut e2 = CommEdge::new("e2", "mid", "end");
        e2.attrs.insert("latency".into(), "2ms".into());
        // Non-numeric latency degrades to zero instead of poisoning the sum.
        let mut e3 = CommEdge::new("e3", "start", "other");
        e3.attrs.insert("latency".into(), "<10ms".into());

        let snap = GraphSnapshot::new(
            vec![
                node("start", NodeKind::Sensor),
                node("mid", NodeKind::Gateway),
                node("end", NodeKind::Ecu),
                node("other", NodeKind::Ecu),
            ],
            vec![e1, e2, e3],
        );
        let path = latency_path(&snap, "start", "end");
        assert_eq!(path.hop_count(), 3);
        assert_eq!(path.total_latency_ms, 7.0);
    }

    #[test]
    fn analysis_serializes_kind_keys_as_wire_names() {
        let snap = GraphSnapshot::new(vec![node("a", NodeKind::DomainController)], vec![]);
        let json = serde_json::to_string(&analyze_topology(&snap)).unwrap();
        assert!(json.contains("\"domainController\":1"));
    }

    #[test]
    fn redundancy_flag_does_not_leak_into_domains() {
        let mut gw = node("gw", NodeKind::Gateway);
        gw.attrs.insert("redundancy".into(), AttrValue::Bool(true));
        let analysis = analyze_topology(&GraphSnapshot::new(vec![gw], vec![]));
        assert!(analysis.domains.is_empty());
    }
}
