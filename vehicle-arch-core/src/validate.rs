//! Constraint validation: pure rule evaluation over a snapshot.
//!
//! Both rule families are total — malformed attribute values degrade to
//! benign defaults instead of failing, so a validation pass always returns
//! an issue list (possibly empty) and never an error.

use crate::catalog::ceiling_for;
use crate::model::{parse_leading_number, GraphSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule family tags, wire-named for report consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    BandwidthExceeded,
    RedundancyMissing,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::BandwidthExceeded => "bandwidth_exceeded",
            IssueKind::RedundancyMissing => "redundancy_missing",
        }
    }
}

/// One rule violation, naming the offending node or edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Id of the edge (bandwidth rule) or node (redundancy rule).
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

/// Bandwidth rule: an edge violates when its reported bandwidth, read as
/// Mbps, exceeds the catalog ceiling for its bus type.
///
/// Edges with an unknown or unconstrained bus type are skipped (lenient
/// policy); missing or non-numeric bandwidth parses to zero and therefore
/// never violates. Issue order follows edge iteration order.
pub fn validate_network(snapshot: &GraphSnapshot) -> Vec<Issue> {
    let mut issues = Vec::new();
    for edge in &snapshot.edges {
        let Some(bus) = edge.bus_type() else { continue };
        let Some(ceiling) = ceiling_for(bus) else {
            continue;
        };
        let reported = edge.bandwidth().unwrap_or("0");
        if parse_leading_number(reported) > ceiling {
            issues.push(Issue {
                kind: IssueKind::BandwidthExceeded,
                subject: edge.id.clone(),
                message: format!(
                    "{} bandwidth {} exceeds limit of {}Mbps",
                    bus, reported, ceiling
                ),
            });
        }
    }
    issues
}

/// Redundancy rule: a critical node (truthy `redundancy` attribute) must be
/// touched by at least two edges. Nodes without the attribute are exempt.
pub fn validate_redundancy(snapshot: &GraphSnapshot) -> Vec<Issue> {
    let mut issues = Vec::new();
    for node in &snapshot.nodes {
        if !node.is_critical() {
            continue;
        }
        if snapshot.degree(&node.id) < 2 {
            issues.push(Issue {
                kind: IssueKind::RedundancyMissing,
                subject: node.id.clone(),
                message: format!(
                    "Critical node {} has insufficient redundant connections",
                    node.label()
                ),
            });
        }
    }
    issues
}

/// Run both rule families, network first. The families are independent;
/// callers may also run either alone.
pub fn validate(snapshot: &GraphSnapshot) -> Vec<Issue> {
    let mut issues = validate_network(snapshot);
    issues.extend(validate_redundancy(snapshot));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NodeKind;
    use crate::model::{AttrValue, CommEdge, ComponentNode};

    fn node(id: &str, kind: NodeKind) -> ComponentNode {
        ComponentNode::new(id, kind)
    }

    fn edge(id: &str, source: &str, target: &str, bus: &str, bandwidth: &str) -> CommEdge {
        let mut e = CommEdge::new(id, source, target);
        e.attrs.insert("busType".into(), bus.into());
        e.attrs.insert("bandwidth".into(), bandwidth.into());
        e
    }

    #[test]
    fn can_edge_over_ceiling_is_flagged_once() {
        let snap = GraphSnapshot::new(
            vec![node("A", NodeKind::Ecu), node("B", NodeKind::Ecu)],
            vec![edge("e1", "A", "B", "CAN", "2")],
        );
        let issues = validate_network(&snap);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::BandwidthExceeded);
        assert_eq!(issues[0].subject, "e1");
        assert_eq!(issues[0].message, "CAN bandwidth 2 exceeds limit of 1Mbps");
    }

    #[test]
    fn bandwidth_at_or_under_ceiling_passes() {
        let snap = GraphSnapshot::new(
            vec![node("A", NodeKind::Ecu), node("B", NodeKind::Ecu)],
            vec![
                edge("e1", "A", "B", "CAN", "1"),
                edge("e2", "A", "B", "CAN-FD", "8"),
                edge("e3", "A", "B", "Ethernet", "999"),
            ],
        );
        assert!(validate_network(&snap).is_empty());
    }

    #[test]
    fn unknown_bus_and_unconstrained_bus_are_skipped() {
        let snap = GraphSnapshot::new(
            vec![node("A", NodeKind::Ecu), node("B", NodeKind::Ecu)],
            vec![
                edge("e1", "A", "B", "MOST", "99999"),
                edge("e2", "A", "B", "Virtual/Service", "99999"),
            ],
        );
        assert!(validate_network(&snap).is_empty());
    }

    /// Tolerant-input policy: a non-numeric bandwidth is read as zero and
    /// never violates — deliberately not an error.
    #[test]
    fn non_numeric_bandwidth_is_benign_zero() {
        let mut e = CommEdge::new("e1", "A", "B");
        e.attrs.insert("busType".into(), "CAN".into());
        e.attrs.insert("bandwidth".into(), "plenty".into());
        let mut missing = CommEdge::new("e2", "A", "B");
        missing.attrs.insert("busType".into(), "CAN".into());

        let snap = GraphSnapshot::new(
            vec![node("A", NodeKind::Ecu), node("B", NodeKind::Ecu)],
            vec![e, missing],
        );
        assert!(validate_network(&snap).is_empty());
    }

    #[test]
    fn lin_fractional_ceiling_applies() {
        let snap = GraphSnapshot::new(
            vec![node("A", NodeKind::Actuator), node("B", NodeKind::Ecu)],
            vec![edge("e1", "A", "B", "LIN", "0.04")],
        );
        let issues = validate_network(&snap);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("limit of 0.02Mbps"));
    }

    #[test]
    fn isolated_critical_node_is_flagged() {
        let mut gw = node("gw", NodeKind::Gateway);
        gw.attrs.insert("label".into(), "Central Gateway".into());
        gw.attrs.insert("redundancy".into(), AttrValue::Bool(true));
        let snap = GraphSnapshot::new(vec![gw], vec![]);

        let issues = validate_redundancy(&snap);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::RedundancyMissing);
        assert_eq!(issues[0].subject, "gw");
        assert!(issues[0].message.contains("Central Gateway"));
    }

    #[test]
    fn two_touching_edges_satisfy_redundancy() {
        let mut gw = node("gw", NodeKind::Gateway);
        gw.attrs.insert("redundancy".into(), AttrValue::Bool(true));
        let snap = GraphSnapshot::new(
            vec![gw, node("a", NodeKind::Ecu), node("b", NodeKind::Ecu)],
            vec![
                edge("e1", "gw", "a", "CAN", "0.5"),
                edge("e2", "b", "gw", "CAN", "0.5"),
            ],
        );
        assert!(validate_redundancy(&snap).is_empty());
    }

    #[test]
    fn non_critical_nodes_are_exempt() {
        let mut off = node("a", NodeKind::Gateway);
        off.attrs.insert("redundancy".into(), AttrValue::Bool(false));
        let snap = GraphSnapshot::new(vec![off, node("b", NodeKind::Ecu)], vec![]);
        assert!(validate_redundancy(&snap).is_empty());
    }

    #[test]
    fn combined_pass_orders_network_before_redundancy() {
        let mut gw = node("gw", NodeKind::Gateway);
        gw.attrs.insert("redundancy".into(), AttrValue::Bool(true));
        let snap = GraphSnapshot::new(
            vec![gw, node("a", NodeKind::Ecu)],
            vec![edge("e1", "gw", "a", "CAN", "5")],
        );
        let issues = validate(&snap);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, IssueKind::BandwidthExceeded);
        assert_eq!(issues[1].kind, IssueKind::RedundancyMissing);
    }

    #[test]
    fn empty_snapshot_is_clean() {
        assert!(validate(&GraphSnapshot::default()).is_empty());
    }

    #[test]
    fn issue_kind_wire_names() {
        let json = serde_json::to_string(&IssueKind::BandwidthExceeded).unwrap();
        assert_eq!(json, "\"bandwidth_exceeded\"");
        let json = serde_json::to_string(&IssueKind::RedundancyMissing).unwrap();
        assert_eq!(json, "\"redundancy_missing\"");
    }
}
