//! Two-section CSV: a node table then an edge table, separated by a blank
//! line. The node table keeps the full attribute map as a quoted JSON
//! column so nothing is lost in the flat view.

use crate::model::GraphSnapshot;
use std::fmt::Write;

/// Quote-escape per RFC 4180: embedded `"` doubles.
fn quoted(raw: &str) -> String {
    raw.replace('"', "\"\"")
}

pub fn export_csv(snapshot: &GraphSnapshot) -> String {
    let mut csv = String::from("Nodes\n");
    csv.push_str("ID,Type,Label,HW_ID,SW_Version,Additional_Data\n");

    for node in &snapshot.nodes {
        let attrs_json = serde_json::to_string(&node.attrs).unwrap_or_default();
        let _ = writeln!(
            csv,
            "{},{},\"{}\",{},{},\"{}\"",
            node.id,
            node.kind.as_str(),
            quoted(&node.label()),
            node.hw_id().unwrap_or(""),
            node.sw_version().unwrap_or(""),
            quoted(&attrs_json),
        );
    }

    csv.push_str("\nEdges\n");
    csv.push_str("ID,Source,Target,Bus_Type,Bandwidth,Latency\n");

    for edge in &snapshot.edges {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{}",
            edge.id,
            edge.source,
            edge.target,
            edge.bus_label().unwrap_or(""),
            edge.bandwidth().unwrap_or(""),
            edge.latency().unwrap_or(""),
        );
    }

    csv
}
