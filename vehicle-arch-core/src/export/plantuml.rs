//! PlantUML class-diagram rendering: one block per node with HW/SW lines,
//! one arrow per edge labelled with the bus type and bandwidth.

use crate::model::GraphSnapshot;
use std::fmt::Write;

/// Double quotes would terminate the PlantUML display name early.
fn sanitize(label: &str) -> String {
    label.replace('"', "'")
}

pub fn export_plantuml(snapshot: &GraphSnapshot) -> String {
    let mut uml = String::from("@startuml Vehicle Architecture\n");
    uml.push_str("!define RECTANGLE class\n\n");

    for node in &snapshot.nodes {
        let _ = writeln!(
            uml,
            "{} \"{}\" as {} {{",
            node.kind.as_str(),
            sanitize(&node.label()),
            node.id
        );
        let _ = writeln!(uml, "  HW: {}", node.hw_id().unwrap_or("N/A"));
        let _ = writeln!(uml, "  SW: {}", node.sw_version().unwrap_or("N/A"));
        uml.push_str("}\n\n");
    }

    for edge in &snapshot.edges {
        // The `\n` stays literal; PlantUML renders it as a line break
        // inside the arrow label.
        let _ = writeln!(
            uml,
            "{} --> {} : {}\\n{}",
            edge.source,
            edge.target,
            edge.bus_label().unwrap_or("Connection"),
            edge.bandwidth().unwrap_or(""),
        );
    }

    uml.push_str("@enduml");
    uml
}
