//! AUTOSAR XML subset: ECU-INSTANCE elements per node and a
//! Communications sub-package with one CAN-CLUSTER per edge. Hand-written
//! writer; the element set is fixed, so a templating pass is all the
//! format needs.

use crate::model::GraphSnapshot;
use std::fmt::Write;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<AUTOSAR xmlns="http://autosar.org/schema/r4.0">
  <AR-PACKAGES>
    <AR-PACKAGE>
      <SHORT-NAME>VehicleArchitecture</SHORT-NAME>
      <ELEMENTS>"#;

const FOOTER: &str = r#"
          </ELEMENTS>
        </AR-PACKAGE>
      </SUB-PACKAGES>
    </AR-PACKAGE>
  </AR-PACKAGES>
</AUTOSAR>"#;

/// Escape XML-significant characters in attribute-sourced text.
fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Short names must not contain whitespace; collapse each run to an
/// underscore after escaping.
fn short_name(label: &str) -> String {
    let escaped = xml_escape(label);
    let mut out = String::with_capacity(escaped.len());
    for ch in escaped.chars() {
        if ch.is_whitespace() {
            out.push('_');
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn export_arxml(snapshot: &GraphSnapshot) -> String {
    let mut xml = String::from(HEADER);
    xml.push_str("\n        ");

    for node in &snapshot.nodes {
        let _ = write!(
            xml,
            "\n        <ECU-INSTANCE>\n          <SHORT-NAME>{}</SHORT-NAME>\n          <HW-ID>{}</HW-ID>\n          <SW-VERSION>{}</SW-VERSION>\n          <TYPE>{}</TYPE>\n        </ECU-INSTANCE>",
            short_name(&node.label()),
            xml_escape(node.hw_id().unwrap_or("N/A")),
            xml_escape(node.sw_version().unwrap_or("N/A")),
            node.kind.as_str(),
        );
    }

    xml.push_str(
        "\n      </ELEMENTS>\n      <SUB-PACKAGES>\n        <AR-PACKAGE>\n          <SHORT-NAME>Communications</SHORT-NAME>\n          <ELEMENTS>\n            ",
    );

    for edge in &snapshot.edges {
        let _ = write!(
            xml,
            "\n            <CAN-CLUSTER>\n              <SHORT-NAME>Connection_{}</SHORT-NAME>\n              <BUS-TYPE>{}</BUS-TYPE>\n              <BANDWIDTH>{}</BANDWIDTH>\n              <LATENCY>{}</LATENCY>\n            </CAN-CLUSTER>",
            xml_escape(&edge.id),
            xml_escape(edge.bus_label().unwrap_or("CAN")),
            xml_escape(edge.bandwidth().unwrap_or("N/A")),
            xml_escape(edge.latency().unwrap_or("N/A")),
        );
    }

    xml.push_str(FOOTER);
    xml
}
