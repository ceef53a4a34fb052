//! SOME/IP service matrix generation for service-oriented nodes.
//!
//! Only `service` kind nodes participate; every field falls back to a
//! placeholder so a freshly-dropped service node still yields a complete
//! entry the integrator can fill in.

use crate::catalog::NodeKind;
use crate::model::{AttrValue, ComponentNode, GraphSnapshot};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_ID: &str = "0x1234";
pub const DEFAULT_INSTANCE_ID: &str = "0x0001";
pub const DEFAULT_MAJOR_VERSION: &str = "1";
pub const DEFAULT_MINOR_VERSION: &str = "0";
pub const DEFAULT_INTERFACE: &str = "IUnknown";

/// One service entry in the generated matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SomeIpService {
    pub service_id: String,
    pub instance_id: String,
    pub major_version: String,
    pub minor_version: String,
    pub interface: String,
    pub methods: Vec<String>,
    pub events: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SomeIpConfig {
    pub services: Vec<SomeIpService>,
}

fn string_list(node: &ComponentNode, name: &str) -> Vec<String> {
    match node.attrs.get(name) {
        Some(AttrValue::List(items)) => items.clone(),
        _ => Vec::new(),
    }
}

fn service_entry(node: &ComponentNode) -> SomeIpService {
    SomeIpService {
        service_id: node.attr_str("serviceId").unwrap_or(DEFAULT_SERVICE_ID).to_string(),
        instance_id: node.attr_str("instanceId").unwrap_or(DEFAULT_INSTANCE_ID).to_string(),
        major_version: node
            .attr_str("majorVersion")
            .unwrap_or(DEFAULT_MAJOR_VERSION)
            .to_string(),
        minor_version: node
            .attr_str("minorVersion")
            .unwrap_or(DEFAULT_MINOR_VERSION)
            .to_string(),
        interface: node.attr_str("interface").unwrap_or(DEFAULT_INTERFACE).to_string(),
        methods: string_list(node, "methods"),
        events: string_list(node, "events"),
    }
}

/// Build the matrix from every service node in the snapshot, in node order.
pub fn someip_config(snapshot: &GraphSnapshot) -> SomeIpConfig {
    SomeIpConfig {
        services: snapshot
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Service)
            .map(service_entry)
            .collect(),
    }
}

/// Pretty-printed JSON rendering of [`someip_config`].
pub fn export_someip_json(snapshot: &GraphSnapshot) -> String {
    serde_json::to_string_pretty(&someip_config(snapshot)).unwrap_or_default()
}
