//! The canonical project format: JSON with `nodes`, `edges`, and tool
//! metadata. The only format that round-trips back into a store.

use crate::error::Result;
use crate::model::{CommEdge, ComponentNode, GraphSnapshot};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const PROJECT_VERSION: &str = "1.0";
pub const TOOL_NAME: &str = "Vehicle Architecture Designer";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub version: String,
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub tool: String,
}

/// Outbound document shape. Field order is part of the file format.
#[derive(Serialize)]
struct ProjectDoc<'a> {
    nodes: &'a [ComponentNode],
    edges: &'a [CommEdge],
    metadata: ProjectMeta,
}

/// Render the snapshot as a pretty-printed project document stamped with
/// the current time.
pub fn export_json(snapshot: &GraphSnapshot) -> String {
    export_json_at(snapshot, Utc::now())
}

/// Like [`export_json`] with an explicit timestamp, so callers (and tests)
/// can pin the metadata.
pub fn export_json_at(snapshot: &GraphSnapshot, at: DateTime<Utc>) -> String {
    let doc = ProjectDoc {
        nodes: &snapshot.nodes,
        edges: &snapshot.edges,
        metadata: ProjectMeta {
            version: PROJECT_VERSION.to_string(),
            export_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            tool: TOOL_NAME.to_string(),
        },
    };
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Inbound document: any object carrying `nodes` and/or `edges` arrays.
///
/// Both keys are optional — a partial document replaces only the
/// collection it carries (lenient-merge policy). Unknown keys, including
/// `metadata`, are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectImport {
    #[serde(default)]
    pub nodes: Option<Vec<ComponentNode>>,
    #[serde(default)]
    pub edges: Option<Vec<CommEdge>>,
}

/// Parse project JSON. Malformed input surfaces as
/// [`GraphError::Parse`](crate::GraphError::Parse) for the operator —
/// never swallowed.
pub fn parse_project(text: &str) -> Result<ProjectImport> {
    Ok(serde_json::from_str(text)?)
}
