//! Graph entities: component nodes, communication edges, and the immutable
//! snapshot handed to validation, analytics, and the exporters.

use crate::catalog::{BusType, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ── Attribute values ──────────────────────────────────────────

/// Open attribute value: string, number, boolean, or ordered string list.
///
/// Serialized untagged so project JSON (`true`, `3.5`, `"8MP"`,
/// `["CAN1","CAN2"]`) round-trips without a wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Num(f64),
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Loose truthiness: `false`, `0`, the empty string, and the empty list
    /// are falsy; everything else is truthy. Only the redundancy rule
    /// depends on this.
    pub fn truthy(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::Num(n) => *n != 0.0,
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::List(l) => !l.is_empty(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Num(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::List(l) => f.write_str(&l.join(",")),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Num(n)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Sorted open attribute map. Sorting keeps every serialization
/// deterministic regardless of insertion order.
pub type AttrMap = BTreeMap<String, AttrValue>;

// ── Position ──────────────────────────────────────────────────

/// Canvas coordinate. Purely presentational; no validation semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Component node ────────────────────────────────────────────

/// One physical or logical vehicle E/E element.
///
/// `id` and `kind` are fixed at creation; `position` and `attrs` are mutable
/// through the store. The `type`/`data` wire names are part of the project
/// file format and are frozen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default, rename = "data")]
    pub attrs: AttrMap,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            attrs: AttrMap::new(),
        }
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    /// Display label; falls back to the id when unset.
    pub fn label(&self) -> &str {
        self.attr_str("label").unwrap_or(&self.id)
    }

    pub fn hw_id(&self) -> Option<&str> {
        self.attr_str("hwId")
    }

    pub fn sw_version(&self) -> Option<&str> {
        self.attr_str("swVersion")
    }

    pub fn domain(&self) -> Option<&AttrValue> {
        self.attrs.get("domain")
    }

    /// A node is critical (subject to the redundancy rule) when its
    /// `redundancy` attribute is truthy.
    pub fn is_critical(&self) -> bool {
        self.attrs.get("redundancy").is_some_and(AttrValue::truthy)
    }
}

// ── Communication edge ────────────────────────────────────────

/// A directed communication link between two nodes.
///
/// Bus type, bandwidth, and latency live in the open `data` map like node
/// attributes; the typed accessors below interpret them. Self-loops and
/// parallel edges are representable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, rename = "data")]
    pub attrs: AttrMap,
}

impl CommEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            attrs: AttrMap::new(),
        }
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    /// Raw bus name as stored, if any. Analytics buckets on this string.
    pub fn bus_label(&self) -> Option<&str> {
        self.attr_str("busType")
    }

    /// Bus type resolved against the catalog. Unknown names yield `None`
    /// and are skipped by validation (lenient-unknown policy).
    pub fn bus_type(&self) -> Option<BusType> {
        self.bus_label().and_then(BusType::parse)
    }

    pub fn bandwidth(&self) -> Option<&str> {
        self.attr_str("bandwidth")
    }

    pub fn latency(&self) -> Option<&str> {
        self.attr_str("latency")
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

// ── Snapshot ──────────────────────────────────────────────────

/// Immutable (nodes, edges) pair — the sole input to the validation engine,
/// the topology analyzer, and the exporters. Owning the data keeps the
/// read-side components referentially transparent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<ComponentNode>,
    pub edges: Vec<CommEdge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<ComponentNode>, edges: Vec<CommEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&ComponentNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&CommEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Number of edges touching the node at either endpoint.
    pub fn degree(&self, node_id: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(node_id)).count()
    }
}

// ── Numeric parsing ───────────────────────────────────────────

/// Parse the longest leading decimal number of a quantity string:
/// `"500kbps"` → 500, `"1Gbps"` → 1, `"2.5"` → 2.5. Strings without a
/// numeric prefix (`"<10ms"`, `""`) parse to 0, which is the tolerant-input
/// default used by validation and latency summation.
pub(crate) fn parse_leading_number(s: &str) -> f64 {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let mut saw_digit = false;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
    }
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
            saw_digit = true;
        }
        if saw_digit {
            i = j;
        }
    }
    if !saw_digit {
        return 0.0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    t[..i].parse::<f64>().unwrap_or(0.0)
}
