//! Entity catalog: the fixed vocabulary of component kinds and bus types.
//!
//! The catalog is a process constant. It owns the bus bandwidth ceilings used
//! by validation, the attribute names each node kind semantically interprets,
//! and the default visual weight of each bus type. Everything else in the
//! crate treats kinds and buses through this lookup table rather than through
//! scattered conditionals.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Node kinds ────────────────────────────────────────────────

/// The seven component kinds of the architecture graph.
///
/// Wire names (`ecu`, `domainController`, ...) are part of the project file
/// format and are frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "ecu")]
    Ecu,
    #[serde(rename = "domainController")]
    DomainController,
    #[serde(rename = "sensor")]
    Sensor,
    #[serde(rename = "gateway")]
    Gateway,
    #[serde(rename = "actuator")]
    Actuator,
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "service")]
    Service,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Ecu,
        NodeKind::DomainController,
        NodeKind::Sensor,
        NodeKind::Gateway,
        NodeKind::Actuator,
        NodeKind::Switch,
        NodeKind::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Ecu => "ecu",
            NodeKind::DomainController => "domainController",
            NodeKind::Sensor => "sensor",
            NodeKind::Gateway => "gateway",
            NodeKind::Actuator => "actuator",
            NodeKind::Switch => "switch",
            NodeKind::Service => "service",
        }
    }

    /// Capability descriptor for this kind.
    pub fn spec(&self) -> &'static KindSpec {
        match self {
            NodeKind::Ecu => &KindSpec {
                declared_attrs: &["label", "hwId", "swVersion", "powerMode", "canMessages"],
                palette_color: "#45b7d1",
            },
            NodeKind::DomainController => &KindSpec {
                declared_attrs: &[
                    "label",
                    "domain",
                    "hwId",
                    "swVersion",
                    "cpu",
                    "memory",
                    "services",
                ],
                palette_color: "#4ecdc4",
            },
            NodeKind::Sensor => &KindSpec {
                declared_attrs: &[
                    "label",
                    "sensorType",
                    "hwId",
                    "resolution",
                    "frameRate",
                    "bandwidth",
                ],
                palette_color: "#96ceb4",
            },
            NodeKind::Gateway => &KindSpec {
                declared_attrs: &[
                    "label",
                    "hwId",
                    "swVersion",
                    "ports",
                    "bandwidth",
                    "redundancy",
                ],
                palette_color: "#ff6b6b",
            },
            NodeKind::Actuator => &KindSpec {
                declared_attrs: &["label", "hwId", "actuatorType", "controlSignal"],
                palette_color: "#ffeaa7",
            },
            NodeKind::Switch => &KindSpec {
                declared_attrs: &["label", "hwId", "swVersion", "portCount", "vlanSupport"],
                palette_color: "#dfe6e9",
            },
            NodeKind::Service => &KindSpec {
                declared_attrs: &["label", "serviceType", "protocol", "interface", "qos"],
                palette_color: "#fd79a8",
            },
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| GraphError::UnknownKind(s.to_string()))
    }
}

/// What a node kind declares: the attribute names it semantically interprets
/// and its palette/minimap color. Attribute names outside this list are
/// preserved on the node but ignored by validation and analytics.
#[derive(Clone, Copy, Debug)]
pub struct KindSpec {
    pub declared_attrs: &'static [&'static str],
    pub palette_color: &'static str,
}

// ── Bus types ─────────────────────────────────────────────────

/// Communication bus kinds, wire-named as they appear in project files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BusType {
    #[serde(rename = "CAN")]
    Can,
    #[serde(rename = "CAN-FD")]
    CanFd,
    #[serde(rename = "LIN")]
    Lin,
    #[serde(rename = "Ethernet")]
    Ethernet,
    #[serde(rename = "FlexRay")]
    FlexRay,
    #[serde(rename = "Virtual/Service")]
    VirtualService,
}

impl BusType {
    pub const ALL: [BusType; 6] = [
        BusType::Can,
        BusType::CanFd,
        BusType::Lin,
        BusType::Ethernet,
        BusType::FlexRay,
        BusType::VirtualService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusType::Can => "CAN",
            BusType::CanFd => "CAN-FD",
            BusType::Lin => "LIN",
            BusType::Ethernet => "Ethernet",
            BusType::FlexRay => "FlexRay",
            BusType::VirtualService => "Virtual/Service",
        }
    }

    /// Lenient lookup: unknown bus names yield `None` rather than an error,
    /// so downstream rules can skip what they do not recognize.
    pub fn parse(s: &str) -> Option<BusType> {
        BusType::ALL.into_iter().find(|b| b.as_str() == s)
    }

    pub fn spec(&self) -> &'static BusSpec {
        match self {
            BusType::Can => &BusSpec {
                ceiling_mbps: Some(1.0),
                stroke: "#ff6b6b",
                stroke_width: 2.0,
                dashed: false,
                default_bandwidth: "500kbps",
                default_latency: "5ms",
            },
            BusType::CanFd => &BusSpec {
                ceiling_mbps: Some(8.0),
                stroke: "#ff8c42",
                stroke_width: 3.0,
                dashed: false,
                default_bandwidth: "5Mbps",
                default_latency: "2ms",
            },
            BusType::Lin => &BusSpec {
                ceiling_mbps: Some(0.02),
                stroke: "#4ecdc4",
                stroke_width: 2.0,
                dashed: false,
                default_bandwidth: "20kbps",
                default_latency: "10ms",
            },
            BusType::Ethernet => &BusSpec {
                ceiling_mbps: Some(1000.0),
                stroke: "#45b7d1",
                stroke_width: 3.0,
                dashed: false,
                default_bandwidth: "1Gbps",
                default_latency: "2ms",
            },
            BusType::FlexRay => &BusSpec {
                ceiling_mbps: Some(10.0),
                stroke: "#96ceb4",
                stroke_width: 2.0,
                dashed: false,
                default_bandwidth: "10Mbps",
                default_latency: "2ms",
            },
            BusType::VirtualService => &BusSpec {
                ceiling_mbps: None,
                stroke: "#dda15e",
                stroke_width: 2.0,
                dashed: true,
                default_bandwidth: "100Mbps",
                default_latency: "5ms",
            },
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-bus descriptor: the validation ceiling plus the default edge
/// presentation and seed attributes used when a connection is created.
#[derive(Clone, Copy, Debug)]
pub struct BusSpec {
    /// Bandwidth ceiling in Mbps. `None` = unconstrained (validation skips).
    pub ceiling_mbps: Option<f64>,
    pub stroke: &'static str,
    pub stroke_width: f32,
    pub dashed: bool,
    pub default_bandwidth: &'static str,
    pub default_latency: &'static str,
}

/// Bandwidth ceiling for a bus type, in Mbps.
///
/// `None` means the bus is unconstrained (Virtual/Service); the bandwidth
/// rule silently skips such edges.
pub fn ceiling_for(bus: BusType) -> Option<f64> {
    bus.spec().ceiling_mbps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_ceilings() {
        assert_eq!(ceiling_for(BusType::Can), Some(1.0));
        assert_eq!(ceiling_for(BusType::CanFd), Some(8.0));
        assert_eq!(ceiling_for(BusType::Lin), Some(0.02));
        assert_eq!(ceiling_for(BusType::Ethernet), Some(1000.0));
        assert_eq!(ceiling_for(BusType::FlexRay), Some(10.0));
        assert_eq!(ceiling_for(BusType::VirtualService), None);
    }

    #[test]
    fn kind_round_trips_through_wire_name() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
        }
        assert!(matches!(
            "flux_capacitor".parse::<NodeKind>(),
            Err(GraphError::UnknownKind(_))
        ));
    }

    #[test]
    fn bus_parse_is_lenient() {
        assert_eq!(BusType::parse("CAN-FD"), Some(BusType::CanFd));
        assert_eq!(BusType::parse("MOST"), None);
    }

    #[test]
    fn bus_visual_weight_is_declared() {
        // Virtual/Service is the only dashed bus; Ethernet and CAN-FD
        // render heavier than the rest.
        for bus in BusType::ALL {
            let spec = bus.spec();
            assert_eq!(spec.dashed, bus == BusType::VirtualService);
            assert!(spec.stroke.starts_with('#'));
            let heavy = matches!(bus, BusType::Ethernet | BusType::CanFd);
            assert_eq!(spec.stroke_width, if heavy { 3.0 } else { 2.0 });
        }
    }

    #[test]
    fn every_kind_has_a_palette_color() {
        for kind in NodeKind::ALL {
            assert!(kind.spec().palette_color.starts_with('#'));
        }
    }

    #[test]
    fn every_kind_declares_a_label() {
        for kind in NodeKind::ALL {
            assert!(kind.spec().declared_attrs.contains(&"label"));
        }
    }
}
