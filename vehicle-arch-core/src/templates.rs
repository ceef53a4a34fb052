//! Built-in starter graphs: the default sample architecture plus six named
//! templates covering the common E/E design exercises. Labels are bilingual
//! where the template data says so.

use crate::catalog::NodeKind;
use crate::model::{AttrValue, CommEdge, ComponentNode, GraphSnapshot, Position};

/// Stable template identifiers, in menu order.
pub const TEMPLATE_IDS: [&str; 6] = [
    "basic-adas",
    "full-vehicle",
    "network-topology",
    "soa-services",
    "body-domain",
    "powertrain",
];

fn node(
    id: &str,
    kind: NodeKind,
    x: f64,
    y: f64,
    attrs: Vec<(&str, AttrValue)>,
) -> ComponentNode {
    let mut n = ComponentNode::new(id, kind);
    n.position = Position::new(x, y);
    for (key, value) in attrs {
        n.attrs.insert(key.to_string(), value);
    }
    n
}

fn edge(id: &str, source: &str, target: &str, bus: &str, bandwidth: &str, latency: &str) -> CommEdge {
    let mut e = CommEdge::new(id, source, target);
    e.attrs.insert("busType".into(), bus.into());
    e.attrs.insert("bandwidth".into(), bandwidth.into());
    e.attrs.insert("latency".into(), latency.into());
    e
}

/// The sample architecture a fresh session starts from: a central gateway
/// bridging the ADAS and Body domains.
pub fn initial_graph() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            node(
                "gateway-1",
                NodeKind::Gateway,
                400.0,
                100.0,
                vec![
                    ("label", "Central Gateway".into()),
                    ("hwId", "GW-001".into()),
                    ("swVersion", "v2.3.1".into()),
                    ("ports", vec!["CAN1", "CAN2", "ETH1", "ETH2"].into()),
                    ("bandwidth", "1Gbps".into()),
                    ("redundancy", true.into()),
                ],
            ),
            node(
                "dc-adas",
                NodeKind::DomainController,
                100.0,
                300.0,
                vec![
                    ("label", "ADAS Domain Controller".into()),
                    ("domain", "ADAS".into()),
                    ("hwId", "DC-ADAS-001".into()),
                    ("swVersion", "v3.1.0".into()),
                    ("cpu", "ARM Cortex-A78".into()),
                    ("memory", "16GB".into()),
                    ("services", vec!["Camera", "Radar", "LiDAR"].into()),
                ],
            ),
            node(
                "dc-body",
                NodeKind::DomainController,
                700.0,
                300.0,
                vec![
                    ("label", "Body Domain Controller".into()),
                    ("domain", "Body".into()),
                    ("hwId", "DC-BODY-001".into()),
                    ("swVersion", "v2.0.5".into()),
                    ("cpu", "ARM Cortex-R52".into()),
                    ("memory", "4GB".into()),
                    ("services", vec!["Lighting", "HVAC", "Doors"].into()),
                ],
            ),
            node(
                "sensor-camera-1",
                NodeKind::Sensor,
                50.0,
                500.0,
                vec![
                    ("label", "Front Camera".into()),
                    ("sensorType", "Camera".into()),
                    ("hwId", "CAM-F-001".into()),
                    ("resolution", "8MP".into()),
                    ("frameRate", "60fps".into()),
                    ("bandwidth", "100Mbps".into()),
                ],
            ),
            node(
                "ecu-bcm",
                NodeKind::Ecu,
                700.0,
                500.0,
                vec![
                    ("label", "BCM".into()),
                    ("hwId", "BCM-001".into()),
                    ("swVersion", "v1.5.2".into()),
                    ("canMessages", vec!["BCM_Status", "BCM_Control"].into()),
                    ("powerMode", "12V".into()),
                ],
            ),
        ],
        vec![
            edge("e-gw-adas", "gateway-1", "dc-adas", "Ethernet", "1Gbps", "2ms"),
            edge("e-gw-body", "gateway-1", "dc-body", "CAN-FD", "5Mbps", "1ms"),
            edge(
                "e-adas-camera",
                "dc-adas",
                "sensor-camera-1",
                "Ethernet",
                "100Mbps",
                "<10ms",
            ),
            edge("e-body-bcm", "dc-body", "ecu-bcm", "CAN", "500kbps", "5ms"),
        ],
    )
}

fn basic_adas() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            node(
                "adas-dc",
                NodeKind::DomainController,
                250.0,
                150.0,
                vec![
                    ("label", "ADAS 域控制器".into()),
                    ("domain", "ADAS".into()),
                    ("hwId", "DC-ADAS-001".into()),
                    ("swVersion", "v3.2.0".into()),
                    ("cpu", "ARM Cortex-A78".into()),
                    ("memory", "16GB".into()),
                    ("services", vec!["Camera", "Radar", "LiDAR"].into()),
                ],
            ),
            node(
                "camera-front",
                NodeKind::Sensor,
                50.0,
                350.0,
                vec![
                    ("label", "前视摄像头".into()),
                    ("sensorType", "Camera".into()),
                    ("hwId", "CAM-F-001".into()),
                    ("resolution", "8MP".into()),
                    ("frameRate", "60fps".into()),
                    ("bandwidth", "100Mbps".into()),
                ],
            ),
            node(
                "radar-front",
                NodeKind::Sensor,
                250.0,
                350.0,
                vec![
                    ("label", "前向雷达".into()),
                    ("sensorType", "Radar".into()),
                    ("hwId", "RAD-F-001".into()),
                    ("bandwidth", "50Mbps".into()),
                ],
            ),
            node(
                "lidar-top",
                NodeKind::Sensor,
                450.0,
                350.0,
                vec![
                    ("label", "顶置LiDAR".into()),
                    ("sensorType", "LiDAR".into()),
                    ("hwId", "LID-T-001".into()),
                    ("bandwidth", "200Mbps".into()),
                ],
            ),
        ],
        vec![
            edge("e-adas-cam", "adas-dc", "camera-front", "Ethernet", "100Mbps", "<10ms"),
            edge("e-adas-radar", "adas-dc", "radar-front", "Ethernet", "50Mbps", "<5ms"),
            edge("e-adas-lidar", "adas-dc", "lidar-top", "Ethernet", "200Mbps", "<8ms"),
        ],
    )
}

fn network_topology() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            node(
                "gw-central",
                NodeKind::Gateway,
                300.0,
                100.0,
                vec![
                    ("label", "中央网关".into()),
                    ("hwId", "GW-001".into()),
                    ("swVersion", "v2.5.0".into()),
                    ("ports", vec!["ETH1", "ETH2", "CAN1", "CAN2"].into()),
                    ("bandwidth", "1Gbps".into()),
                    ("redundancy", true.into()),
                ],
            ),
            node(
                "switch-1",
                NodeKind::Switch,
                100.0,
                300.0,
                vec![
                    ("label", "以太网交换机 1".into()),
                    ("hwId", "SW-001".into()),
                    ("portCount", "8".into()),
                    ("vlanSupport", true.into()),
                ],
            ),
            node(
                "switch-2",
                NodeKind::Switch,
                500.0,
                300.0,
                vec![
                    ("label", "以太网交换机 2".into()),
                    ("hwId", "SW-002".into()),
                    ("portCount", "8".into()),
                    ("vlanSupport", true.into()),
                ],
            ),
        ],
        vec![
            edge("e-gw-sw1", "gw-central", "switch-1", "Ethernet", "1Gbps", "1ms"),
            edge("e-gw-sw2", "gw-central", "switch-2", "Ethernet", "1Gbps", "1ms"),
        ],
    )
}

fn soa_services() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            node(
                "service-chassis",
                NodeKind::Service,
                100.0,
                100.0,
                vec![
                    ("label", "底盘服务".into()),
                    ("serviceType", "SOME/IP".into()),
                    ("protocol", "TCP".into()),
                    ("interface", "IChassisControl".into()),
                ],
            ),
            node(
                "service-body",
                NodeKind::Service,
                300.0,
                100.0,
                vec![
                    ("label", "车身服务".into()),
                    ("serviceType", "SOME/IP".into()),
                    ("protocol", "UDP".into()),
                    ("interface", "IBodyControl".into()),
                ],
            ),
            node(
                "service-adas",
                NodeKind::Service,
                500.0,
                100.0,
                vec![
                    ("label", "ADAS服务".into()),
                    ("serviceType", "SOME/IP".into()),
                    ("protocol", "TCP".into()),
                    ("interface", "IADASControl".into()),
                ],
            ),
        ],
        vec![],
    )
}

fn body_domain() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            node(
                "body-dc",
                NodeKind::DomainController,
                300.0,
                150.0,
                vec![
                    ("label", "车身域控制器".into()),
                    ("domain", "Body".into()),
                    ("hwId", "DC-BODY-001".into()),
                    ("swVersion", "v2.1.0".into()),
                    ("services", vec!["Lighting", "HVAC", "Doors", "Windows"].into()),
                ],
            ),
            node(
                "bcm",
                NodeKind::Ecu,
                100.0,
                350.0,
                vec![
                    ("label", "BCM".into()),
                    ("hwId", "BCM-001".into()),
                    ("swVersion", "v1.8.0".into()),
                ],
            ),
            node(
                "door-ecu",
                NodeKind::Actuator,
                500.0,
                350.0,
                vec![("label", "车门控制器".into()), ("hwId", "DOOR-001".into())],
            ),
        ],
        vec![
            edge("e-body-bcm", "body-dc", "bcm", "CAN", "500kbps", "5ms"),
            edge("e-body-door", "body-dc", "door-ecu", "LIN", "20kbps", "10ms"),
        ],
    )
}

fn powertrain() -> GraphSnapshot {
    GraphSnapshot::new(
        vec![
            node(
                "vcu",
                NodeKind::Ecu,
                300.0,
                150.0,
                vec![
                    ("label", "VCU (整车控制器)".into()),
                    ("hwId", "VCU-001".into()),
                    ("swVersion", "v2.0.0".into()),
                ],
            ),
            node(
                "bms",
                NodeKind::Ecu,
                100.0,
                350.0,
                vec![
                    ("label", "BMS (电池管理)".into()),
                    ("hwId", "BMS-001".into()),
                    ("swVersion", "v1.5.0".into()),
                ],
            ),
            node(
                "mcu",
                NodeKind::Ecu,
                500.0,
                350.0,
                vec![
                    ("label", "MCU (电机控制)".into()),
                    ("hwId", "MCU-001".into()),
                    ("swVersion", "v1.3.0".into()),
                ],
            ),
        ],
        vec![
            edge("e-vcu-bms", "vcu", "bms", "CAN-FD", "5Mbps", "2ms"),
            edge("e-vcu-mcu", "vcu", "mcu", "CAN-FD", "5Mbps", "2ms"),
        ],
    )
}

/// Look up a template by id. Unknown ids yield `None`; callers decide
/// whether that is worth reporting.
pub fn template(id: &str) -> Option<GraphSnapshot> {
    match id {
        "basic-adas" => Some(basic_adas()),
        "full-vehicle" => Some(initial_graph()),
        "network-topology" => Some(network_topology()),
        "soa-services" => Some(soa_services()),
        "body-domain" => Some(body_domain()),
        "powertrain" => Some(powertrain()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GraphStore;
    use crate::validate;

    #[test]
    fn every_listed_template_resolves() {
        for id in TEMPLATE_IDS {
            assert!(template(id).is_some(), "missing template {id}");
        }
        assert!(template("no-such").is_none());
    }

    #[test]
    fn every_template_loads_into_a_store() {
        for id in TEMPLATE_IDS {
            let snap = template(id).unwrap();
            let store = GraphStore::from_snapshot(snap.clone());
            assert!(store.is_ok(), "template {id} failed integrity");
            assert_eq!(store.unwrap().snapshot(), snap);
        }
    }

    #[test]
    fn initial_graph_redundancy_is_satisfied() {
        // The gateway is critical and touched by two edges.
        assert!(validate::validate_redundancy(&initial_graph()).is_empty());
    }

    #[test]
    fn unit_suffixed_can_bandwidth_trips_the_ceiling() {
        // "500kbps" parses by numeric prefix as 500, well over the CAN
        // ceiling of 1 Mbps; the sample data demonstrates the rule.
        let issues = validate::validate_network(&initial_graph());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].subject, "e-body-bcm");
        assert_eq!(
            issues[0].message,
            "CAN bandwidth 500kbps exceeds limit of 1Mbps"
        );
    }

    #[test]
    fn full_vehicle_is_the_initial_graph() {
        assert_eq!(template("full-vehicle").unwrap(), initial_graph());
    }

    #[test]
    fn soa_template_feeds_the_someip_generator() {
        let snap = template("soa-services").unwrap();
        let config = crate::someip::someip_config(&snap);
        assert_eq!(config.services.len(), 3);
        assert_eq!(config.services[0].interface, "IChassisControl");
        // Protocol is a node attribute, not a matrix field; ids default.
        assert_eq!(config.services[0].service_id, "0x1234");
    }

    #[test]
    fn basic_adas_camera_label_survives_round_trip() {
        let snap = template("basic-adas").unwrap();
        assert_eq!(snap.node("camera-front").unwrap().label(), "前视摄像头");
    }
}
