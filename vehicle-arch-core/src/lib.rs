//! Core model for automotive E/E network architectures: a typed graph of
//! vehicle components (ECUs, domain controllers, sensors, gateways,
//! actuators, switches, services) joined by communication links over CAN,
//! CAN-FD, LIN, FlexRay, Ethernet, or virtual service channels.
//!
//! The crate splits into a mutable [`GraphStore`] (the only mutation
//! surface) and pure read-side components that consume immutable
//! [`GraphSnapshot`]s:
//!
//! - [`validate`] — bandwidth-ceiling and redundancy rules
//! - [`analyze`] — topology statistics and latency estimates
//! - [`export`] — JSON project files, an AUTOSAR XML subset, PlantUML,
//!   and CSV
//! - [`someip`] — SOME/IP service matrix generation
//! - [`templates`] — built-in starter architectures
//!
//! ```
//! use vehicle_arch_core::{templates, validate, GraphStore};
//!
//! let store = GraphStore::from_snapshot(templates::initial_graph())?;
//! let issues = validate::validate(&store.snapshot());
//! for issue in &issues {
//!     println!("{issue}");
//! }
//! # Ok::<(), vehicle_arch_core::GraphError>(())
//! ```

pub mod analyze;
pub mod catalog;
pub mod error;
pub mod export;
pub mod model;
pub mod session;
pub mod someip;
pub mod store;
pub mod templates;
pub mod validate;

pub use analyze::{analyze_topology, latency_path, LatencyPath, TopologyAnalysis};
pub use catalog::{BusSpec, BusType, KindSpec, NodeKind};
pub use error::{GraphError, Result};
pub use export::{export_arxml, export_csv, export_json, export_plantuml, parse_project};
pub use model::{AttrMap, AttrValue, CommEdge, ComponentNode, GraphSnapshot, Position};
pub use session::EditorSession;
pub use someip::{export_someip_json, someip_config, SomeIpConfig, SomeIpService};
pub use store::GraphStore;
pub use validate::{validate, validate_network, validate_redundancy, Issue, IssueKind};
