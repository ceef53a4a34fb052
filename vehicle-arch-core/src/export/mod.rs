//! Serializers to the four external representations. All are pure
//! `snapshot -> String` functions; the empty graph renders syntactically
//! valid output in every format. File and network I/O belong to callers.

pub mod arxml;
pub mod csv;
pub mod json;
pub mod plantuml;

pub use arxml::export_arxml;
pub use csv::export_csv;
pub use json::{export_json, parse_project, ProjectImport};
pub use plantuml::export_plantuml;
