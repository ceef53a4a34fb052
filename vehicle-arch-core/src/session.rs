//! Editor session state: current selection and the armed component kind
//! for the next placement. Kept apart from the store so selection churn
//! never touches graph data.

use crate::catalog::NodeKind;

/// Per-session UI state. Node and edge selection are mutually exclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorSession {
    selected_node: Option<String>,
    selected_edge: Option<String>,
    /// Kind used by the next node placement.
    pub tool: NodeKind,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            selected_node: None,
            selected_edge: None,
            tool: NodeKind::Ecu,
        }
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_node(&mut self, id: impl Into<String>) {
        self.selected_node = Some(id.into());
        self.selected_edge = None;
    }

    pub fn select_edge(&mut self, id: impl Into<String>) {
        self.selected_edge = Some(id.into());
        self.selected_node = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected_node = None;
        self.selected_edge = None;
    }

    /// Drop the selection if it points at a removed entity. Call after any
    /// store mutation that deletes nodes or edges.
    pub fn forget(&mut self, removed_id: &str) {
        if self.selected_node.as_deref() == Some(removed_id) {
            self.selected_node = None;
        }
        if self.selected_edge.as_deref() == Some(removed_id) {
            self.selected_edge = None;
        }
    }

    pub fn selected_node(&self) -> Option<&str> {
        self.selected_node.as_deref()
    }

    pub fn selected_edge(&self) -> Option<&str> {
        self.selected_edge.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_arms_ecu_with_nothing_selected() {
        let session = EditorSession::new();
        assert_eq!(session.tool, NodeKind::Ecu);
        assert!(session.selected_node().is_none());
        assert!(session.selected_edge().is_none());
    }

    #[test]
    fn selections_are_mutually_exclusive() {
        let mut session = EditorSession::new();
        session.select_node("gw-1");
        assert_eq!(session.selected_node(), Some("gw-1"));

        session.select_edge("e-1");
        assert_eq!(session.selected_edge(), Some("e-1"));
        assert!(session.selected_node().is_none());

        session.select_node("gw-1");
        assert!(session.selected_edge().is_none());
    }

    #[test]
    fn forget_clears_only_matching_selection() {
        let mut session = EditorSession::new();
        session.select_node("gw-1");
        session.forget("other");
        assert_eq!(session.selected_node(), Some("gw-1"));
        session.forget("gw-1");
        assert!(session.selected_node().is_none());
    }
}
