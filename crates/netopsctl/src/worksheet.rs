//! Evidence collection worksheet
//!
//! Appends a timestamped "commands to run / paste results here" block to
//! whatever evidence text already exists.

use chrono::Local;
use netops_common::{IncidentCategory, Role, Topology};

/// Inputs for one worksheet block
#[derive(Debug, Clone)]
pub struct WorksheetBlock<'a> {
    pub category: IncidentCategory,
    pub role: Role,
    pub interface: Option<&'a str>,
    pub topology: &'a Topology,
    pub suggestions: &'a str,
    pub timestamp: &'a str,
}

/// Local time in a sortable form
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Append a worksheet block to `existing`
pub fn append_worksheet(existing: &str, block: &WorksheetBlock) -> String {
    let mut out = existing.trim_end().to_string();
    if !out.is_empty() {
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "=== Evidence Collection Worksheet ({}) ===\n",
        block.timestamp
    ));
    out.push_str(&format!(
        "Incident Type: {}\n",
        block.category.display_label()
    ));
    out.push_str(&format!("Role: {}", block.role.platform_label()));
    if let Some(ifc) = block.interface.filter(|i| !i.is_empty()) {
        out.push_str(&format!("\nInterface Focus: {}", ifc));
    }
    out.push('\n');
    out.push_str(&format!(
        "Defaults: Access={}, Core={}, WLC={}, APs={}\n",
        block.topology.access,
        block.topology.core,
        block.topology.wireless,
        block.topology.access_points
    ));
    out.push_str("\n--- Commands to run ---\n");
    out.push_str(block.suggestions);
    out.push_str("\n\n--- Paste results below (sanitized) ---\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block<'a>(topology: &'a Topology, interface: Option<&'a str>) -> WorksheetBlock<'a> {
        WorksheetBlock {
            category: IncidentCategory::Wireless,
            role: Role::Wlc,
            interface,
            topology,
            suggestions: "show ap summary",
            timestamp: "2026-01-02 03:04:05",
        }
    }

    #[test]
    fn test_empty_evidence_starts_with_header() {
        let topology = Topology::default();
        let out = append_worksheet("", &block(&topology, None));
        assert!(out.starts_with("=== Evidence Collection Worksheet (2026-01-02 03:04:05) ==="));
        assert!(out.contains("Role: Wireless (Catalyst 9800)\nDefaults:"));
        assert!(out.ends_with("--- Paste results below (sanitized) ---\n"));
    }

    #[test]
    fn test_appends_after_existing_text() {
        let topology = Topology::default();
        let out = append_worksheet("earlier notes\n\n\n", &block(&topology, Some("Gi1/0/3")));
        assert!(out.starts_with("earlier notes\n\n=== Evidence Collection Worksheet"));
        assert!(out.contains("Interface Focus: Gi1/0/3\n"));
        assert!(out.contains("--- Commands to run ---\nshow ap summary\n"));
    }
}
