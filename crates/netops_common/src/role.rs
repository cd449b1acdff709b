//! Role resolution: which kind of box are we troubleshooting.
//!
//! An explicit operator choice is honored unless the environment notes
//! name the platform outright. Two markers are strong enough to override:
//! - core switch OS/model (Nexus, N9K, NX-OS) forces `Core`
//! - wireless controller (9800, WLC) forces `Wlc`
//!
//! When both markers are present the controller marker wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::category::IncidentCategory;

static CORE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)nexus|n9k|nx-?os").expect("static regex"));

static WLC_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)9800|wlc").expect("static regex"));

/// Effective operating role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Access / IDF edge switch
    #[default]
    Access,
    /// Core / aggregation / root
    Core,
    /// Wireless LAN controller
    Wlc,
}

impl Role {
    /// Parse a host value. Blank or unknown means "unset".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "access" | "edge" | "idf" => Some(Self::Access),
            "core" | "aggregation" | "root" => Some(Self::Core),
            "wlc" | "wireless" | "controller" => Some(Self::Wlc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Core => "core",
            Self::Wlc => "wlc",
        }
    }

    /// Long label with the assumed platform
    pub fn platform_label(&self) -> &'static str {
        match self {
            Self::Access => "Access/IDF (Cat9300/9300X)",
            Self::Core => "Core/Root (Nexus 9K)",
            Self::Wlc => "Wireless (Catalyst 9800)",
        }
    }

    /// Starting role when the operator only picked an incident category
    pub fn default_for_category(category: IncidentCategory) -> Self {
        match category {
            IncidentCategory::Wireless => Self::Wlc,
            _ => Self::Access,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which environment marker, if any, overrode the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleMarker {
    Core,
    Wlc,
}

/// Explicit selection plus the free-text environment notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleContext {
    pub selected: Option<Role>,
    pub environment: String,
}

impl RoleContext {
    pub fn new(selected: Option<Role>, environment: impl Into<String>) -> Self {
        Self {
            selected,
            environment: environment.into(),
        }
    }

    /// Strongest environment marker present
    pub fn marker(&self) -> Option<RoleMarker> {
        if WLC_MARKER_RE.is_match(&self.environment) {
            Some(RoleMarker::Wlc)
        } else if CORE_MARKER_RE.is_match(&self.environment) {
            Some(RoleMarker::Core)
        } else {
            None
        }
    }

    pub fn resolve(&self) -> Role {
        let role = match self.marker() {
            Some(RoleMarker::Wlc) => Role::Wlc,
            Some(RoleMarker::Core) => Role::Core,
            None => self.selected.unwrap_or_default(),
        };
        debug!(
            selected = ?self.selected,
            marker = ?self.marker(),
            effective = %role,
            "role resolved"
        );
        role
    }
}

/// Resolve the effective role from an optional selection and environment notes.
pub fn resolve_role(selected: Option<Role>, environment: &str) -> Role {
    RoleContext::new(selected, environment).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_access() {
        assert_eq!(resolve_role(None, ""), Role::Access);
    }

    #[test]
    fn test_parse_blank_is_unset() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("  "), None);
        assert_eq!(Role::parse("CORE"), Some(Role::Core));
    }

    #[test]
    fn test_default_for_category() {
        assert_eq!(Role::default_for_category(IncidentCategory::Wireless), Role::Wlc);
        assert_eq!(Role::default_for_category(IncidentCategory::Dhcp), Role::Access);
    }
}
