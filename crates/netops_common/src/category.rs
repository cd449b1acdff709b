//! Incident category as selected by the operator.
//!
//! Hosts hand us whatever their dropdown produced ("Wired", "wireless",
//! "DHCP/DNS", "WAN/ISP", ...). Parsing is lenient and case-insensitive;
//! anything unrecognized is `Unspecified`, never an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentCategory {
    /// Wired access / general connectivity
    Wired,
    /// Wi-Fi clients, APs, controller
    Wireless,
    /// Addressing and name resolution
    Dhcp,
    /// Edge routing and provider transport
    Wan,
    /// Slowness, latency, loss
    Performance,
    /// Intermittent drops
    Intermittent,
    /// Operator picked "Other"
    Other,
    /// Blank or unknown selection
    #[default]
    Unspecified,
}

impl IncidentCategory {
    /// Parse a host-supplied category value.
    pub fn parse(raw: &str) -> Self {
        let norm = raw.trim().to_lowercase();
        match norm.as_str() {
            "wired" | "connectivity" | "lan" => Self::Wired,
            "wireless" | "wifi" | "wi-fi" | "wlan" => Self::Wireless,
            "dhcp" | "dns" | "dhcp/dns" | "dhcp-dns" => Self::Dhcp,
            "wan" | "isp" | "wan/isp" | "wan-isp" => Self::Wan,
            "performance" | "slow" => Self::Performance,
            "intermittent" | "flapping" => Self::Intermittent,
            "other" => Self::Other,
            _ => Self::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wired => "wired",
            Self::Wireless => "wireless",
            Self::Dhcp => "dhcp",
            Self::Wan => "wan",
            Self::Performance => "performance",
            Self::Intermittent => "intermittent",
            Self::Other => "other",
            Self::Unspecified => "unspecified",
        }
    }

    /// Label used in prompts and worksheets
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Wired => "Wired",
            Self::Wireless => "Wireless",
            Self::Dhcp => "DHCP/DNS",
            Self::Wan => "WAN/ISP",
            Self::Performance => "Performance",
            Self::Intermittent => "Intermittent",
            Self::Other => "Other",
            Self::Unspecified => "(not provided)",
        }
    }

    /// Wired sections apply to explicit wired incidents and the catch-all bucket.
    pub fn is_wired_like(&self) -> bool {
        matches!(self, Self::Wired | Self::Other)
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
