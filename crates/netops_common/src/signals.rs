//! Signal detection: the pattern catalog and the detector that runs it.
//!
//! Two vocabularies live in one catalog:
//! - Symptom scope: how end users describe trouble ("wifi keeps dropping",
//!   "can't print"). Tested against the symptoms text only; drives the
//!   evidence suggestion sections.
//! - Combined scope: how devices log trouble ("%LINK-3-UPDOWN", "CAPWAP",
//!   "servfail"). Tested against symptoms + pasted evidence; drives the
//!   offline cause ranking.
//!
//! Every entry is an independent boolean test. Several can fire on the same
//! input and nothing checks that they are exclusive.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::interface::{extract_interface_from_text, non_empty};

// ============================================================================
// Signal identifiers
// ============================================================================

/// Closed set of signals known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    // Symptom scope
    NoInternet,
    Wifi,
    LinkDown,
    Flapping,
    Slow,
    Dhcp,
    Dns,
    Printing,
    Loop,
    Dot1xAuth,
    Login,
    Vpn,
    M365,
    CollabApps,

    // Combined scope
    PhyErrors,
    LinkEvents,
    SpanningTree,
    Lacp,
    DhcpFailure,
    DnsFailure,
    VpnClient,
    M365Apps,
    LoginFailure,
    Offline,
    PrintFailure,
    WirelessControl,
    AaaFailure,
    Wan,
    Cpu,
    Poe,
    Mtu,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoInternet => "no-internet",
            Self::Wifi => "wifi",
            Self::LinkDown => "link-down",
            Self::Flapping => "flapping",
            Self::Slow => "slow",
            Self::Dhcp => "dhcp",
            Self::Dns => "dns",
            Self::Printing => "printing",
            Self::Loop => "loop",
            Self::Dot1xAuth => "dot1x-auth",
            Self::Login => "login",
            Self::Vpn => "vpn",
            Self::M365 => "m365",
            Self::CollabApps => "collab-apps",
            Self::PhyErrors => "phy-errors",
            Self::LinkEvents => "link-events",
            Self::SpanningTree => "stp",
            Self::Lacp => "lacp",
            Self::DhcpFailure => "dhcp-failure",
            Self::DnsFailure => "dns-failure",
            Self::VpnClient => "vpn-client",
            Self::M365Apps => "m365-apps",
            Self::LoginFailure => "login-failure",
            Self::Offline => "offline",
            Self::PrintFailure => "print-failure",
            Self::WirelessControl => "wireless-control",
            Self::AaaFailure => "aaa-failure",
            Self::Wan => "wan",
            Self::Cpu => "cpu",
            Self::Poe => "poe",
            Self::Mtu => "mtu",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symptom category a signal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Link,
    Flap,
    Performance,
    Dhcp,
    Dns,
    Wifi,
    Print,
    Loop,
    Auth,
    Vpn,
    M365,
    Wan,
}

/// Which text a signal is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Symptoms text only
    Symptoms,
    /// Symptoms followed by evidence
    Combined,
}

// ============================================================================
// Catalog
// ============================================================================

/// One declarative catalog row. Patterns are written for case-folded text.
#[derive(Debug, Clone, Copy)]
pub struct SignalRule {
    pub signal: Signal,
    pub scope: Scope,
    pub category: SignalCategory,
    pub pattern: &'static str,
}

const fn rule(
    signal: Signal,
    scope: Scope,
    category: SignalCategory,
    pattern: &'static str,
) -> SignalRule {
    SignalRule {
        signal,
        scope,
        category,
        pattern,
    }
}

use Scope::{Combined, Symptoms};
use SignalCategory as C;

/// The signal catalog, in declaration order
pub const SIGNAL_CATALOG: &[SignalRule] = &[
    // End-user vocabulary
    rule(
        Signal::NoInternet,
        Symptoms,
        C::Wan,
        r"no internet|internet down|offline|can'?t reach|can'?t load|websites? (won't|cant|cannot) load|no connection|connected but no internet|no connectivity",
    ),
    rule(
        Signal::Wifi,
        Symptoms,
        C::Wifi,
        r"wifi|wireless|ssid|roam|\bap\b|hotspot|signal|bars|connected to wifi|wifi connected|wifi keeps|keeps disconnecting|drops? (often|constantly)?|can'?t connect to wifi|unable to connect|weak signal|poor signal|auth(entication)?|802\.1x|radius|eap|password|wrong password",
    ),
    rule(
        Signal::LinkDown,
        Symptoms,
        C::Link,
        r"link|down|updown|unplugged|cable|errdisable|udld|line protocol|notconnect|not connect",
    ),
    rule(
        Signal::Flapping,
        Symptoms,
        C::Flap,
        r"flap|flapping|bounce|bouncing|up/down|up down|disconnect(ing)?|drops|keeps dropping|intermittent",
    ),
    rule(
        Signal::Slow,
        Symptoms,
        C::Performance,
        r"slow|sluggish|lag|latency|delay|buffer|buffering|choppy|stutter|packet loss|loss|timeouts?|timing out",
    ),
    rule(
        Signal::Dhcp,
        Symptoms,
        C::Dhcp,
        r"dhcp|apipa|169\.254|self[- ]assigned|limited (connectivity)?|no ip|missing ip|can'?t get (an )?ip|renew|lease",
    ),
    rule(
        Signal::Dns,
        Symptoms,
        C::Dns,
        r"dns|name resolve|cannot resolve|can'?t resolve|nxdom|servfail|lookup|site not found|address not found|could not find host",
    ),
    rule(
        Signal::Printing,
        Symptoms,
        C::Print,
        r"can'?t print|cannot print|printing|printer|print queue|stuck printing|printer offline|offline printer|spooler",
    ),
    rule(
        Signal::Loop,
        Symptoms,
        C::Loop,
        r"loop|broadcast|storm|spanning|stp|bpdu|topology change|tcn",
    ),
    rule(
        Signal::Dot1xAuth,
        Symptoms,
        C::Auth,
        r"802\.1x|dot1x|eap|radius|auth failed|authentication failed|can'?t authenticate|wrong password|keeps asking for password",
    ),
    rule(
        Signal::Login,
        Symptoms,
        C::Auth,
        r"can'?t login|cannot login|login failed|password|auth failed|authentication failed|802\.1x|dot1x|radius|eap",
    ),
    rule(
        Signal::Vpn,
        Symptoms,
        C::Vpn,
        r"vpn|anyconnect|secure client|globalprotect|pulse secure|forticlient|tunnel|ipsec|ssl vpn|split tunnel",
    ),
    rule(
        Signal::M365,
        Symptoms,
        C::M365,
        r"teams|outlook|office 365|o365|microsoft 365|m365|onedrive|sharepoint",
    ),
    rule(
        Signal::CollabApps,
        Symptoms,
        C::M365,
        r"teams|outlook|o365|office 365|microsoft 365|onedrive|sharepoint|zoom|webex",
    ),

    // Device / log vocabulary
    rule(
        Signal::PhyErrors,
        Combined,
        C::Link,
        r"\bcrc\b|input errors|output errors|giant|runts|fcs",
    ),
    rule(
        Signal::LinkEvents,
        Combined,
        C::Flap,
        r"%link-|updown|changed state to down|line protocol.*down|errdisable|udld",
    ),
    rule(
        Signal::SpanningTree,
        Combined,
        C::Loop,
        r"topology change|tcn|spanning-tree|stp|root.*changed",
    ),
    rule(
        Signal::Lacp,
        Combined,
        C::Link,
        r"etherchannel|port-channel|lacp|pagg|bundle",
    ),
    rule(
        Signal::DhcpFailure,
        Combined,
        C::Dhcp,
        r"dhcp|dora|lease|apipa|169\.254|no address|discover|offer",
    ),
    rule(
        Signal::DnsFailure,
        Combined,
        C::Dns,
        r"dns|nslookup|servfail|nxdom|cannot resolve|name resolution",
    ),
    rule(
        Signal::VpnClient,
        Combined,
        C::Vpn,
        r"vpn|anyconnect|secure client|globalprotect|tunnel|ipsec|ssl vpn",
    ),
    rule(
        Signal::M365Apps,
        Combined,
        C::M365,
        r"teams|outlook|office 365|o365|microsoft 365|m365|onedrive|sharepoint",
    ),
    rule(
        Signal::LoginFailure,
        Combined,
        C::Auth,
        r"can'?t login|cannot login|login failed|password|auth failed|authentication failed|802\.1x|dot1x|radius|eap",
    ),
    rule(
        Signal::Offline,
        Combined,
        C::Wan,
        r"no internet|internet down|offline|connected but no internet|can'?t load|no connection|limited connectivity",
    ),
    rule(
        Signal::PrintFailure,
        Combined,
        C::Print,
        r"can'?t print|cannot print|printer offline|print queue|spooler|printing",
    ),
    rule(
        Signal::WirelessControl,
        Combined,
        C::Wifi,
        r"capwap|dtls|deauth|disassoc|eap|802\.1x|radius|aaa|wlc|join",
    ),
    rule(
        Signal::AaaFailure,
        Combined,
        C::Auth,
        r"eap|802\.1x|radius|aaa|authentication failed|failed.*auth",
    ),
    rule(
        Signal::Wan,
        Combined,
        C::Wan,
        r"bgp|ospf|pppoe|circuit|provider|\bisp\b",
    ),
    rule(
        Signal::Cpu,
        Combined,
        C::Performance,
        r"high cpu|cpu|queue|drops|overutil",
    ),
    rule(
        Signal::Poe,
        Combined,
        C::Link,
        r"power inline|poe|inline power|power denied|ilpower",
    ),
    rule(
        Signal::Mtu,
        Combined,
        C::Performance,
        r"mtu|fragment|too big|df set",
    ),
];

/// A catalog row with its pattern compiled
struct CompiledSignal {
    rule: SignalRule,
    regex: Regex,
}

static COMPILED_CATALOG: LazyLock<Vec<CompiledSignal>> = LazyLock::new(|| {
    SIGNAL_CATALOG
        .iter()
        .filter_map(|rule| {
            Regex::new(rule.pattern)
                .ok()
                .map(|regex| CompiledSignal { rule: *rule, regex })
        })
        .collect()
});

/// First dotted quad with every octet in 0-255
static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(?:25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(?:25[0-5]|2[0-4]\d|1?\d?\d)\b")
        .expect("static regex")
});

/// Extract the first valid IPv4 address from text
pub fn first_ipv4(text: &str) -> Option<String> {
    IPV4_RE.find(text).map(|m| m.as_str().to_string())
}

// ============================================================================
// Detection
// ============================================================================

/// Labels for the human summary line, in display order
const SUMMARY_LABELS: &[(&[Signal], &str)] = &[
    (&[Signal::NoInternet], "no internet/offline"),
    (&[Signal::Wifi], "wifi/wireless"),
    (&[Signal::LinkDown], "link/down"),
    (&[Signal::Flapping], "flapping/intermittent"),
    (&[Signal::Slow], "slow/latency/loss"),
    (&[Signal::Dhcp], "dhcp/no ip"),
    (&[Signal::Dns], "dns/resolve"),
    (&[Signal::Printing], "printing"),
    (&[Signal::Loop], "stp/loop"),
    (&[Signal::Vpn], "vpn"),
    (&[Signal::M365], "m365"),
    (&[Signal::Login, Signal::Dot1xAuth], "login/auth"),
];

/// Result of one detection pass. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Presence of every catalog signal
    pub signals: BTreeMap<Signal, bool>,
    /// First IPv4 address in the symptoms
    pub ip_hint: Option<String>,
    /// First interface mentioned, normalized
    pub interface: Option<String>,
}

impl Detection {
    pub fn has(&self, signal: Signal) -> bool {
        self.signals.get(&signal).copied().unwrap_or(false)
    }

    pub fn has_any(&self, signals: &[Signal]) -> bool {
        signals.iter().any(|s| self.has(*s))
    }

    /// Detected signals in catalog order
    pub fn detected(&self) -> Vec<Signal> {
        SIGNAL_CATALOG
            .iter()
            .map(|s| s.signal)
            .filter(|s| self.has(*s))
            .collect()
    }

    /// Human labels of detected end-user symptoms
    pub fn symptom_labels(&self) -> Vec<&'static str> {
        SUMMARY_LABELS
            .iter()
            .filter(|(signals, _)| self.has_any(signals))
            .map(|(_, label)| *label)
            .collect()
    }

    /// One-line summary, "(none)" when nothing matched
    pub fn summary(&self) -> String {
        let labels = self.symptom_labels();
        if labels.is_empty() {
            "(none)".to_string()
        } else {
            labels.join(", ")
        }
    }
}

/// Run the whole catalog over the given texts.
///
/// Symptom-scope signals see only `symptoms`; combined-scope signals see
/// `symptoms` and `evidence` joined by a newline. The IP hint comes from the
/// symptoms alone; the interface hint falls back to the evidence. Matching is on lowercased
/// text. Never fails: no match just means "not detected".
pub fn detect(symptoms: &str, evidence: &str) -> Detection {
    let symptoms_lc = symptoms.to_lowercase();
    let combined_lc = format!("{}\n{}", symptoms, evidence).to_lowercase();

    let signals: BTreeMap<Signal, bool> = COMPILED_CATALOG
        .iter()
        .map(|compiled| {
            let haystack = match compiled.rule.scope {
                Scope::Symptoms => &symptoms_lc,
                Scope::Combined => &combined_lc,
            };
            (compiled.rule.signal, compiled.regex.is_match(haystack))
        })
        .collect();

    let ip_hint = first_ipv4(&symptoms_lc);
    let interface = non_empty(extract_interface_from_text(symptoms))
        .or_else(|| non_empty(extract_interface_from_text(evidence)));

    let detection = Detection {
        signals,
        ip_hint,
        interface,
    };

    debug!(
        detected = ?detection.detected(),
        ip_hint = ?detection.ip_hint,
        interface = ?detection.interface,
        "signal detection complete"
    );

    detection
}
