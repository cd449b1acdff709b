//! Offline cause ranking.
//!
//! A rule-based first pass at "what is probably wrong", for when no
//! approved assistant is available. Signals detected over symptoms and
//! pasted evidence fire entries in two declarative tables:
//! - CAUSE_RULES: candidate causes with a fixed score (1-9)
//! - CHECK_RULES: follow-up check fragments
//!
//! Causes are stable-sorted by score, so ties keep table order. Checks are
//! deduplicated in insertion order and capped.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::category::IncidentCategory;
use crate::error::NetopsError;
use crate::signals::{detect, Detection, Signal};

/// Causes shown in the rendered report
pub const MAX_CAUSES_SHOWN: usize = 5;

/// Checklist cap
pub const MAX_CHECKS: usize = 10;

const DEFAULT_IMPACT: &str = "users in a limited area";
const DEFAULT_STARTED: &str = "recently";

const INSUFFICIENT_TITLE: &str = "Insufficient evidence to narrow down";
const INSUFFICIENT_RATIONALE: &str =
    "Paste interface counters/logs/WLC client or AP join output for better offline triage.";

const BASELINE_CHECKS: &[&str] = &[
    "Confirm scope: isolated VLAN/IDF/WLC or widespread?",
    "Check for recent change/power work around start time.",
];

const ADVISORY_NOTE: &str =
    "Note: Offline triage is heuristic. For higher confidence, use approved AI with the generated prompt.";

// ============================================================================
// Rule tables
// ============================================================================

/// When a rule fires
#[derive(Debug, Clone, Copy)]
struct Trigger {
    /// Any of these signals
    any_of: &'static [Signal],
    /// ...or this incident category
    category: Option<IncidentCategory>,
    /// Additionally require a wireless context
    wireless_only: bool,
}

impl Trigger {
    const fn on(any_of: &'static [Signal]) -> Self {
        Self {
            any_of,
            category: None,
            wireless_only: false,
        }
    }

    const fn or_category(self, category: IncidentCategory) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    const fn in_wireless(self) -> Self {
        Self {
            wireless_only: true,
            ..self
        }
    }

    fn fires(&self, category: IncidentCategory, detection: &Detection) -> bool {
        let matched = detection.has_any(self.any_of) || self.category == Some(category);
        matched && (!self.wireless_only || wireless_context(category, detection))
    }
}

/// Wireless category selected, or controller-side vocabulary in the text
fn wireless_context(category: IncidentCategory, detection: &Detection) -> bool {
    category == IncidentCategory::Wireless || detection.has(Signal::WirelessControl)
}

struct CauseRule {
    trigger: Trigger,
    title: &'static str,
    rationale: &'static str,
    score: u8,
}

struct CheckRule {
    trigger: Trigger,
    checks: &'static [&'static str],
}

const CAUSE_RULES: &[CauseRule] = &[
    CauseRule {
        trigger: Trigger::on(&[Signal::PhyErrors]),
        title: "Physical layer errors (fiber/optic/cable/SFP)",
        rationale: "CRC / input errors usually point to optic, patch, or cabling issues.",
        score: 9,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::LinkEvents]),
        title: "Interface flapping (physical/power/UDLD/errdisable)",
        rationale: "Repeated link up/down or errdisable indicates instability on the port or its neighbor.",
        score: 9,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::Poe]),
        title: "PoE / power budget or negotiation issue",
        rationale: "PoE events can bounce phones/APs; power denied hints at budget/negotiation.",
        score: 7,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::SpanningTree]),
        title: "Layer-2 loop or STP instability",
        rationale: "Topology change storms / STP churn often mean a loop or miswired edge.",
        score: 8,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::Lacp]),
        title: "Port-channel/LACP inconsistency or member flap",
        rationale: "EtherChannel problems can blackhole traffic or flap if members disagree.",
        score: 7,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::DhcpFailure]),
        title: "DHCP failure (scope exhaustion/relay/path)",
        rationale: "APIPA/lease failures usually mean DHCP scope, helper/relay, or path issues.",
        score: 8,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::DnsFailure]),
        title: "DNS resolution issue (DNS server reachability or service)",
        rationale: "NSLOOKUP failures suggest DNS reachability/service problems.",
        score: 7,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::VpnClient]),
        title: "VPN issue detected",
        rationale: "Likely upstream reachability, DNS resolution of VPN gateway, or firewall/policy blocking. Confirm if non-VPN internet works.",
        score: 3,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::M365Apps]),
        title: "M365 app symptom detected (Teams/Outlook/O365)",
        rationale: "Often DNS/proxy/routing/policy issue. Validate DNS resolution + reachability to Microsoft endpoints.",
        score: 2,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::LoginFailure]),
        title: "Login / Authentication issue detected",
        rationale: "Likely 802.1X/RADIUS/auth path issue (wired or wireless). Check auth sessions and RADIUS/WLC logs.",
        score: 4,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::Offline]).in_wireless(),
        title: "User reports 'Offline / No Internet'",
        rationale: "End-user symptom indicator, could be DNS, DHCP, or upstream/WAN. Verify IP/gateway reachability and DNS resolution tests.",
        score: 4,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::PrintFailure]).in_wireless(),
        title: "Printing issue (printer offline / can't print)",
        rationale: "Often VLAN/ACL segmentation, printer IP change, port-security/802.1X, or local spooler. Verify ping/ARP/MAC path to printer.",
        score: 3,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::WirelessControl]),
        title: "Wireless control-path issue (CAPWAP/DTLS/AP join)",
        rationale: "CAPWAP/DTLS/join errors often mean VLAN/DHCP/cert/path problems.",
        score: 8,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::AaaFailure]).in_wireless(),
        title: "802.1X/RADIUS auth failures",
        rationale: "EAP/RADIUS failures indicate AAA policy, cert, or backend reachability.",
        score: 7,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::Wan]).or_category(IncidentCategory::Wan),
        title: "WAN routing/transport problem (ISP/circuit/BGP/OSPF)",
        rationale: "Edge routing or provider transport instability can cause widespread impact.",
        score: 7,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::Cpu]),
        title: "Device performance issue (CPU/queue drops)",
        rationale: "High CPU/queues can cause intermittent timeouts and control-plane issues.",
        score: 6,
    },
    CauseRule {
        trigger: Trigger::on(&[Signal::Mtu]),
        title: "MTU/fragmentation mismatch",
        rationale: "MTU issues cause weird app failures and some tunnels/WAN problems.",
        score: 5,
    },
];

const CHECK_RULES: &[CheckRule] = &[
    CheckRule {
        trigger: Trigger::on(&[Signal::PhyErrors, Signal::LinkEvents]),
        checks: &[
            "Check suspected uplink: show interface <x> ; show interface counters errors",
            "Check flaps/errdisable: show logging | i LINK|UPDOWN|ERRDISABLE",
            "If fiber: clean/reseat, swap patch, swap SFP; check DOM if available.",
        ],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::Lacp]),
        checks: &["Validate EtherChannel: show etherchannel summary; verify members in-sync."],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::SpanningTree]),
        checks: &[
            "Check STP churn: show spanning-tree detail | i tc|topology|occurr",
            "Look for edge loop; confirm portfast/bpduguard on edge.",
        ],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::DhcpFailure]),
        checks: &[
            "Check DHCP scope utilization and free leases.",
            "Client: ipconfig /all (or ip a) + verify gateway reachability.",
            "Verify relay/helper-address path; dhcp snooping bindings if used.",
        ],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::DnsFailure]),
        checks: &["Test DNS reachability: ping DNS server; nslookup known site via DNS server."],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::WirelessControl]).or_category(IncidentCategory::Wireless),
        checks: &[
            "WLC: show ap summary; show ap join stats summary; show wireless client summary.",
            "Logs: show logging | i CAPWAP|DTLS|join|deauth|EAP|RADIUS",
        ],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::Wan]).or_category(IncidentCategory::Wan),
        checks: &[
            "Edge: show ip route | i 0.0.0.0 ; show interface <wan-interface>",
            "Reachability: ping/traceroute 8.8.8.8 (or known upstream).",
        ],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::Poe]),
        checks: &["PoE: show power inline; show logging | i ILPOWER|POWER"],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::Cpu]),
        checks: &["CPU: show processes cpu sorted | ex 0.00; check interface output drops."],
    },
    CheckRule {
        trigger: Trigger::on(&[Signal::Mtu]),
        checks: &["MTU: ping <target> size 1500 df-bit; compare MTU on both ends of the path."],
    },
];

// ============================================================================
// Report
// ============================================================================

/// One ranked candidate cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cause {
    pub title: &'static str,
    pub rationale: &'static str,
    pub score: u8,
}

impl Cause {
    fn insufficient() -> Self {
        Self {
            title: INSUFFICIENT_TITLE,
            rationale: INSUFFICIENT_RATIONALE,
            score: 1,
        }
    }
}

/// Knobs for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriageOptions {
    /// Promised interval in the status update draft
    pub next_update_minutes: u32,
}

impl Default for TriageOptions {
    fn default() -> Self {
        Self {
            next_update_minutes: 30,
        }
    }
}

/// Raw incident fields the ranker looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageRequest {
    pub category: IncidentCategory,
    pub symptoms: String,
    pub evidence: String,
    pub impact: String,
    pub started: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    /// Every fired cause, best first; never empty
    pub causes: Vec<Cause>,
    /// Ordered, unique, at most MAX_CHECKS
    pub checks: Vec<String>,
    pub status_update: String,
    /// Signals that fired, for the curious
    pub signals: Vec<Signal>,
}

impl TriageReport {
    pub fn top_cause(&self) -> &Cause {
        // causes always holds at least the sentinel
        &self.causes[0]
    }

    pub fn render(&self) -> String {
        let causes = self
            .causes
            .iter()
            .take(MAX_CAUSES_SHOWN)
            .enumerate()
            .map(|(i, c)| format!("- {}) {} — {}", i + 1, c.title, c.rationale))
            .collect::<Vec<_>>()
            .join("\n");

        let checks = self
            .checks
            .iter()
            .enumerate()
            .map(|(i, c)| format!("- [ ] {}) {}", i + 1, c))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "OFFLINE TRIAGE (rule-based)\n\n1) Likely causes (ranked)\n{}\n\n2) Next checks (top 10)\n{}\n\n3) Teams update (draft)\n{}\n\n{}",
            causes, checks, self.status_update, ADVISORY_NOTE
        )
    }

    pub fn to_json(&self) -> Result<String, NetopsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Trimmed value, or the fallback when blank
fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

fn ordered_unique(items: impl IntoIterator<Item = &'static str>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(*item))
        .take(cap)
        .map(String::from)
        .collect()
}

/// Rank causes and assemble checks for one incident.
pub fn triage(request: &TriageRequest, options: &TriageOptions) -> TriageReport {
    let category = request.category;
    let detection = detect(&request.symptoms, &request.evidence);

    let mut causes: Vec<Cause> = CAUSE_RULES
        .iter()
        .filter(|rule| rule.trigger.fires(category, &detection))
        .map(|rule| Cause {
            title: rule.title,
            rationale: rule.rationale,
            score: rule.score,
        })
        .collect();

    if causes.is_empty() {
        causes.push(Cause::insufficient());
    }
    // Vec::sort_by is stable: equal scores keep table order
    causes.sort_by(|a, b| b.score.cmp(&a.score));

    let fired_checks = CHECK_RULES
        .iter()
        .filter(|rule| rule.trigger.fires(category, &detection))
        .flat_map(|rule| rule.checks.iter().copied());
    let checks = ordered_unique(BASELINE_CHECKS.iter().copied().chain(fired_checks), MAX_CHECKS);

    let status_update = format!(
        "Investigating network issue impacting {} (started ~{}). Early indicators suggest: {}. Next update in {} minutes.",
        or_default(&request.impact, DEFAULT_IMPACT),
        or_default(&request.started, DEFAULT_STARTED),
        causes[0].title,
        options.next_update_minutes
    );

    debug!(
        category = %category,
        causes = causes.len(),
        top = causes[0].title,
        checks = checks.len(),
        "offline triage ranked"
    );

    TriageReport {
        causes,
        checks,
        status_update,
        signals: detection.detected(),
    }
}

/// Render the offline triage report for one incident.
///
/// Blank `impact` / `started` fall back to "users in a limited area" /
/// "recently".
pub fn rank_causes(
    category: IncidentCategory,
    symptoms: &str,
    evidence: &str,
    impact: &str,
    started: &str,
) -> String {
    let request = TriageRequest {
        category,
        symptoms: symptoms.to_string(),
        evidence: evidence.to_string(),
        impact: impact.to_string(),
        started: started.to_string(),
    };
    triage(&request, &TriageOptions::default()).render()
}

/// Same as [`rank_causes`].
pub fn analyze_offline(
    category: IncidentCategory,
    symptoms: &str,
    evidence: &str,
    impact: &str,
    started: &str,
) -> String {
    rank_causes(category, symptoms, evidence, impact, started)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: IncidentCategory, symptoms: &str, evidence: &str) -> TriageRequest {
        TriageRequest {
            category,
            symptoms: symptoms.to_string(),
            evidence: evidence.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cause_scores_in_range() {
        assert!(CAUSE_RULES.iter().all(|r| (1..=9).contains(&r.score)));
    }

    #[test]
    fn test_aaa_cause_needs_wireless_context() {
        let wired = triage(
            &request(IncidentCategory::Wired, "authentication failed for users", ""),
            &TriageOptions::default(),
        );
        assert!(!wired.causes.iter().any(|c| c.title == "802.1X/RADIUS auth failures"));

        let wireless = triage(
            &request(IncidentCategory::Wireless, "authentication failed for users", ""),
            &TriageOptions::default(),
        );
        assert!(wireless.causes.iter().any(|c| c.title == "802.1X/RADIUS auth failures"));
    }

    #[test]
    fn test_wan_category_forces_wan_cause() {
        let report = triage(
            &request(IncidentCategory::Wan, "", ""),
            &TriageOptions::default(),
        );
        assert_eq!(report.top_cause().score, 7);
        assert!(report.top_cause().title.starts_with("WAN routing"));
    }

    #[test]
    fn test_status_update_cadence() {
        let report = triage(
            &request(IncidentCategory::Unspecified, "", ""),
            &TriageOptions {
                next_update_minutes: 15,
            },
        );
        assert!(report.status_update.ends_with("Next update in 15 minutes."));
        assert!(report.status_update.contains("impacting users in a limited area"));
        assert!(report.status_update.contains("(started ~recently)"));
    }

    #[test]
    fn test_ordered_unique_caps() {
        let items = ["a", "b", "a", "c", "b", "d"];
        assert_eq!(ordered_unique(items, 3), vec!["a", "b", "c"]);
    }
}
