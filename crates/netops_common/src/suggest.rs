//! Evidence suggestions: which commands to run, given what the user said.
//!
//! The output is a plain-text checklist grouped into sections. Sections are
//! a prioritized decision table of (predicate, renderer) pairs evaluated in
//! a fixed order; each renderer branches on the effective role and fills
//! command templates with the interface / IP hint we managed to extract.
//!
//! Pure: identical arguments give byte-identical output. Timestamps belong
//! to whoever embeds this text in a worksheet.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::category::IncidentCategory;
use crate::interface::{extract_interface_from_text, non_empty, normalize_interface};
use crate::render::{OutputBlock, TemplateVars};
use crate::role::{resolve_role, Role};
use crate::signals::{detect, Detection, Signal};

/// Symptoms this short carry no usable detail
const GENERIC_MIN_CHARS: usize = 25;

static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^help|issue|problem|down|not working|trouble").expect("static regex")
});

// ============================================================================
// Topology legend
// ============================================================================

/// Platforms assumed per role, printed in the preamble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default = "default_access")]
    pub access: String,
    #[serde(default = "default_core")]
    pub core: String,
    #[serde(default = "default_wireless")]
    pub wireless: String,
    #[serde(default = "default_access_points")]
    pub access_points: String,
}

fn default_access() -> String {
    "Catalyst 9300/9300X (IOS-XE)".to_string()
}

fn default_core() -> String {
    "Nexus 9000 (NX-OS)".to_string()
}

fn default_wireless() -> String {
    "Catalyst 9800 (IOS-XE)".to_string()
}

fn default_access_points() -> String {
    "CW9166D1-B / C9130AX / CW91661-B".to_string()
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            access: default_access(),
            core: default_core(),
            wireless: default_wireless(),
            access_points: default_access_points(),
        }
    }
}

// ============================================================================
// Request / context
// ============================================================================

/// Raw host field values for one suggestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub category: IncidentCategory,
    pub symptoms: String,
    pub environment: String,
    pub role: Option<Role>,
    pub interface_override: String,
}

/// Everything the section table looks at
struct SectionContext<'a> {
    category: IncidentCategory,
    role: Role,
    detection: &'a Detection,
    vars: TemplateVars,
    generic: bool,
    topology: &'a Topology,
}

impl SectionContext<'_> {
    fn has(&self, signal: Signal) -> bool {
        self.detection.has(signal)
    }

    fn has_interface(&self) -> bool {
        self.vars.interface.is_some()
    }

    fn wireless_involved(&self) -> bool {
        self.category == IncidentCategory::Wireless
            || self.has(Signal::Wifi)
            || self.role == Role::Wlc
    }
}

/// Short or filler-only symptom text
pub fn is_generic_symptoms(symptoms: &str) -> bool {
    let s = symptoms.trim().to_lowercase();
    s.chars().count() < GENERIC_MIN_CHARS || FILLER_RE.is_match(&s)
}

// ============================================================================
// Section table
// ============================================================================

struct SectionRule {
    name: &'static str,
    applies: fn(&SectionContext) -> bool,
    render: fn(&SectionContext, &mut OutputBlock),
}

const SECTIONS: &[SectionRule] = &[
    SectionRule {
        name: "preamble",
        applies: |_| true,
        render: preamble,
    },
    SectionRule {
        name: "role-baseline",
        applies: |c| c.generic,
        render: role_baseline,
    },
    SectionRule {
        name: "baseline",
        applies: |_| true,
        render: general_baseline,
    },
    SectionRule {
        name: "no-internet",
        applies: |c| c.has(Signal::NoInternet),
        render: no_internet,
    },
    SectionRule {
        name: "m365",
        applies: |c| c.has(Signal::M365),
        render: m365,
    },
    SectionRule {
        name: "login-auth",
        applies: |c| c.has(Signal::Login) || c.has(Signal::Dot1xAuth),
        render: login_auth,
    },
    SectionRule {
        name: "vpn",
        applies: |c| c.has(Signal::Vpn),
        render: vpn,
    },
    SectionRule {
        name: "apps-offline",
        applies: |c| c.has(Signal::CollabApps) && c.has(Signal::NoInternet),
        render: apps_offline,
    },
    SectionRule {
        name: "printing",
        applies: |c| c.has(Signal::Printing),
        render: printing,
    },
    SectionRule {
        name: "interface-addons",
        applies: |_| true,
        render: interface_addons,
    },
    SectionRule {
        name: "wired-access",
        applies: |c| c.category.is_wired_like() && c.role == Role::Access,
        render: wired_access,
    },
    SectionRule {
        name: "wired-core",
        applies: |c| c.category.is_wired_like() && c.role == Role::Core,
        render: wired_core,
    },
    SectionRule {
        name: "wireless",
        applies: |c| c.wireless_involved(),
        render: wireless,
    },
    SectionRule {
        name: "flapping",
        applies: |c| c.has(Signal::Flapping),
        render: flapping,
    },
    SectionRule {
        name: "wan",
        applies: |c| c.category == IncidentCategory::Wan,
        render: wan_edge,
    },
    SectionRule {
        name: "dhcp-dns",
        applies: |c| {
            c.category == IncidentCategory::Dhcp || c.has(Signal::Dhcp) || c.has(Signal::Dns)
        },
        render: dhcp_dns,
    },
    SectionRule {
        name: "what-to-look-for",
        applies: |_| true,
        render: closing_legend,
    },
];

// Shared command groups

const ACCESS_PORT_DETAIL: &[&str] = &[
    "show interface {ifc}",
    "show interface {ifc} switchport",
    "show interface {ifc} counters errors",
    "show authentication sessions interface {ifc} details",
];

const UPSTREAM_PINGS: &[&str] = &[
    "ping <default-gateway> repeat 20",
    "ping 1.1.1.1 repeat 20",
    "ping 8.8.8.8 repeat 20",
    "traceroute 8.8.8.8",
];

const LOG_WINDOW_TIP: &str =
    "Tip: start 'last 200'. Earlier today: 'last 1000'. Yesterday: remove 'last' + filter hard.";

const FLAP_LOG_WINDOW_TIP: &str =
    "Tip: start with 'last 200'. Earlier today: 'last 1000'. Yesterday: remove 'last' + filter hard.";

fn preamble(ctx: &SectionContext, out: &mut OutputBlock) {
    out.line(format!("Detected from symptoms: {}", ctx.detection.summary()))
        .blank()
        .header("Assumed environment")
        .line(format!("Access/IDF: {}", ctx.topology.access))
        .line(format!("Core/Root:  {}", ctx.topology.core))
        .line(format!("Wireless:   {}", ctx.topology.wireless))
        .line(format!("APs:        {}", ctx.topology.access_points));

    let ifc = match &ctx.vars.interface {
        Some(ifc) => format!(" | Interface: {}", ifc),
        None => String::new(),
    };
    out.line(format!("Selected role: {}{}", ctx.role, ifc)).blank();
}

fn role_baseline(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Baseline evidence by role");
    match ctx.role {
        Role::Access => {
            out.line("Access (assume Catalyst 9300/9300X):")
                .lines([
                    "show interface status",
                    "show vlan brief",
                    "show ip interface brief",
                    "show logging | last 60",
                ])
                .blank();
            if ctx.has_interface() {
                out.templates(ACCESS_PORT_DETAIL, &ctx.vars).blank();
            }
        }
        Role::Core => {
            out.line("Core (assume Nexus 9000):")
                .lines([
                    "show ip interface brief",
                    "show ip route summary",
                    "show arp summary",
                    "show logging last 80",
                ])
                .blank();
        }
        Role::Wlc => {
            out.line("Wireless (assume Cisco 9800 WLC):")
                .lines([
                    "show wireless client summary",
                    "show ap summary",
                    "show wlan summary",
                    "show logging | last 80",
                ])
                .blank();
        }
    }
}

fn general_baseline(_ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Baseline (always useful)")
        .lines([
            "show logging | last 80",
            "show interfaces status",
            "show interface counters errors",
        ])
        .blank();
}

fn no_internet(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("User reports 'No Internet / Offline'");
    match ctx.role {
        Role::Access => {
            out.line("Access switch deep-dive (Cat9300/9300X):")
                .line("show interface status")
                .templates(ACCESS_PORT_DETAIL, &ctx.vars)
                .lines(["show vlan brief", "show ip dhcp snooping binding"])
                .blank();
        }
        Role::Core => {
            out.line("Core deep-dive (Nexus 9K):")
                .lines([
                    "show ip route <client-ip>",
                    "show ip route <dns-server-ip>",
                    "show ip arp | i <client-ip>",
                    "show ip arp | i <default-gateway-ip>",
                ])
                .blank();
        }
        Role::Wlc => {
            out.line("Wireless deep-dive (9800 WLC):")
                .lines([
                    "show wireless client summary",
                    "show ap summary",
                    "show logging | last 200 | i CAPWAP|DTLS|join|disassoc|deauth|EAP|RADIUS",
                    LOG_WINDOW_TIP,
                ])
                .blank();
        }
    }
    out.lines(UPSTREAM_PINGS.iter().copied())
        .lines(["nslookup google.com <dns-server>", "show ip route | i 0.0.0.0"])
        .blank();
}

fn m365(_ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("M365 issues (Teams/Outlook/O365/OneDrive)")
        .line("This often points to DNS/proxy/routing/policy more than a physical link issue.")
        .blank()
        .line("Client checks:")
        .lines([
            "- Is it only one user or many users?",
            "- Does web browsing work normally?",
            "- Wired vs Wi-Fi difference?",
            "- Capture exact error message + timestamp",
        ])
        .blank()
        .line("Quick network tests:")
        .lines(UPSTREAM_PINGS.iter().copied())
        .lines([
            "nslookup teams.microsoft.com <dns-server>",
            "nslookup outlook.office.com <dns-server>",
            "nslookup login.microsoftonline.com <dns-server>",
        ])
        .blank()
        .line("Device-side evidence:")
        .lines(["show ip route | i 0.0.0.0", "show logging | last 80"])
        .blank();
}

fn login_auth(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Login / Authentication (802.1X / RADIUS / Wi-Fi password)")
        .line("Goal: determine user-specific vs widespread auth-path issue.")
        .blank()
        .line("Fast questions (saves time):")
        .lines([
            "- One user or many users?",
            "- Wired only, Wi-Fi only, or both?",
            "- Exact error text + timestamp (very important)",
        ])
        .blank()
        .line("Switch-side evidence (Cat9300/9300X):")
        .templates(
            &[
                "show authentication sessions",
                "show authentication sessions interface {ifc} details",
                "show logging | i dot1x|mab|radius|eap|auth|aaa|failed",
            ],
            &ctx.vars,
        )
        .blank()
        .line("If Wi-Fi is involved (WLC 9800):")
        .lines([
            "show wireless client summary",
            "show logging | i EAP|RADIUS|AAA|deauth|disassoc|auth|failed",
        ])
        .blank()
        .line("Likely causes:")
        .lines([
            "- Bad credentials / account lockout (user-specific)",
            "- RADIUS/ISE unreachable or slow (many users)",
            "- VLAN/SGT/policy mismatch after auth",
            "- Cert/EAP mismatch (esp. after changes)",
        ])
        .blank();
}

fn vpn(_ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("VPN issues")
        .line("Client checks:")
        .lines([
            "- Can you browse normal sites without VPN?",
            "- Is VPN failing to connect OR connects but no access?",
            "- Capture exact error message",
        ])
        .blank()
        .line("Network checks:")
        .lines([
            "ping 8.8.8.8 repeat 20",
            "nslookup vpn.<domain> <dns-server>",
            "traceroute <vpn-gateway>",
            "show logging | i vpn|ipsec|ssl|anyconnect",
        ])
        .blank();
}

fn apps_offline(_ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("App issues (Teams/Outlook/O365) + user says offline")
        .line("This often points to DNS/proxy/routing rather than link down.")
        .lines([
            "nslookup teams.microsoft.com <dns-server>",
            "nslookup outlook.office.com <dns-server>",
            "traceroute 8.8.8.8",
        ])
        .blank();
}

fn printing(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("User reports 'Can't Print / Printer Offline'")
        .blank()
        .line("Client checks (quick):")
        .lines([
            "- Confirm printer name + location (which device?)",
            "- Confirm printer IP/hostname if known",
            "- Try ping <printer-ip> from an affected client",
            "- Windows: check print queue; clear stuck jobs; restart Print Spooler if needed",
            "- If printing works from some VLANs but not others: likely ACL/VLAN/routing/policy",
        ])
        .blank()
        .line("Network checks (switch/WLC):")
        .lines([
            "- Identify printer port: MAC table / ARP / DHCP reservations (if any)",
            "- Validate VLAN + port mode + port-security + STP state",
        ])
        .blank()
        .line("Catalyst access switch evidence:")
        .templates(
            &[
                "show arp | i {ip:<printer-ip>}",
                "show mac address-table | i <printer-mac>",
                "show interface status | i <printer-port>",
                "show logging | i SECURE|PORT_SECURITY|ERRDISABLE|LINK|UPDOWN",
                "show interface {ifc}",
                "show interface {ifc} switchport",
                "show interface {ifc} counters errors",
                "show interface {ifc} transceiver detail",
                "show authentication sessions interface {ifc} details",
            ],
            &ctx.vars,
        );

    if ctx.role == Role::Core {
        out.blank()
            .line("Nexus core checks (if printer VLAN is routed here):")
            .templates(
                &[
                    "show ip arp | i {ip:<printer-ip>}",
                    "show mac address-table | i <printer-mac>",
                    "show interface status",
                    "show logging last 100",
                ],
                &ctx.vars,
            );
    }

    out.blank()
        .line("Common causes to confirm:")
        .lines([
            "- Printer got a new IP (DHCP change) but clients still pointing to old one",
            "- VLAN mismatch or trunk/native mismatch on printer port",
            "- Port-security / 802.1X/MAB blocking the printer",
            "- Link errors on the printer port (CRC, duplex, bad cable)",
            "- Routing/ACL policy between client VLAN and printer VLAN",
        ])
        .blank();
}

fn interface_addons(ctx: &SectionContext, out: &mut OutputBlock) {
    out.templates(
        &["show interface {ifc}", "show interface {ifc} counters errors"],
        &ctx.vars,
    );
    if ctx.has(Signal::Slow) {
        out.line("ping <default-gateway> repeat 50");
    }
    out.blank();
}

fn wired_access(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Wired / Catalyst 9300/9300X (IOS-XE)")
        .line("show interfaces | i line protocol|error|CRC|input errors|output errors");
    if ctx.has(Signal::LinkDown) {
        out.line("show logging | i LINK|UPDOWN|ERRDISABLE|UDLD");
    }
    out.line("show etherchannel summary");
    if ctx.has(Signal::Loop) {
        out.line("show spanning-tree detail | i ieee|occurr|from|tc|topology");
    }
    out.line("show mac address-table move update")
        .templates(
            &[
                "show interface {ifc} switchport",
                "show interface {ifc} transceiver detail",
            ],
            &ctx.vars,
        )
        .line("show platform hardware fed active fwd-asic drops")
        .blank();
}

fn wired_core(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Wired / Nexus 9000 (NX-OS)").lines([
        "show interface status",
        "show logging last 100",
        "show port-channel summary",
        "show spanning-tree summary",
    ]);
    if ctx.has(Signal::Loop) {
        out.line("show spanning-tree detail | i tc|topology|occurr|from");
    }
    out.templates(
        &[
            "show interface {ifc}",
            "show interface {ifc} counters errors",
            "show interface {ifc} transceiver details",
        ],
        &ctx.vars,
    )
    .blank();
}

fn wireless(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Wireless / Catalyst 9800 WLC (IOS-XE)").lines([
        "show ap summary",
        "show ap join stats summary",
        "show wireless client summary",
        "show wireless client errors",
        "show logging | i CAPWAP|DTLS|join|disassoc|deauth|EAP|RADIUS",
        "show platform software status control-processor brief",
        "show processes cpu | ex 0.00",
    ]);
    if ctx.has(Signal::Dhcp) {
        out.line("show wireless client mac <client-mac> detail  (if known)");
    }
    out.line("If you know client details (recommended):")
        .lines(["- Client MAC", "- SSID/WLAN name", "- AP name (if known)"])
        .blank()
        .line("Client-specific deep dive (if MAC known):")
        .lines([
            "show wireless client mac <client-mac>",
            "show wireless client mac <client-mac> detail",
            "show logging | i <client-mac>",
        ])
        .blank()
        .line("AP-focused deep dive (if AP name known):")
        .lines([
            "show ap name <ap-name> config general",
            "show ap name <ap-name> ethernet statistics",
        ])
        .blank()
        .blank();
}

fn flapping(ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("Flapping / Intermittent connectivity (link/AP/client)")
        .line("Goal: prove frequency + pattern + where it breaks (client, access port, uplink, AP join).")
        .blank()
        .line("Access switch checks (Cat9300/9300X):");

    if ctx.has_interface() {
        out.templates(
            &[
                "show interface {ifc}",
                "show interface {ifc} switchport",
                "show interface {ifc} counters errors",
                "show interface {ifc} transceiver detail  (if fiber/SFP)",
                "show authentication sessions interface {ifc} details",
                "show logging | last 200 | i {ifc}|UPDOWN|LINK|LINEPROTO|ERRDISABLE",
            ],
            &ctx.vars,
        )
        .line(FLAP_LOG_WINDOW_TIP)
        .blank();
    } else {
        out.line("show logging | last 200 | i UPDOWN|LINK|LINEPROTO|ERRDISABLE")
            .line(FLAP_LOG_WINDOW_TIP)
            .line("Tip: enter interface (Gi1/0/24) to make this sharper.")
            .blank();
    }

    out.line("show interface status | i (notconnect|err|down)").blank();

    if ctx.wireless_involved() {
        out.line("Wireless/AP checks (9800 WLC) if involved:")
            .lines([
                "show logging | last 200 | i CAPWAP|DTLS|join|disassoc|deauth|timeout|reboot",
                LOG_WINDOW_TIP,
                "show ap summary",
                "show ap join stats summary",
            ])
            .blank();
    }

    out.line("Likely causes:")
        .lines([
            "- Bad cable / bad SFP / dirty fiber / loose patch",
            "- PoE instability (AP rebooting)",
            "- Port-security / errdisable events",
            "- STP or LACP instability on uplinks",
        ])
        .blank();
}

fn wan_edge(_ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("WAN / Edge evidence")
        .lines([
            "show ip interface brief",
            "show interface <wan-interface>",
            "show ip route | i 0.0.0.0",
            "show logging | i BGP|OSPF|LINEPROTO|LINK",
            "traceroute 8.8.8.8",
            "ping 8.8.8.8 repeat 50",
        ])
        .blank();
}

fn dhcp_dns(ctx: &SectionContext, out: &mut OutputBlock) {
    let explicit = ctx.category == IncidentCategory::Dhcp;
    out.header("DHCP / DNS evidence");

    if ctx.has(Signal::Dhcp) || explicit {
        out.lines([
            "check DHCP scope utilization (% used)",
            "client test: ipconfig /all (Windows) OR ip a (Linux/mac)",
            "switch: show ip dhcp snooping binding (if enabled)",
        ]);
        match ctx.role {
            Role::Access => {
                out.line("Access DHCP checks (Cat9300/9300X):")
                    .templates(ACCESS_PORT_DETAIL, &ctx.vars)
                    .lines([
                        "show ip dhcp snooping binding",
                        "show logging | i DHCP|SNOOP|ARP|IPDT",
                    ])
                    .blank();
            }
            Role::Core => {
                out.line("Core DHCP path checks (Nexus 9K):")
                    .templates(
                        &[
                            "show ip route {ip:<dhcp-server-ip>}",
                            "show ip arp | i {ip:<dhcp-server-ip>}",
                            "show ip arp | i <default-gateway-ip>",
                        ],
                        &ctx.vars,
                    )
                    .line("Check SVI + helper-address on client VLAN (if applicable).")
                    .blank();
            }
            Role::Wlc => {
                out.line("Wireless DHCP checks (9800 WLC):")
                    .lines([
                        "show wireless client summary",
                        "show logging | i DHCP|client|timeout|ip",
                    ])
                    .blank();
            }
        }
    }

    if ctx.has(Signal::Dns) || explicit {
        match ctx.role {
            Role::Access => {
                out.line("Access switch DNS-related checks (Cat9300/9300X):")
                    .templates(&ACCESS_PORT_DETAIL[..3], &ctx.vars)
                    .lines([
                        "show ip dhcp snooping binding",
                        "show logging | i DHCP|SNOOP|ARP|DNS",
                    ])
                    .blank();
            }
            Role::Core => {
                out.line("Core DNS path checks (Nexus 9K):")
                    .templates(
                        &[
                            "show ip route {ip:<dns-server-ip>}",
                            "show ip arp | i {ip:<dns-server-ip>}",
                            "show ip arp | i <default-gateway-ip>",
                        ],
                        &ctx.vars,
                    )
                    .blank();
            }
            Role::Wlc => {
                out.line("Wireless DNS path checks (9800 WLC):")
                    .lines([
                        "show wireless client summary",
                        "show logging | i DHCP|DNS|client|timeout",
                    ])
                    .blank();
            }
        }
        out.lines([
            "nslookup <known-site> <dns-server>",
            "nslookup <internal-host> <dns-server>",
            "ping <dns-server> repeat 20",
        ]);
    }

    out.blank();
}

fn closing_legend(_ctx: &SectionContext, out: &mut OutputBlock) {
    out.header("What to look for").lines([
        "CRC/input errors climbing = optic/fiber/physical layer issue",
        "LINK up/down repeats or UDLD/errdisable = unstable link or neighbor mismatch",
        "STP topology changes storm = loop",
        "Many clients fail DHCP = scope exhaustion or relay/path issue",
        "CAPWAP/DTLS/AP join failures = VLAN/DHCP/cert/path issue",
    ]);
}

// ============================================================================
// Entry points
// ============================================================================

/// Suggestion output plus the inputs it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPlan {
    pub role: Role,
    pub interface: Option<String>,
    pub ip_hint: Option<String>,
    pub generic: bool,
    /// Names of the sections that fired, in output order
    pub sections: Vec<&'static str>,
    pub block: OutputBlock,
}

/// Resolve inputs and run the section table.
pub fn plan_suggestions(request: &SuggestionRequest, topology: &Topology) -> SuggestionPlan {
    let detection = detect(&request.symptoms, "");
    let role = resolve_role(request.role, &request.environment);

    let interface = non_empty(normalize_interface(&request.interface_override))
        .or_else(|| non_empty(extract_interface_from_text(&request.symptoms)))
        .or_else(|| non_empty(extract_interface_from_text(&request.environment)));

    let ctx = SectionContext {
        category: request.category,
        role,
        detection: &detection,
        vars: TemplateVars {
            interface: interface.clone(),
            ip_hint: detection.ip_hint.clone(),
        },
        generic: is_generic_symptoms(&request.symptoms),
        topology,
    };

    let mut block = OutputBlock::new();
    let mut sections = Vec::new();
    for rule in SECTIONS {
        if (rule.applies)(&ctx) {
            (rule.render)(&ctx, &mut block);
            sections.push(rule.name);
        }
    }

    debug!(
        category = %request.category,
        role = %role,
        interface = ?interface,
        sections = ?sections,
        "evidence suggestions built"
    );

    SuggestionPlan {
        role,
        interface,
        ip_hint: ctx.vars.ip_hint,
        generic: ctx.generic,
        sections,
        block,
    }
}

/// Build suggestions against a specific topology legend.
pub fn build_evidence_suggestions_with(request: &SuggestionRequest, topology: &Topology) -> String {
    plan_suggestions(request, topology).block.render()
}

/// Build the suggested-evidence document for one incident.
///
/// `role` is the operator's explicit selection (None = unset) and
/// `interface_override` the raw interface field; both may be blank.
pub fn build_evidence_suggestions(
    category: IncidentCategory,
    symptoms: &str,
    environment: &str,
    role: Option<Role>,
    interface_override: &str,
) -> String {
    let request = SuggestionRequest {
        category,
        symptoms: symptoms.to_string(),
        environment: environment.to_string(),
        role,
        interface_override: interface_override.to_string(),
    };
    build_evidence_suggestions_with(&request, &Topology::default())
}
