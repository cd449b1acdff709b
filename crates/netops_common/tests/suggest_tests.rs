//! Evidence suggestion output.

use netops_common::{
    build_evidence_suggestions, build_evidence_suggestions_with, plan_suggestions,
    IncidentCategory, Role, SuggestionRequest, Topology,
};

#[test]
fn wireless_category_emits_controller_section() {
    let out = build_evidence_suggestions(
        IncidentCategory::Wireless,
        "clients cannot join the corporate ssid on floor 3",
        "",
        None,
        "",
    );
    assert!(out.contains("=== Wireless / Catalyst 9800 WLC (IOS-XE) ==="));
    assert!(out.contains("show ap join stats summary"));
}

#[test]
fn dhcp_on_core_uses_core_path_checks() {
    let out = build_evidence_suggestions(
        IncidentCategory::Dhcp,
        "users on vlan 20 get apipa addresses since 9am",
        "Nexus core pair",
        None,
        "",
    );
    assert!(out.contains("Core DHCP path checks (Nexus 9K)"));
    assert!(!out.contains("Access DHCP checks"));
    assert!(out.contains("Selected role: core"));
}

#[test]
fn output_is_deterministic() {
    let run = || {
        build_evidence_suggestions(
            IncidentCategory::Intermittent,
            "AP on gi 2/0/11 keeps dropping and wifi clients disconnect",
            "9800 pair, Cat9300 closets",
            Some(Role::Access),
            "",
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn interface_override_fills_templates() {
    let out = build_evidence_suggestions(
        IncidentCategory::Wired,
        "desk port for finance user shows no link light",
        "",
        Some(Role::Access),
        "gi 1/0/24",
    );
    assert!(out.contains("Selected role: access | Interface: Gi1/0/24"));
    assert!(out.contains("show interface Gi1/0/24 switchport"));
    assert!(out.contains("=== Wired / Catalyst 9300/9300X (IOS-XE) ==="));
}

#[test]
fn no_placeholders_leak_without_hints() {
    let out = build_evidence_suggestions(
        IncidentCategory::Other,
        "building B users cannot print to the copier",
        "",
        None,
        "",
    );
    assert!(!out.contains('{'));
    assert!(out.contains("show arp | i <printer-ip>"));
    assert!(!out.contains("show interface {ifc}"));
}

#[test]
fn printer_ip_comes_from_symptoms() {
    let out = build_evidence_suggestions(
        IncidentCategory::Other,
        "printer 10.5.5.20 shows offline for the finance team",
        "",
        None,
        "",
    );
    assert!(out.contains("show arp | i 10.5.5.20"));
}

#[test]
fn generic_symptoms_get_role_baseline() {
    let out = build_evidence_suggestions(
        IncidentCategory::Unspecified,
        "help",
        "",
        Some(Role::Core),
        "",
    );
    assert!(out.contains("=== Baseline evidence by role ==="));
    assert!(out.contains("Core (assume Nexus 9000):"));
    assert!(out.contains("Detected from symptoms: (none)"));
}

#[test]
fn custom_topology_in_preamble() {
    let topology = Topology {
        access: "Catalyst 9200 (IOS-XE)".to_string(),
        ..Topology::default()
    };
    let request = SuggestionRequest {
        category: IncidentCategory::Wired,
        symptoms: "closet switch uplink errors climbing".to_string(),
        ..Default::default()
    };
    let out = build_evidence_suggestions_with(&request, &topology);
    assert!(out.contains("Access/IDF: Catalyst 9200 (IOS-XE)"));
    assert!(out.contains("Core/Root:  Nexus 9000 (NX-OS)"));
}

#[test]
fn sections_follow_table_order() {
    let request = SuggestionRequest {
        category: IncidentCategory::Wan,
        symptoms: "whole site has no internet and dns lookups time out".to_string(),
        ..Default::default()
    };
    let plan = plan_suggestions(&request, &Topology::default());
    let position = |name: &str| plan.sections.iter().position(|s| *s == name);

    let baseline = position("baseline").unwrap();
    let no_internet = position("no-internet").unwrap();
    let wan = position("wan").unwrap();
    let dhcp_dns = position("dhcp-dns").unwrap();
    assert!(baseline < no_internet);
    assert!(no_internet < wan);
    assert!(wan < dhcp_dns);
    assert_eq!(plan.sections.last(), Some(&"what-to-look-for"));
}

fn suggest(category: IncidentCategory, symptoms: &str, role: Role, interface: &str) -> String {
    build_evidence_suggestions(category, symptoms, "", Some(role), interface)
}

fn sections(category: IncidentCategory, symptoms: &str) -> Vec<&'static str> {
    let request = SuggestionRequest {
        category,
        symptoms: symptoms.to_string(),
        ..Default::default()
    };
    plan_suggestions(&request, &Topology::default()).sections
}

const NO_INTERNET: &str = "whole floor has no internet since the morning";

#[test]
fn no_internet_access_branch() {
    let out = suggest(IncidentCategory::Other, NO_INTERNET, Role::Access, "gi 1/0/7");
    assert!(out.contains("=== User reports 'No Internet / Offline' ==="));
    assert!(out.contains(
        "Access switch deep-dive (Cat9300/9300X):\nshow interface status\nshow interface Gi1/0/7\n"
    ));
    assert!(!out.contains("Core deep-dive (Nexus 9K):"));
    assert!(out.contains("nslookup google.com <dns-server>"));
}

#[test]
fn no_internet_core_branch() {
    let out = suggest(IncidentCategory::Other, NO_INTERNET, Role::Core, "");
    assert!(out.contains("Core deep-dive (Nexus 9K):"));
    assert!(out.contains("show ip route <dns-server-ip>"));
    assert!(out.contains("show ip arp | i <default-gateway-ip>"));
    assert!(!out.contains("Access switch deep-dive"));
    assert!(out.contains("traceroute 8.8.8.8"));
}

#[test]
fn no_internet_wlc_branch() {
    let out = suggest(IncidentCategory::Other, NO_INTERNET, Role::Wlc, "");
    assert!(out.contains("Wireless deep-dive (9800 WLC):"));
    assert!(out.contains(
        "show logging | last 200 | i CAPWAP|DTLS|join|disassoc|deauth|EAP|RADIUS"
    ));
    assert!(!out.contains("Core deep-dive (Nexus 9K):"));
    assert!(out.contains("show ip route | i 0.0.0.0"));
}

#[test]
fn login_auth_section() {
    let symptoms = "many users cannot login, login failed on laptops";
    let out = suggest(IncidentCategory::Other, symptoms, Role::Access, "");
    assert!(out.contains("=== Login / Authentication (802.1X / RADIUS / Wi-Fi password) ==="));
    assert!(out.contains("show logging | i dot1x|mab|radius|eap|auth|aaa|failed"));
    assert!(out.contains("- RADIUS/ISE unreachable or slow (many users)"));
    assert!(!out.contains("show authentication sessions interface"));

    let out = suggest(IncidentCategory::Other, symptoms, Role::Access, "gi 1/0/9");
    assert!(out.contains("show authentication sessions interface Gi1/0/9 details"));
}

#[test]
fn vpn_section() {
    let out = suggest(
        IncidentCategory::Other,
        "anyconnect vpn will not connect from home office",
        Role::Access,
        "",
    );
    assert!(out.contains("=== VPN issues ==="));
    assert!(out.contains("nslookup vpn.<domain> <dns-server>"));
    assert!(out.contains("traceroute <vpn-gateway>"));
    assert!(out.contains("show logging | i vpn|ipsec|ssl|anyconnect"));
}

#[test]
fn m365_section_without_offline() {
    let symptoms = "teams and outlook will not load messages for sales";
    let out = suggest(IncidentCategory::Other, symptoms, Role::Access, "");
    assert!(out.contains("=== M365 issues (Teams/Outlook/O365/OneDrive) ==="));
    assert!(out.contains("nslookup login.microsoftonline.com <dns-server>"));
    assert!(!out.contains("App issues (Teams/Outlook/O365) + user says offline"));

    let fired = sections(IncidentCategory::Other, symptoms);
    assert!(fired.contains(&"m365"));
    assert!(!fired.contains(&"apps-offline"));
}

#[test]
fn apps_offline_combo() {
    let fired = sections(
        IncidentCategory::Other,
        "teams shows offline and outlook cannot sync mail",
    );
    let m365 = fired.iter().position(|s| *s == "m365").unwrap();
    let combo = fired.iter().position(|s| *s == "apps-offline").unwrap();
    assert!(m365 < combo);

    // collaboration tools outside M365 still pair with "offline"
    let fired = sections(
        IncidentCategory::Other,
        "zoom calls report no internet for everyone in sales",
    );
    assert!(fired.contains(&"apps-offline"));
    assert!(!fired.contains(&"m365"));
}

const NEXUS_HEADER: &str = "=== Wired / Nexus 9000 (NX-OS) ===";
const CATALYST_HEADER: &str = "=== Wired / Catalyst 9300/9300X (IOS-XE) ===";

#[test]
fn wired_core_section_only_for_core_role() {
    let symptoms = "spanning tree loop suspected between the distribution pair";

    let core = suggest(IncidentCategory::Wired, symptoms, Role::Core, "gi 1/0/48");
    assert!(core.contains(NEXUS_HEADER));
    assert!(!core.contains(CATALYST_HEADER));
    assert!(core.contains("show port-channel summary"));
    assert!(core.contains("show spanning-tree detail | i tc|topology|occurr|from"));
    assert!(core.contains("show interface Gi1/0/48 transceiver details"));

    let access = suggest(IncidentCategory::Wired, symptoms, Role::Access, "");
    assert!(access.contains(CATALYST_HEADER));
    assert!(!access.contains(NEXUS_HEADER));

    let wlc = suggest(IncidentCategory::Wired, symptoms, Role::Wlc, "");
    assert!(!wlc.contains(NEXUS_HEADER));
    assert!(!wlc.contains(CATALYST_HEADER));

    let wireless = suggest(IncidentCategory::Wireless, symptoms, Role::Core, "");
    assert!(!wireless.contains(NEXUS_HEADER));
}

#[test]
fn core_printing_adds_nexus_checks() {
    let symptoms = "finance printer 10.9.9.9 offline for everyone on floor 2";

    let core = suggest(IncidentCategory::Wired, symptoms, Role::Core, "");
    assert!(core.contains("Nexus core checks (if printer VLAN is routed here):"));
    assert!(core.contains("show ip arp | i 10.9.9.9"));
    assert!(core.contains("show logging last 100"));

    let access = suggest(IncidentCategory::Wired, symptoms, Role::Access, "");
    assert!(access.contains("show arp | i 10.9.9.9"));
    assert!(!access.contains("Nexus core checks"));
}

const FLAP_TIP: &str = "Tip: enter interface (Gi1/0/24) to make this sharper.";
const WIRELESS_FLAP: &str = "Wireless/AP checks (9800 WLC) if involved:";

#[test]
fn flapping_without_interface_asks_for_one() {
    let out = suggest(IncidentCategory::Wired, "uplink is flapping all morning", Role::Access, "");
    assert!(out.contains("=== Flapping / Intermittent connectivity (link/AP/client) ==="));
    assert!(out.contains("show logging | last 200 | i UPDOWN|LINK|LINEPROTO|ERRDISABLE"));
    assert!(out.contains(FLAP_TIP));
    assert!(out.contains("show interface status | i (notconnect|err|down)"));
    assert!(!out.contains(WIRELESS_FLAP));
}

#[test]
fn flapping_with_interface_filters_logs() {
    let out = suggest(
        IncidentCategory::Wired,
        "uplink gi 1/0/48 flapping all morning",
        Role::Access,
        "",
    );
    assert!(out.contains("show logging | last 200 | i Gi1/0/48|UPDOWN|LINK|LINEPROTO|ERRDISABLE"));
    assert!(out.contains("show interface Gi1/0/48 transceiver detail  (if fiber/SFP)"));
    assert!(!out.contains(FLAP_TIP));
}

#[test]
fn flapping_wireless_branch() {
    let out = build_evidence_suggestions(
        IncidentCategory::Wireless,
        "ap on the 3rd floor keeps flapping",
        "",
        None,
        "",
    );
    assert!(out.contains(WIRELESS_FLAP));
    assert!(out.contains(
        "show logging | last 200 | i CAPWAP|DTLS|join|disassoc|deauth|timeout|reboot"
    ));
}

const DNS_ONLY: &str = "nslookup cannot resolve intranet names";

#[test]
fn dns_only_access_branch() {
    let out = suggest(IncidentCategory::Other, DNS_ONLY, Role::Access, "gi 1/0/3");
    assert!(out.contains("=== DHCP / DNS evidence ==="));
    assert!(out.contains(
        "Access switch DNS-related checks (Cat9300/9300X):\nshow interface Gi1/0/3\n"
    ));
    assert!(out.contains("show logging | i DHCP|SNOOP|ARP|DNS"));
    assert!(out.contains("nslookup <internal-host> <dns-server>"));
    assert!(!out.contains("check DHCP scope utilization (% used)"));
    assert!(!out.contains("Access DHCP checks"));
}

#[test]
fn dns_only_core_branch() {
    let out = suggest(
        IncidentCategory::Other,
        "nslookup against 10.1.1.53 cannot resolve intranet names",
        Role::Core,
        "",
    );
    assert!(out.contains("Core DNS path checks (Nexus 9K):"));
    assert!(out.contains("show ip route 10.1.1.53"));
    assert!(out.contains("show ip arp | i 10.1.1.53"));
    assert!(!out.contains("Core DHCP path checks"));
}

#[test]
fn dns_only_wlc_branch() {
    let out = suggest(IncidentCategory::Other, DNS_ONLY, Role::Wlc, "");
    assert!(out.contains("Wireless DNS path checks (9800 WLC):"));
    assert!(out.contains("show logging | i DHCP|DNS|client|timeout"));
    assert!(!out.contains("Wireless DHCP checks"));
    assert!(out.contains("ping <dns-server> repeat 20"));
}
