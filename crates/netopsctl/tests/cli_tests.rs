//! CLI parsing and command output.

use clap::Parser;
use netops_common::config::NetopsConfig;
use netops_common::{IncidentCategory, Role};
use netopsctl::cli::{Cli, Commands, ConfigAction, PromptKind, ShellKind};
use netopsctl::commands::execute;
use tempfile::TempDir;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    execute(&cli.command, &NetopsConfig::default(), cli.config.as_deref())
}

#[test]
fn parses_incident_flags() {
    let cli = Cli::try_parse_from([
        "netopsctl",
        "-vv",
        "suggest",
        "--type",
        "Wi-Fi",
        "--role",
        "core",
        "--symptoms",
        "ap reboots",
        "-i",
        "gi 1/0/3",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Suggest { incident, json } => {
            assert_eq!(incident.category, IncidentCategory::Wireless);
            assert_eq!(incident.role, Some(Role::Core));
            assert_eq!(incident.interface, "gi 1/0/3");
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn type_defaults_to_unspecified() {
    let cli = Cli::try_parse_from(["netopsctl", "suggest"]).unwrap();
    match cli.command {
        Commands::Suggest { incident, .. } => {
            assert_eq!(incident.category, IncidentCategory::Unspecified);
            assert_eq!(incident.role, None);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn rejects_unknown_role_and_preset() {
    assert!(Cli::try_parse_from(["netopsctl", "suggest", "--role", "router"]).is_err());
    assert!(Cli::try_parse_from(["netopsctl", "suggest", "--preset", "nope"]).is_err());
}

#[test]
fn preset_conflicts_with_symptoms() {
    let result = Cli::try_parse_from([
        "netopsctl",
        "suggest",
        "--preset",
        "dhcp",
        "--symptoms",
        "x",
    ]);
    assert!(result.is_err());
}

#[test]
fn subcommand_shapes() {
    let cli = Cli::try_parse_from(["netopsctl", "prompt", "config", "--device-type", "C9300"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Prompt {
            kind: PromptKind::Config { .. }
        }
    ));

    let cli = Cli::try_parse_from(["netopsctl", "shell", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Shell { kind: ShellKind::Config }));

    let cli = Cli::try_parse_from(["netopsctl", "config", "init", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config { action: Some(ConfigAction::Init { force: true }) }
    ));
}

#[test]
fn normalize_and_extract() {
    assert_eq!(run(&["netopsctl", "normalize", "int te 2/0/4"]).unwrap(), "Te2/0/4");
    assert_eq!(
        run(&["netopsctl", "extract", "errors on interface gi 1/0/24 today"]).unwrap(),
        "Gi1/0/24"
    );
    assert!(run(&["netopsctl", "normalize", "banana"]).is_err());
}

#[test]
fn suggest_with_preset() {
    let out = run(&["netopsctl", "suggest", "--type", "dhcp", "--preset", "dhcp"]).unwrap();
    assert!(out.starts_with("Detected from symptoms: "));
    assert!(out.contains("=== DHCP / DNS evidence ==="));
    assert!(out.contains("Access DHCP checks (Cat9300/9300X):"));
}

#[test]
fn suggest_json_lists_sections() {
    let out = run(&["netopsctl", "suggest", "--preset", "wifi_drop", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["role"], "access");
    let sections = value["sections"].as_array().unwrap();
    assert!(sections.iter().any(|s| s == "wireless"));
    assert!(value["text"]
        .as_str()
        .unwrap()
        .contains("=== Wireless / Catalyst 9800 WLC (IOS-XE) ==="));
}

#[test]
fn analyze_with_redaction() {
    let out = run(&[
        "netopsctl",
        "analyze",
        "--type",
        "dhcp",
        "--symptoms",
        "apipa on floor 2",
        "--evidence",
        "DHCPD: no free leases on 10.20.0.0/22",
        "--redact",
        "--impact",
        "floor 2",
    ])
    .unwrap();
    assert!(out.starts_with("OFFLINE TRIAGE (rule-based)"));
    assert!(out.contains("- 1) DHCP failure (scope exhaustion/relay/path)"));
    assert!(out.contains("impacting floor 2 (started ~recently)"));
}

#[test]
fn analyze_reads_evidence_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evidence.txt");
    std::fs::write(&path, "%SPANTREE-2-LOOPGUARD topology change detected\n").unwrap();

    let out = run(&[
        "netopsctl",
        "analyze",
        "--evidence-file",
        path.to_str().unwrap(),
        "--json",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["causes"][0]["title"], "Layer-2 loop or STP instability");
}

#[test]
fn missing_evidence_file_is_error() {
    let err = run(&["netopsctl", "analyze", "--evidence-file", "/nonexistent/evidence.txt"])
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read evidence"));
}

#[test]
fn incident_shell_has_meta_and_suggestions() {
    let out = run(&[
        "netopsctl",
        "shell",
        "incident",
        "--type",
        "wired",
        "--symptoms",
        "uplink gi 1/0/48 flapping all morning",
        "--impact",
        "IDF-3",
    ])
    .unwrap();
    assert!(out.starts_with("INCIDENT WORKSHEET\nType: Wired\nRole: access\nSuspect interface: Gi1/0/48\nImpact: IDF-3\n"));
    assert!(out.contains("- [ ] 10) …"));
    assert!(out.contains("=== Suggested evidence / commands ===\nDetected from symptoms:"));
}

#[test]
fn incident_shell_with_offline_analysis() {
    let out = run(&[
        "netopsctl",
        "shell",
        "incident",
        "--offline",
        "--evidence",
        "CRC errors increasing",
    ])
    .unwrap();
    assert!(out.contains("OFFLINE TRIAGE (rule-based)"));
    assert!(!out.contains("- [ ] 10) …"));
}

#[test]
fn worksheet_appends_to_evidence() {
    let out = run(&[
        "netopsctl",
        "worksheet",
        "--type",
        "wireless",
        "--symptoms",
        "clients drop on the 3rd floor",
        "--evidence",
        "earlier paste",
    ])
    .unwrap();
    assert!(out.starts_with("earlier paste\n\n=== Evidence Collection Worksheet ("));
    assert!(out.contains("Role: Wireless (Catalyst 9800)\n"));
    assert!(out.contains("--- Commands to run ---\n"));
    assert!(out.ends_with("--- Paste results below (sanitized) ---\n"));
}

#[test]
fn config_init_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("netops.toml");
    let path_str = path.to_str().unwrap();

    let out = run(&["netopsctl", "--config", path_str, "config", "init"]).unwrap();
    assert!(out.starts_with("Wrote "));
    assert!(NetopsConfig::load_from(&path).is_ok());

    assert!(run(&["netopsctl", "--config", path_str, "config", "init"]).is_err());
    assert!(run(&["netopsctl", "--config", path_str, "config", "init", "--force"]).is_ok());
}

#[test]
fn config_show_is_toml() {
    let out = run(&["netopsctl", "config"]).unwrap();
    assert!(out.contains("[triage]"));
    assert!(out.contains("next_update_minutes = 30"));
}

#[test]
fn presets_listed() {
    let out = run(&["netopsctl", "presets"]).unwrap();
    assert_eq!(out.lines().count(), 8);
    assert!(out.lines().next().unwrap().starts_with("no_internet"));
}
