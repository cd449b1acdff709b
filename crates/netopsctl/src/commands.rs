//! Command execution
//!
//! Every command renders to a String; main prints it. Keeps commands
//! testable without capturing stdout.

use anyhow::{bail, Context, Result};
use netops_common::config::NetopsConfig;
use netops_common::error::read_text;
use netops_common::redaction::redact;
use netops_common::{
    extract_interface_from_text, normalize_interface, plan_suggestions, triage, Role,
    SuggestionPlan, SuggestionRequest, TriageOptions, TriageRequest,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::cli::{
    Commands, ConfigAction, EvidenceArgs, ImpactArgs, IncidentArgs, PromptKind, ShellKind,
};
use crate::presets::PRESETS;
use crate::prompt::{
    config_prompt, config_shell, incident_prompt, incident_shell, ConfigPromptInput,
    IncidentPromptInput, ShellMeta,
};
use crate::worksheet::{append_worksheet, timestamp_now, WorksheetBlock};

/// Read a file, or stdin for "-"
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    Ok(read_text(path)?)
}

fn read_evidence(args: &EvidenceArgs) -> Result<String> {
    match (&args.evidence, &args.evidence_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => read_input(path)
            .with_context(|| format!("Failed to read evidence from {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

/// Evidence text, redacted when enabled by flag or config
fn evidence_text(args: &EvidenceArgs, config: &NetopsConfig) -> Result<String> {
    let evidence = read_evidence(args)?;
    if args.redact_enabled(config.redact.evidence) {
        debug!("redacting evidence");
        Ok(redact(&evidence))
    } else {
        Ok(evidence)
    }
}

fn suggestion_plan(incident: &IncidentArgs, config: &NetopsConfig) -> SuggestionPlan {
    let request = SuggestionRequest {
        category: incident.category,
        symptoms: incident.symptoms_text(),
        environment: incident.environment.clone(),
        role: Some(incident.selected_role()),
        interface_override: incident.interface.clone(),
    };
    plan_suggestions(&request, &config.topology)
}

fn run_triage(
    incident: &IncidentArgs,
    evidence: &str,
    impact: &ImpactArgs,
    config: &NetopsConfig,
) -> netops_common::TriageReport {
    let request = TriageRequest {
        category: incident.category,
        symptoms: incident.symptoms_text(),
        evidence: evidence.to_string(),
        impact: impact.impact.clone(),
        started: impact.started.clone(),
    };
    let options = TriageOptions {
        next_update_minutes: config.triage.effective_minutes(),
    };
    triage(&request, &options)
}

#[derive(Serialize)]
struct SuggestJson<'a> {
    role: Role,
    interface: Option<&'a str>,
    ip_hint: Option<&'a str>,
    generic_symptoms: bool,
    sections: &'a [&'static str],
    text: String,
}

/// Run one command and return what should go to stdout.
pub fn execute(
    command: &Commands,
    config: &NetopsConfig,
    config_path: Option<&Path>,
) -> Result<String> {
    match command {
        Commands::Normalize { raw } => {
            let normalized = normalize_interface(raw);
            if normalized.is_empty() {
                bail!("Not an interface name: '{}'", raw);
            }
            Ok(normalized)
        }

        Commands::Extract { text } => {
            let found = extract_interface_from_text(text);
            if found.is_empty() {
                bail!("No interface found in text");
            }
            Ok(found)
        }

        Commands::Suggest { incident, json } => {
            let plan = suggestion_plan(incident, config);
            if *json {
                let out = SuggestJson {
                    role: plan.role,
                    interface: plan.interface.as_deref(),
                    ip_hint: plan.ip_hint.as_deref(),
                    generic_symptoms: plan.generic,
                    sections: &plan.sections,
                    text: plan.block.render(),
                };
                Ok(serde_json::to_string_pretty(&out)?)
            } else {
                Ok(plan.block.render())
            }
        }

        Commands::Analyze {
            incident,
            evidence,
            impact,
            json,
        } => {
            let evidence = evidence_text(evidence, config)?;
            let report = run_triage(incident, &evidence, impact, config);
            if *json {
                Ok(report.to_json()?)
            } else {
                Ok(report.render())
            }
        }

        Commands::Prompt { kind } => match kind {
            PromptKind::Incident {
                incident,
                evidence,
                impact,
            } => {
                let input = IncidentPromptInput {
                    category: incident.category,
                    impact: impact.impact.clone(),
                    started: impact.started.clone(),
                    environment: incident.environment.clone(),
                    symptoms: incident.symptoms_text(),
                    evidence: read_evidence(evidence)?,
                    redact_evidence: evidence.redact_enabled(config.redact.evidence),
                };
                Ok(incident_prompt(&input))
            }
            PromptKind::Config {
                device_type,
                intent,
                file,
                redact,
            } => {
                let config_text = match file {
                    Some(path) => read_input(path)
                        .with_context(|| format!("Failed to read config from {}", path.display()))?,
                    None => String::new(),
                };
                Ok(config_prompt(&ConfigPromptInput {
                    device_type: device_type.clone(),
                    intent: intent.clone(),
                    config_text,
                    redact_config: *redact || config.redact.evidence,
                }))
            }
        },

        Commands::Shell { kind } => match kind {
            ShellKind::Incident {
                incident,
                evidence,
                impact,
                offline,
            } => {
                let plan = suggestion_plan(incident, config);
                let offline_text = if *offline {
                    let evidence = evidence_text(evidence, config)?;
                    run_triage(incident, &evidence, impact, config).render()
                } else {
                    String::new()
                };
                let meta = ShellMeta {
                    category: incident.category,
                    role: plan.role.to_string(),
                    interface: plan.interface.clone().unwrap_or_default(),
                    impact: impact.impact.clone(),
                    started: impact.started.clone(),
                };
                Ok(incident_shell(&offline_text, &plan.block.render(), Some(&meta)))
            }
            ShellKind::Config => Ok(config_shell().to_string()),
        },

        Commands::Worksheet { incident, evidence } => {
            let existing = read_evidence(evidence)?;
            let plan = suggestion_plan(incident, config);
            let suggestions = plan.block.render();
            let timestamp = timestamp_now();
            let block = WorksheetBlock {
                category: incident.category,
                role: plan.role,
                interface: plan.interface.as_deref(),
                topology: &config.topology,
                suggestions: &suggestions,
                timestamp: &timestamp,
            };
            Ok(append_worksheet(&existing, &block))
        }

        Commands::Presets => {
            let width = PRESETS.iter().map(|p| p.name.len()).max().unwrap_or(0);
            Ok(PRESETS
                .iter()
                .map(|p| format!("{:<width$}  {}", p.name, p.symptoms, width = width))
                .collect::<Vec<_>>()
                .join("\n"))
        }

        Commands::Config { action } => {
            config_command(action.unwrap_or(ConfigAction::Show), config, config_path)
        }
    }
}

fn config_command(
    action: ConfigAction,
    config: &NetopsConfig,
    config_path: Option<&Path>,
) -> Result<String> {
    match action {
        ConfigAction::Show => Ok(config.to_toml()?),
        ConfigAction::Path => Ok(NetopsConfig::config_path(config_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no config directory on this platform)".to_string())),
        ConfigAction::Init { force } => {
            let Some(path) = NetopsConfig::config_path(config_path) else {
                bail!("No config directory on this platform; pass --config <path>");
            };
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            NetopsConfig::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}
