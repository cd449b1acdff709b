//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap. Execution lives in `commands`.

use clap::{ArgAction, Args, Parser, Subcommand};
use netops_common::{IncidentCategory, Role};
use std::path::PathBuf;

use crate::presets::{parse_preset, Preset};

/// NetOps Copilot CLI
#[derive(Parser, Debug)]
#[command(name = "netopsctl")]
#[command(about = "NetOps Copilot - rule-based incident triage for campus networks", long_about = None)]
#[command(version = env!("NETOPSCTL_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides $NETOPS_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_category(raw: &str) -> Result<IncidentCategory, String> {
    Ok(IncidentCategory::parse(raw))
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| format!("unknown role '{}' (access, core, wlc)", raw))
}

/// Fields describing the incident
#[derive(Args, Debug, Clone, Default)]
pub struct IncidentArgs {
    /// Incident type: wired, wireless, dhcp, wan, performance, intermittent, other
    #[arg(long = "type", short = 't', value_parser = parse_category, default_value = "")]
    pub category: IncidentCategory,

    /// What users report
    #[arg(long, short = 's')]
    pub symptoms: Option<String>,

    /// Use a canned symptom text instead of --symptoms
    #[arg(long, value_parser = parse_preset, conflicts_with = "symptoms")]
    pub preset: Option<&'static Preset>,

    /// Environment notes (platforms, sites, anything relevant)
    #[arg(long = "env", short = 'e', default_value = "")]
    pub environment: String,

    /// Device role being worked on: access, core, wlc
    #[arg(long, value_parser = parse_role)]
    pub role: Option<Role>,

    /// Suspect interface, e.g. "gi 1/0/24"
    #[arg(long = "interface", short = 'i', default_value = "")]
    pub interface: String,
}

impl IncidentArgs {
    /// Symptom text after applying a preset
    pub fn symptoms_text(&self) -> String {
        match (self.preset, &self.symptoms) {
            (Some(preset), _) => preset.symptoms.to_string(),
            (None, Some(text)) => text.clone(),
            (None, None) => String::new(),
        }
    }

    /// Operator's role, or the usual starting role for the incident type
    pub fn selected_role(&self) -> Role {
        self.role
            .unwrap_or_else(|| Role::default_for_category(self.category))
    }
}

/// Pasted evidence, inline or from a file ("-" reads stdin)
#[derive(Args, Debug, Clone, Default)]
pub struct EvidenceArgs {
    /// Evidence text (logs, command output)
    #[arg(long)]
    pub evidence: Option<String>,

    /// Read evidence from a file, or "-" for stdin
    #[arg(long, value_name = "PATH", conflicts_with = "evidence")]
    pub evidence_file: Option<PathBuf>,

    /// Redact IPs and emails in evidence
    #[arg(long, overrides_with = "no_redact")]
    pub redact: bool,

    /// Do not redact, even if the config says so
    #[arg(long, overrides_with = "redact")]
    pub no_redact: bool,
}

impl EvidenceArgs {
    /// Resolve the redaction flag against the configured default
    pub fn redact_enabled(&self, configured: bool) -> bool {
        if self.redact {
            true
        } else if self.no_redact {
            false
        } else {
            configured
        }
    }
}

/// Impact and start time, used in status updates
#[derive(Args, Debug, Clone, Default)]
pub struct ImpactArgs {
    /// Who or what is affected
    #[arg(long, default_value = "")]
    pub impact: String,

    /// When it started
    #[arg(long, default_value = "")]
    pub started: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize one interface name (gi 1/0/24 -> Gi1/0/24)
    Normalize {
        /// Raw interface text
        raw: String,
    },

    /// Find the first interface mentioned in free text
    Extract {
        /// Free text
        text: String,
    },

    /// Suggest evidence commands for an incident
    Suggest {
        #[command(flatten)]
        incident: IncidentArgs,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank likely causes offline from symptoms and evidence
    Analyze {
        #[command(flatten)]
        incident: IncidentArgs,

        #[command(flatten)]
        evidence: EvidenceArgs,

        #[command(flatten)]
        impact: ImpactArgs,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a prompt for an approved AI assistant
    Prompt {
        #[command(subcommand)]
        kind: PromptKind,
    },

    /// Print a blank answer skeleton
    Shell {
        #[command(subcommand)]
        kind: ShellKind,
    },

    /// Append an evidence collection worksheet to existing evidence
    Worksheet {
        #[command(flatten)]
        incident: IncidentArgs,

        #[command(flatten)]
        evidence: EvidenceArgs,
    },

    /// List symptom presets
    Presets,

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PromptKind {
    /// Incident triage prompt
    Incident {
        #[command(flatten)]
        incident: IncidentArgs,

        #[command(flatten)]
        evidence: EvidenceArgs,

        #[command(flatten)]
        impact: ImpactArgs,
    },

    /// Configuration review prompt
    Config {
        /// Device type, e.g. "Catalyst 9300 access switch"
        #[arg(long, default_value = "")]
        device_type: String,

        /// What the config is supposed to do
        #[arg(long, default_value = "")]
        intent: String,

        /// Config file to review, or "-" for stdin
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Redact IPs and emails in the config
        #[arg(long)]
        redact: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShellKind {
    /// Incident worksheet shell with suggested commands
    Incident {
        #[command(flatten)]
        incident: IncidentArgs,

        #[command(flatten)]
        evidence: EvidenceArgs,

        #[command(flatten)]
        impact: ImpactArgs,

        /// Fill the answer section with the offline analysis
        #[arg(long)]
        offline: bool,
    },

    /// Config review answer skeleton
    Config,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration (default)
    Show,

    /// Print the config file path in use
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
