//! Prompt and output-shell templates.
//!
//! Prompts are meant for an approved external assistant; shells are blank
//! answer skeletons an engineer fills in by hand. Blank inputs are written
//! as "(not provided)" / "(none)" so the reader can tell a field was empty.

use netops_common::redaction::redact;
use netops_common::IncidentCategory;

const NOT_PROVIDED: &str = "(not provided)";

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

/// Fields of the incident prompt
#[derive(Debug, Clone, Default)]
pub struct IncidentPromptInput {
    pub category: IncidentCategory,
    pub impact: String,
    pub started: String,
    pub environment: String,
    pub symptoms: String,
    pub evidence: String,
    pub redact_evidence: bool,
}

pub fn incident_prompt(input: &IncidentPromptInput) -> String {
    let evidence = or_placeholder(&input.evidence, NOT_PROVIDED);
    let evidence = if input.redact_evidence {
        redact(evidence)
    } else {
        evidence.to_string()
    };

    format!(
        "You are a senior Network Operations engineer. Help me triage an incident safely.

Constraints:
- Do NOT ask for or include sensitive org data.
- Assume any pasted evidence is sanitized.
- Keep output concise and operational.

Environment/Notes:
{env}

Incident Type: {category}
Impact/Scope: {impact}
Start Time: {started}

Symptoms (bullets):
{symptoms}

Evidence / logs / command output (sanitized):
{evidence}

REQUIRED OUTPUT FORMAT:
1) Likely causes (ranked 1-5). Each: 1-line \"why\".
2) Next 10 checks as a checklist. Include exact commands where applicable.
3) Draft Teams status update (1-3 sentences) + suggested next update time.",
        env = or_placeholder(&input.environment, "(none)"),
        category = input.category.display_label(),
        impact = or_placeholder(&input.impact, NOT_PROVIDED),
        started = or_placeholder(&input.started, NOT_PROVIDED),
        symptoms = or_placeholder(&input.symptoms, NOT_PROVIDED),
        evidence = evidence,
    )
}

/// Fields of the config-review prompt
#[derive(Debug, Clone, Default)]
pub struct ConfigPromptInput {
    pub device_type: String,
    pub intent: String,
    pub config_text: String,
    pub redact_config: bool,
}

pub fn config_prompt(input: &ConfigPromptInput) -> String {
    let config_text = or_placeholder(&input.config_text, NOT_PROVIDED);
    let config_text = if input.redact_config {
        redact(config_text)
    } else {
        config_text.to_string()
    };

    format!(
        "You are a network configuration reviewer. Review the pasted config for risk and correctness.

Device type: {device}
Intended purpose / context:
{intent}

Config (sanitized):
{config}

REQUIRED OUTPUT FORMAT:
A) Findings (High / Medium / Low). Each finding: issue, impact, why it matters.
B) Minimal-change fix suggestions (as small diffs/snippets).
C) Assumptions + 3 questions to confirm intent.",
        device = or_placeholder(&input.device_type, NOT_PROVIDED),
        intent = or_placeholder(&input.intent, NOT_PROVIDED),
        config = config_text,
    )
}

// ============================================================================
// Shells
// ============================================================================

/// Header block of the incident worksheet shell
#[derive(Debug, Clone, Default)]
pub struct ShellMeta {
    pub category: IncidentCategory,
    pub role: String,
    pub interface: String,
    pub impact: String,
    pub started: String,
}

const BLANK_INCIDENT_ANSWER: &str = "1) Likely causes (ranked)
- 1) …
- 2) …
- 3) …
- 4) …
- 5) …

2) Next 10 checks (checklist + commands)
- [ ] 1) …
- [ ] 2) …
- [ ] 3) …
- [ ] 4) …
- [ ] 5) …
- [ ] 6) …
- [ ] 7) …
- [ ] 8) …
- [ ] 9) …
- [ ] 10) …

3) Teams status update (draft)
- Update:
- Next update time:";

/// Incident output shell: optional meta header, then the offline analysis
/// (or a blank answer template), then the suggested commands.
pub fn incident_shell(offline: &str, suggestions: &str, meta: Option<&ShellMeta>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(meta) = meta {
        parts.push("INCIDENT WORKSHEET".to_string());
        if meta.category != IncidentCategory::Unspecified {
            parts.push(format!("Type: {}", meta.category.display_label()));
        }
        let fields = [
            ("Role", &meta.role),
            ("Suspect interface", &meta.interface),
            ("Impact", &meta.impact),
            ("Started", &meta.started),
        ];
        for (label, value) in fields {
            let value = value.trim();
            if !value.is_empty() {
                parts.push(format!("{}: {}", label, value));
            }
        }
        parts.push(String::new());
    }

    let offline = offline.trim();
    if offline.is_empty() {
        parts.push(BLANK_INCIDENT_ANSWER.to_string());
    } else {
        parts.push(offline.to_string());
    }

    let suggestions = suggestions.trim();
    if !suggestions.is_empty() {
        parts.push(String::new());
        parts.push("=== Suggested evidence / commands ===".to_string());
        parts.push(suggestions.to_string());
    }

    parts.join("\n")
}

/// Blank answer skeleton for a config review
pub fn config_shell() -> &'static str {
    "A) Findings
HIGH:
- …
MEDIUM:
- …
LOW:
- …

B) Minimal-change fixes (snippets/diffs)
- …

C) Assumptions + questions
Assumptions:
- …
Questions:
1) …
2) …
3) …"
}
