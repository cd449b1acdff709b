//! Redaction of pasted evidence
//!
//! Evidence pasted from devices is full of addresses. Before it is handed to
//! an external assistant, replace:
//! - IPv4 addresses with `[REDACTED_IP]`
//! - email addresses with `[REDACTED_EMAIL]`
//!
//! Interface names, MACs and hostnames are left alone; they are needed to
//! reason about the output and rarely identify a person.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

// =============================================================================
// Redaction Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveKind {
    Ipv4,
    Email,
}

impl SensitiveKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            SensitiveKind::Ipv4 => "[REDACTED_IP]",
            SensitiveKind::Email => "[REDACTED_EMAIL]",
        }
    }
}

impl std::fmt::Display for SensitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.placeholder())
    }
}

struct RedactionPattern {
    regex: Regex,
    kind: SensitiveKind,
}

// Emails first so the domain part can't be half-eaten by another pattern
static REDACTION_PATTERNS: LazyLock<Vec<RedactionPattern>> = LazyLock::new(|| {
    let patterns: [(&str, SensitiveKind); 2] = [
        (
            r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b",
            SensitiveKind::Email,
        ),
        (r"\b(?:\d{1,3}\.){3}\d{1,3}\b", SensitiveKind::Ipv4),
    ];

    patterns
        .into_iter()
        .filter_map(|(p, kind)| Regex::new(p).ok().map(|regex| RedactionPattern { regex, kind }))
        .collect()
});

// =============================================================================
// Redaction Result
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionResult {
    pub text: String,
    pub redaction_count: usize,
    pub kinds_found: Vec<SensitiveKind>,
}

impl RedactionResult {
    pub fn was_redacted(&self) -> bool {
        self.redaction_count > 0
    }
}

// =============================================================================
// Main Redaction Functions
// =============================================================================

/// Redact every sensitive pattern, reporting what was replaced
pub fn redact_sensitive(text: &str) -> RedactionResult {
    let mut result = text.to_string();
    let mut count = 0;
    let mut kinds = BTreeSet::new();

    for pattern in REDACTION_PATTERNS.iter() {
        let hits = pattern.regex.find_iter(&result).count();
        if hits == 0 {
            continue;
        }
        count += hits;
        kinds.insert(pattern.kind);
        result = pattern
            .regex
            .replace_all(&result, pattern.kind.placeholder())
            .into_owned();
    }

    RedactionResult {
        text: result,
        redaction_count: count,
        kinds_found: kinds.into_iter().collect(),
    }
}

/// Redact sensitive values, returning just the text
pub fn redact(text: &str) -> String {
    redact_sensitive(text).text
}

/// Check whether text contains anything `redact` would replace
pub fn contains_sensitive(text: &str) -> bool {
    REDACTION_PATTERNS.iter().any(|p| p.regex.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_ip() {
        assert_eq!(
            redact("ping 10.20.30.40 repeat 5"),
            "ping [REDACTED_IP] repeat 5"
        );
    }

    #[test]
    fn test_redact_email() {
        assert_eq!(
            redact("reported by Jane.Doe@example.com at 09:00"),
            "reported by [REDACTED_EMAIL] at 09:00"
        );
    }

    #[test]
    fn test_interfaces_untouched() {
        let text = "Gi1/0/24 is up, line protocol is up";
        assert_eq!(redact(text), text);
        assert!(!contains_sensitive(text));
    }

    #[test]
    fn test_counts_and_kinds() {
        let result = redact_sensitive("a@b.io 1.1.1.1 8.8.8.8");
        assert_eq!(result.redaction_count, 3);
        assert_eq!(
            result.kinds_found,
            vec![SensitiveKind::Ipv4, SensitiveKind::Email]
        );
        assert!(result.was_redacted());
    }
}
