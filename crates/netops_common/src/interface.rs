//! Interface name parsing.
//!
//! Operators type interfaces every which way: "gi 2/0/4", "g1/0/24",
//! "int te 2/0/4", "po-2", "port-channel 2", "GigabitEthernet1/0/1".
//! Everything is folded into IOS-style short form (Gi2/0/4, Te2/0/4, Po2).
//! No match is not an error; callers get an empty string.

use regex::Regex;
use std::sync::LazyLock;

/// Leading "interface"/"int" keyword people paste from configs
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:interface|int)\s+").expect("static regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Whole-token form: <type><optional separator><digits and slashes>
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(gigabitethernet|gig|gi|g|tengigabitethernet|tengig|te|fastethernet|fa|",
        r"port-?channel|portchannel|po)\s*-?\s*(\d[\d/]*)$"
    ))
    .expect("static regex")
});

/// First interface-looking token anywhere in free text
static EMBEDDED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:(?:interface|int)\s+)?",
        r"(?:gigabitethernet|gig|gi|g|tengigabitethernet|tengig|te|fastethernet|fa|",
        r"port-?channel|portchannel|po)\s*-?\s*\d[\d/]*\b"
    ))
    .expect("static regex")
});

/// Interface type families we know how to abbreviate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Gigabit,
    TenGigabit,
    FastEthernet,
    PortChannel,
}

impl InterfaceKind {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "g" | "gi" | "gig" | "gigabitethernet" => Some(Self::Gigabit),
            "te" | "tengig" | "tengigabitethernet" => Some(Self::TenGigabit),
            "fa" | "fastethernet" => Some(Self::FastEthernet),
            "po" | "port-channel" | "portchannel" => Some(Self::PortChannel),
            _ => None,
        }
    }

    /// Canonical short prefix
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Gigabit => "Gi",
            Self::TenGigabit => "Te",
            Self::FastEthernet => "Fa",
            Self::PortChannel => "Po",
        }
    }
}

/// Normalize a single interface reference. Returns "" when `raw` is not
/// exactly one interface token.
pub fn normalize_interface(raw: &str) -> String {
    let stripped = KEYWORD_RE.replace(raw.trim(), "");
    let collapsed = WHITESPACE_RE.replace_all(stripped.trim(), " ");

    let Some(caps) = TOKEN_RE.captures(&collapsed) else {
        return String::new();
    };

    let Some(kind) = InterfaceKind::from_token(&caps[1]) else {
        return String::new();
    };

    let path: String = caps[2]
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    format!("{}{}", kind.abbrev(), path)
}

/// Find the first interface mention in free text and normalize it.
pub fn extract_interface_from_text(text: &str) -> String {
    match EMBEDDED_RE.find(text) {
        Some(m) => {
            let token = KEYWORD_RE.replace(m.as_str(), "");
            normalize_interface(&token)
        }
        None => String::new(),
    }
}

/// Convenience for callers that prefer `Option` over empty strings.
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
