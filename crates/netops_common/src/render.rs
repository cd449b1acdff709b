//! Plain-text output blocks and the small templating pass used to fill
//! command templates.
//!
//! Placeholders:
//! - `{ifc}`           normalized interface; a line holding it is dropped
//!                     when no interface is known
//! - `{ip:<fallback>}` extracted IP hint, or the literal fallback token

use regex::Regex;
use std::sync::LazyLock;

static IP_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{ip:([^}]*)\}").expect("static regex"));

const IFC_PLACEHOLDER: &str = "{ifc}";

/// Values available to command templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    pub interface: Option<String>,
    pub ip_hint: Option<String>,
}

impl TemplateVars {
    /// Fill one template. `None` means the line needs an interface we don't have.
    pub fn fill(&self, template: &str) -> Option<String> {
        let mut out = template.to_string();

        if out.contains(IFC_PLACEHOLDER) {
            let ifc = self.interface.as_deref()?;
            out = out.replace(IFC_PLACEHOLDER, ifc);
        }

        if IP_PLACEHOLDER_RE.is_match(&out) {
            out = IP_PLACEHOLDER_RE
                .replace_all(&out, |caps: &regex::Captures| match &self.ip_hint {
                    Some(ip) => ip.clone(),
                    None => caps[1].to_string(),
                })
                .into_owned();
        }

        Some(out)
    }
}

/// Ordered lines grouped under "=== Title ===" headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBlock {
    lines: Vec<String>,
}

impl OutputBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&mut self, title: &str) -> &mut Self {
        self.lines.push(format!("=== {} ===", title));
        self
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub fn lines<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Push filled templates, skipping ones that can't be filled
    pub fn templates(&mut self, templates: &[&str], vars: &TemplateVars) -> &mut Self {
        self.lines.extend(templates.iter().filter_map(|t| vars.fill(t)));
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Section headers in order of appearance
    pub fn headers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| l.strip_prefix("=== ").and_then(|l| l.strip_suffix(" ===")))
            .collect()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Display for OutputBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
