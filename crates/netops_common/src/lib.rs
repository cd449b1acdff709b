//! Shared engine for NetOps Copilot components.
//!
//! Rule-based incident triage for campus networks: interface parsing,
//! signal detection, role inference, evidence suggestions and offline
//! cause ranking. Everything here is a pure function over text; the
//! compiled pattern catalogs are the only shared state.

pub mod category;
pub mod config;
pub mod error;
pub mod interface;
pub mod redaction;
pub mod render;
pub mod role;
pub mod signals;
pub mod suggest;
pub mod triage;

pub use category::IncidentCategory;
pub use config::NetopsConfig;
pub use error::NetopsError;
pub use interface::{extract_interface_from_text, normalize_interface};
pub use redaction::redact;
pub use role::{resolve_role, Role, RoleContext};
pub use signals::{detect, Detection, Signal};
pub use suggest::{
    build_evidence_suggestions, build_evidence_suggestions_with, plan_suggestions, SuggestionPlan,
    SuggestionRequest, Topology,
};
pub use triage::{
    analyze_offline, rank_causes, triage, Cause, TriageOptions, TriageReport, TriageRequest,
};
