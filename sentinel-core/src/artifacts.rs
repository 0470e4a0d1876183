//! Void blocks and the artifact vocabulary
//!
//! A `[VOID_DETECTED]` block declares that an expected evidentiary record is
//! missing:
//!
//! ```text
//! [VOID_DETECTED]: BACKUP_LOG | Post-incident snapshot confirming restore
//! ```
//!
//! Extraction is multi-block aware and never fails: malformed input degrades
//! to a record with absent fields.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of valid artifact types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactKind {
    BackupLog,
    IncidentTicket,
    ChangeRecord,
    ApprovalDoc,
    AuditTrail,
    TimestampLog,
    EscalationRecord,
}

impl ArtifactKind {
    /// All valid artifact types
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::BackupLog,
        ArtifactKind::IncidentTicket,
        ArtifactKind::ChangeRecord,
        ArtifactKind::ApprovalDoc,
        ArtifactKind::AuditTrail,
        ArtifactKind::TimestampLog,
        ArtifactKind::EscalationRecord,
    ];

    /// Canonical name, e.g. `BACKUP_LOG`
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::BackupLog => "BACKUP_LOG",
            ArtifactKind::IncidentTicket => "INCIDENT_TICKET",
            ArtifactKind::ChangeRecord => "CHANGE_RECORD",
            ArtifactKind::ApprovalDoc => "APPROVAL_DOC",
            ArtifactKind::AuditTrail => "AUDIT_TRAIL",
            ArtifactKind::TimestampLog => "TIMESTAMP_LOG",
            ArtifactKind::EscalationRecord => "ESCALATION_RECORD",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An artifact token that is not in the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown artifact type: {0}")]
pub struct UnknownArtifactError(pub String);

impl FromStr for ArtifactKind {
    type Err = UnknownArtifactError;

    /// Exact, case-sensitive membership test. Tokens captured from lowercase
    /// blocks do not match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownArtifactError(s.to_string()))
    }
}

/// One extracted `[VOID_DETECTED]` block
///
/// Both fields are absent when no well-formed block was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidRecord {
    /// Artifact token exactly as written in the input, no case normalization
    pub artifact: Option<String>,
    /// Free text up to the next bracketed tag or end of input
    pub description: Option<String>,
}

impl VoidRecord {
    /// The "no match" record emitted when extraction finds nothing
    pub fn empty() -> Self {
        Self::default()
    }
}

// Tag and artifact alphabet match case-insensitively. The description runs to
// the next `[` or end of input and may span newlines; the negated class keeps
// the scan linear-time.
static VOID_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[VOID_DETECTED\]:\s*([A-Z_]+)\s*\|\s*([^\[]+)").unwrap()
});

/// Extract every `[VOID_DETECTED]` block from the input
///
/// All non-overlapping matches are returned in text order, with artifact and
/// description trimmed of surrounding whitespace. When nothing matches the
/// result is a single all-absent record, never an empty vec; downstream
/// counting depends on that sentinel.
pub fn extract_void_blocks(text: &str) -> Vec<VoidRecord> {
    let mut records: Vec<VoidRecord> = VOID_BLOCK_REGEX
        .captures_iter(text)
        .map(|cap| VoidRecord {
            artifact: Some(cap[1].trim().to_string()),
            description: Some(cap[2].trim().to_string()),
        })
        .collect();

    if records.is_empty() {
        records.push(VoidRecord::empty());
    }

    records
}
