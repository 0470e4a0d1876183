//! Escalation verdicts for void records
//!
//! Every record escalates; resolution only selects the narrative:
//! - No artifact token captured -> manual search
//! - Token outside the vocabulary -> invalid type
//! - Valid type -> confirmed void
//!
//! The artifact is never looked up in any store. The "search" wording is part
//! of the forensic narrative, and [`resolve`] must stay a pure classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use sentinel_core::{ArtifactKind, VoidRecord};

/// Terminal status of a resolved record
///
/// A `VOID_DETECTED` signal always represents a missing artifact that needs
/// manual follow-up; there is no clearing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscalationStatus {
    Escalated,
}

/// The three terminal classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationAction {
    /// Block matched but no artifact token could be captured
    UnparsedArtifact,
    /// Token captured but not in the artifact vocabulary
    InvalidArtifact,
    /// Valid artifact type with no matching evidence
    ArtifactMissing,
}

impl EscalationAction {
    /// Fixed action label
    pub fn as_str(&self) -> &'static str {
        match self {
            EscalationAction::UnparsedArtifact => "Could not parse artifact name",
            EscalationAction::InvalidArtifact => "Invalid artifact type",
            EscalationAction::ArtifactMissing => "Artifact not found",
        }
    }
}

impl fmt::Display for EscalationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verdict for one void record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub status: EscalationStatus,
    pub action: EscalationAction,
    /// Human-readable result message
    pub result: String,
}

/// Classify one record into its escalation
///
/// First matching rule wins: unparsed artifact, then invalid type, then
/// missing artifact. An absent description renders as `None` in the manual
/// search message.
pub fn resolve(record: &VoidRecord) -> Escalation {
    let Some(artifact) = record.artifact.as_deref() else {
        let description = record.description.as_deref().unwrap_or("None");
        return Escalation {
            status: EscalationStatus::Escalated,
            action: EscalationAction::UnparsedArtifact,
            result: format!("Manual search required: {description}"),
        };
    };

    match artifact.parse::<ArtifactKind>() {
        Err(_) => Escalation {
            status: EscalationStatus::Escalated,
            action: EscalationAction::InvalidArtifact,
            result: format!("Unknown type: {artifact}"),
        },
        Ok(_) => Escalation {
            status: EscalationStatus::Escalated,
            action: EscalationAction::ArtifactMissing,
            result: format!("Searched for \"{artifact}\" - no matches. VOID CONFIRMED."),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_record_requires_manual_search() {
        let escalation = resolve(&VoidRecord::empty());
        assert_eq!(escalation.status, EscalationStatus::Escalated);
        assert_eq!(escalation.action, EscalationAction::UnparsedArtifact);
        assert_eq!(escalation.result, "Manual search required: None");
    }

    #[test]
    fn test_unknown_artifact_is_invalid() {
        let record = VoidRecord {
            artifact: Some("ROGUE_TYPE".to_string()),
            description: Some("does not exist".to_string()),
        };
        let escalation = resolve(&record);
        assert_eq!(escalation.action, EscalationAction::InvalidArtifact);
        assert_eq!(escalation.result, "Unknown type: ROGUE_TYPE");
    }

    #[test]
    fn test_valid_artifact_confirms_void() {
        let record = VoidRecord {
            artifact: Some("INCIDENT_TICKET".to_string()),
            description: Some("Incident record for March 15 purge".to_string()),
        };
        let escalation = resolve(&record);
        assert_eq!(escalation.status, EscalationStatus::Escalated);
        assert_eq!(escalation.action, EscalationAction::ArtifactMissing);
        assert_eq!(
            escalation.result,
            "Searched for \"INCIDENT_TICKET\" - no matches. VOID CONFIRMED."
        );
    }

    #[test]
    fn test_lowercase_token_is_not_normalized() {
        let record = VoidRecord {
            artifact: Some("backup_log".to_string()),
            description: Some("lowercase test".to_string()),
        };
        let escalation = resolve(&record);
        assert_eq!(escalation.action, EscalationAction::InvalidArtifact);
        assert_eq!(escalation.result, "Unknown type: backup_log");
    }

    #[test]
    fn test_action_labels_are_fixed() {
        assert_eq!(
            EscalationAction::UnparsedArtifact.as_str(),
            "Could not parse artifact name"
        );
        assert_eq!(EscalationAction::InvalidArtifact.as_str(), "Invalid artifact type");
        assert_eq!(EscalationAction::ArtifactMissing.as_str(), "Artifact not found");
    }
}
