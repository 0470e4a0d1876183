//! Signal tags emitted by the diagnostic layer
//!
//! Signals are bracketed keywords marking categories of diagnostic events:
//! - Fixed, closed vocabulary known at build time
//! - Detection is a plain substring presence test
//! - Repeated occurrences of a tag collapse to a single detection

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of signal tags this layer responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalTag {
    VoidDetected,
    SchismCritical,
    AdversarialSuspicion,
    SystemHalt,
    Fatal,
    High,
}

impl SignalTag {
    /// All tags, in fixed vocabulary order
    pub const ALL: [SignalTag; 6] = [
        SignalTag::VoidDetected,
        SignalTag::SchismCritical,
        SignalTag::AdversarialSuspicion,
        SignalTag::SystemHalt,
        SignalTag::Fatal,
        SignalTag::High,
    ];

    /// Bare form, e.g. `VOID_DETECTED`
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalTag::VoidDetected => "VOID_DETECTED",
            SignalTag::SchismCritical => "SCHISM_CRITICAL",
            SignalTag::AdversarialSuspicion => "ADVERSARIAL_SUSPICION",
            SignalTag::SystemHalt => "SYSTEM_HALT",
            SignalTag::Fatal => "FATAL",
            SignalTag::High => "HIGH",
        }
    }

    /// Bracket-delimited form as it appears in diagnostic output, e.g. `[VOID_DETECTED]`
    pub fn bracketed(&self) -> &'static str {
        match self {
            SignalTag::VoidDetected => "[VOID_DETECTED]",
            SignalTag::SchismCritical => "[SCHISM_CRITICAL]",
            SignalTag::AdversarialSuspicion => "[ADVERSARIAL_SUSPICION]",
            SignalTag::SystemHalt => "[SYSTEM_HALT]",
            SignalTag::Fatal => "[FATAL]",
            SignalTag::High => "[HIGH]",
        }
    }
}

impl fmt::Display for SignalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One signal tag found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSignal {
    /// The matched tag
    pub tag: SignalTag,
}

impl DetectedSignal {
    /// Bare form of the matched tag
    pub fn name(&self) -> &'static str {
        self.tag.as_str()
    }

    /// Bracket-delimited form of the matched tag
    pub fn bracketed(&self) -> &'static str {
        self.tag.bracketed()
    }
}

/// Scan text for every known signal tag
///
/// Returns one [`DetectedSignal`] per tag whose bracketed form appears as a
/// substring, in vocabulary order rather than text order. The match is
/// case-sensitive. A tag absent from the text is silently omitted.
pub fn detect_signals(text: &str) -> Vec<DetectedSignal> {
    SignalTag::ALL
        .iter()
        .filter(|tag| text.contains(tag.bracketed()))
        .map(|&tag| DetectedSignal { tag })
        .collect()
}
