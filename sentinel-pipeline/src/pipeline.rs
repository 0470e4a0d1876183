//! Triage pipeline: detect -> extract -> resolve -> aggregate
//!
//! Control flow is strictly linear and synchronous. The detector runs once;
//! if `VOID_DETECTED` is present the extractor runs once over the whole input
//! and every returned record is resolved into an escalation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use sentinel_core::{detect_signals, extract_void_blocks, DetectedSignal, SignalTag};

use crate::escalation::{resolve, Escalation};

/// Pipeline configuration
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Upper bound on accepted input size in bytes; `None` accepts any input
    pub max_input_bytes: Option<usize>,
}

/// Errors from pipeline runs
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input of {len} bytes exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },
}

/// One (signal, escalation) pair in the aggregate result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEscalation {
    pub signal: DetectedSignal,
    pub escalation: Escalation,
}

/// Aggregate result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Count of distinct signal tags found
    pub signals_found: usize,
    /// One entry per extracted void record, in extraction order
    pub escalations: Vec<SignalEscalation>,
}

/// The forensic triage pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over one block of diagnostic output
    ///
    /// `VOID_DETECTED` is a presence flag, so the extractor runs at most once
    /// per input; a text with several blocks still fans out into one
    /// escalation per block, all carrying the same detected signal.
    pub fn process(&self, text: &str) -> Result<PipelineResult, PipelineError> {
        if let Some(max) = self.config.max_input_bytes {
            if text.len() > max {
                return Err(PipelineError::InputTooLarge {
                    len: text.len(),
                    max,
                });
            }
        }

        let signals = detect_signals(text);
        debug!(signals = signals.len(), "signal scan complete");

        let mut escalations = Vec::new();

        for signal in &signals {
            if signal.tag != SignalTag::VoidDetected {
                continue;
            }

            for record in extract_void_blocks(text) {
                let escalation = resolve(&record);
                debug!(action = %escalation.action, "void record resolved");
                escalations.push(SignalEscalation {
                    signal: *signal,
                    escalation,
                });
            }
        }

        info!(
            signals_found = signals.len(),
            escalations = escalations.len(),
            "pipeline run complete"
        );

        Ok(PipelineResult {
            signals_found: signals.len(),
            escalations,
        })
    }
}
