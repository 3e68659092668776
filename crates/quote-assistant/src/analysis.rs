//! Result of the four-step drawing analysis.

use quote_core::{AssistantError, Message};

use crate::replies::DrawingSummary;

/// Every answer produced while analysing one technical drawing.
///
/// The workflow historically handed back only the dimensions answer and
/// logged the JSON summary. Both are kept here so the caller can pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingAnalysis {
    /// File id the analysis refers to.
    pub file_id: String,
    /// Requested part quantity.
    pub quantity: u32,
    /// Step 1: raw-material dimensions.
    pub dimensions: String,
    /// Step 2: manufacturing processes and why.
    pub processes: String,
    /// Step 3: production time per machine.
    pub time_estimate: String,
    /// Step 4: JSON summary text, unvalidated.
    pub summary: String,
    /// Full message history, system turn first.
    pub transcript: Vec<Message>,
}

impl DrawingAnalysis {
    /// The legacy return value: the first step's answer.
    pub fn primary(&self) -> &str {
        &self.dimensions
    }

    /// Parse the JSON summary. The reply is untrusted model output.
    pub fn parse_summary(&self) -> Result<DrawingSummary, AssistantError> {
        DrawingSummary::parse(&self.summary)
    }
}
