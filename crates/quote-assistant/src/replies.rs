//! Opt-in parsers for the JSON the model is asked to produce.
//!
//! Neither the drawing workflow nor the email classifier call these; they
//! hand back the raw reply. Callers that want structured data parse it here
//! and handle [`AssistantError::MalformedReply`] themselves.

use quote_core::AssistantError;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Raw-material shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    #[serde(rename = "retangular")]
    Rectangular,
    #[serde(rename = "redondo")]
    Round,
    #[serde(rename = "tubo")]
    Tube,
}

/// Shape-dependent raw-material measurements.
///
/// Rectangular stock fills thickness, width and length; round stock fills
/// diameter and length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "espessura", default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(rename = "largura", default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "comprimento", default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(rename = "diametro", default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
}

/// Estimated hours on one machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEstimate {
    #[serde(rename = "maquina")]
    pub machine: String,
    #[serde(rename = "hora")]
    pub hours: f64,
}

/// Structured drawing summary (step 4 of the analysis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingSummary {
    /// `None` when the model left the material blank.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub material: Option<String>,
    #[serde(rename = "formato")]
    pub shape: Shape,
    #[serde(rename = "dimensoes", default)]
    pub dimensions: Dimensions,
    #[serde(rename = "processos", default, deserialize_with = "deserialize_processes")]
    pub processes: Vec<ProcessEstimate>,
}

impl DrawingSummary {
    /// Parse a model reply into a summary.
    pub fn parse(reply: &str) -> Result<Self, AssistantError> {
        parse_reply(reply)
    }

    /// Total estimated hours across all machines.
    pub fn total_hours(&self) -> f64 {
        self.processes.iter().map(|p| p.hours).sum()
    }
}

/// Email classification reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailClassification {
    #[serde(rename = "is_orcamento")]
    pub is_quote_request: bool,
    #[serde(rename = "quantidade", default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub material: Option<String>,
    #[serde(rename = "tratamento", default, deserialize_with = "blank_as_none")]
    pub treatment: Option<String>,
}

impl EmailClassification {
    /// Parse a model reply into a classification.
    pub fn parse(reply: &str) -> Result<Self, AssistantError> {
        parse_reply(reply)
    }
}

/// The prompt describes `processos` loosely, so both a list of pairs and a
/// pair of parallel lists are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProcessesRepr {
    Pairs(Vec<ProcessEstimate>),
    Columns {
        maquina: Vec<String>,
        hora: Vec<f64>,
    },
    Single(ProcessEstimate),
}

fn deserialize_processes<'de, D>(deserializer: D) -> Result<Vec<ProcessEstimate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match ProcessesRepr::deserialize(deserializer)? {
        ProcessesRepr::Pairs(pairs) => Ok(pairs),
        ProcessesRepr::Single(pair) => Ok(vec![pair]),
        ProcessesRepr::Columns { maquina, hora } => {
            if maquina.len() != hora.len() {
                return Err(D::Error::custom(format!(
                    "{} machines but {} hour values",
                    maquina.len(),
                    hora.len()
                )));
            }
            Ok(maquina
                .into_iter()
                .zip(hora)
                .map(|(machine, hours)| ProcessEstimate { machine, hours })
                .collect())
        }
    }
}

/// Non-quote replies fill unused fields with `""` or `null`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Accepts `null`, `""`, integers, integral floats and numeric strings.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Number(f64),
        Text(String),
    }

    let number = match Option::<Quantity>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Quantity::Number(n)) => n,
        Some(Quantity::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.replace(',', ".")
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid quantity: {:?}", text)))?
        }
    };

    if number.fract() != 0.0 || number < 0.0 || number > u32::MAX as f64 {
        return Err(D::Error::custom(format!("invalid quantity: {}", number)));
    }
    Ok(Some(number as u32))
}

fn parse_reply<T: for<'de> Deserialize<'de>>(reply: &str) -> Result<T, AssistantError> {
    let json = json_payload(reply);
    debug!("Parsing model reply as JSON ({} bytes)", json.len());

    serde_json::from_str(json).map_err(|e| {
        AssistantError::MalformedReply(format!("parse error: {}, reply was: {}", e, reply))
    })
}

/// Locate the JSON object in a reply that may be fenced or chatty.
///
/// The first `{` starts the object whether or not it sits inside a fence,
/// so stray backticks after the object are never mistaken for one.
fn json_payload(reply: &str) -> &str {
    let trimmed = reply.trim();

    match trimmed.find('{') {
        Some(start) => balanced_object(&trimmed[start..]),
        None => trimmed,
    }
}

/// Cut a string starting with `{` at its matching close brace.
fn balanced_object(s: &str) -> &str {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    s
}
