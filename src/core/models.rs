//! # Data Models Module
//!
//! Typed view of the `remates_result.json` document written by the scraper.
//! Every field has a default so that a missing leaf never fails the whole
//! run. Only a document whose sections have the wrong shape (for example a
//! list where a mapping is expected) is rejected as malformed.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// Deserializes a section that must be a JSON object.
///
/// Derived struct impls also accept sequences (fields by position), which
/// would let `[12, 10]` pass as statistics.
fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    serde_json::from_value(Value::Object(map)).map_err(D::Error::custom)
}

/// Top-level outcome reported by the scraper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ScrapeStatus {
    /// `"success"`: statistics and modules are expected to be present.
    Success,
    /// `"error"`: `error_message` is expected to be present.
    Error,
    /// Any other value. An absent or `null` status is `Unknown("unknown")`.
    Unknown(String),
}

impl ScrapeStatus {
    /// The status as written in the document.
    pub fn as_str(&self) -> &str {
        match self {
            ScrapeStatus::Success => "success",
            ScrapeStatus::Error => "error",
            ScrapeStatus::Unknown(label) => label,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeStatus::Success)
    }
}

impl Default for ScrapeStatus {
    fn default() -> Self {
        ScrapeStatus::Unknown("unknown".to_string())
    }
}

impl From<String> for ScrapeStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => ScrapeStatus::Success,
            "error" => ScrapeStatus::Error,
            _ => ScrapeStatus::Unknown(value),
        }
    }
}

impl From<Value> for ScrapeStatus {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ScrapeStatus::default(),
            Value::String(s) => ScrapeStatus::from(s),
            // Non-string statuses are never "success"; keep their JSON text.
            other => ScrapeStatus::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ScrapeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single statistics value.
///
/// Displays as `0` when absent or `null`, numbers as JSON spells them
/// (`12`, `45.2`) and strings verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Metric(Option<Value>);

impl Metric {
    pub fn new(value: impl Into<Value>) -> Self {
        Metric(Some(value.into()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => f.write_str("0"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// The `estadisticas` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Auctions found in the listing.
    #[serde(rename = "total_remates_listado")]
    pub total_listed: Metric,
    /// Auctions whose detail page was extracted.
    #[serde(rename = "remates_con_detalle")]
    pub with_detail: Metric,
    #[serde(rename = "duracion_segundos")]
    pub duration_secs: Metric,
    /// Percentage of listed auctions with detail.
    #[serde(rename = "tasa_exito_detalle")]
    pub detail_success_rate: Metric,
}

/// The `modulo_remates` section: the filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingModule {
    #[serde(rename = "filtros_aplicados")]
    pub applied_filters: Map<String, Value>,
    #[serde(rename = "formulario_filtros")]
    pub filter_form: Map<String, Value>,
    #[serde(rename = "resultados")]
    pub results: Vec<Value>,
}

/// The whole result document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrapeResult {
    pub status: ScrapeStatus,
    #[serde(rename = "error_message")]
    pub raw_error_message: Option<Value>,
    #[serde(rename = "estadisticas", deserialize_with = "object")]
    pub stats: Stats,
    #[serde(rename = "modulo_remates", deserialize_with = "object")]
    pub listing: ListingModule,
    /// Opaque per-auction detail records.
    #[serde(rename = "modulo_detalle_remates")]
    pub details: Vec<Value>,
}

impl ScrapeResult {
    /// Parses a result document from its JSON text.
    ///
    /// The top level must be a JSON object.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let document: Map<String, Value> = serde_json::from_str(text)?;
        serde_json::from_value(Value::Object(document))
    }

    /// The scraper's error message, if it gave one.
    ///
    /// `null` counts as absent. Non-string values are shown as JSON text.
    pub fn error_message(&self) -> Option<String> {
        match self.raw_error_message.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn applied_filter_count(&self) -> usize {
        self.listing.applied_filters.len()
    }

    pub fn form_field_count(&self) -> usize {
        self.listing.filter_form.len()
    }

    pub fn result_count(&self) -> usize {
        self.listing.results.len()
    }

    pub fn detail_count(&self) -> usize {
        self.details.len()
    }
}
