//! Core data types for site records, check requests, and check results.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Attributes of the parcel under evaluation, as produced by the upstream
/// analysis. Every field is optional; an absent field means "unknown".
///
/// Four attributes arrive under two spellings. The snake_case slot always
/// wins when both are present; see [`crate::request`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteRecord {
    #[serde(deserialize_with = "optional_text")]
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Parcel identifier. Accepted as a string or a bare number.
    #[serde(deserialize_with = "optional_text")]
    pub pnu: Option<String>,

    /// Capacity arrives as `ac_kw`/`acKW` from the analysis and as
    /// `capacity_kw`/`capacityKw` from older records; each spelling has its
    /// own slot so a record may carry several of them.
    pub ac_kw: Option<f64>,
    pub capacity_kw: Option<f64>,
    #[serde(rename = "acKW")]
    pub ac_kw_camel: Option<f64>,
    #[serde(rename = "capacityKw")]
    pub capacity_kw_camel: Option<f64>,

    pub slope_deg: Option<f64>,
    #[serde(rename = "slopeDeg")]
    pub slope_deg_camel: Option<f64>,

    pub sun_hours: Option<f64>,
    #[serde(rename = "sunHours")]
    pub sun_hours_camel: Option<f64>,

    pub dist_road_m: Option<f64>,
    pub dist_residential_m: Option<f64>,

    pub area_m2: Option<f64>,
    #[serde(rename = "areaM2")]
    pub area_m2_camel: Option<f64>,
}

/// Where the pipeline gets its site record from.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteSource {
    /// A record has been populated by the upstream analysis.
    Available(SiteRecord),
    /// No analysis has run yet; the pipeline must not contact the network.
    Unavailable,
}

impl From<Option<SiteRecord>> for SiteSource {
    fn from(record: Option<SiteRecord>) -> Self {
        match record {
            Some(r) => SiteSource::Available(r),
            None => SiteSource::Unavailable,
        }
    }
}

impl From<SiteRecord> for SiteSource {
    fn from(record: SiteRecord) -> Self {
        SiteSource::Available(record)
    }
}

/// Normalized payload for `POST /api/checks/analyze`.
///
/// Every field is always serialized; unknown values go out as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub pnu: Option<String>,
    pub capacity_kw: Option<f64>,
    pub slope_deg: Option<f64>,
    pub sun_hours: Option<f64>,
    pub dist_road_m: Option<f64>,
    pub dist_residential_m: Option<f64>,
    pub area_m2: Option<f64>,
}

/// Status reported by the scoring service for one criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
    /// Any status string the service sent that is not one of the above.
    Unrecognized(String),
}

impl CheckStatus {
    /// Interpret a raw `status` field. Missing or non-string values are `Warning`.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("PASS") => CheckStatus::Pass,
            Some("FAIL") => CheckStatus::Fail,
            Some("WARNING") | None => CheckStatus::Warning,
            Some(other) => CheckStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Unrecognized(s) => s,
        }
    }
}

impl Serialize for CheckStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Display text used for a criterion the service did not report.
pub const DEFAULT_VALUE_TEXT: &str = "확인 필요";

/// Result for a single criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub value: String,
    pub message: String,
}

impl CheckResult {
    /// The placeholder substituted for a criterion missing from the response.
    pub fn needs_verification() -> Self {
        Self {
            status: CheckStatus::Warning,
            value: DEFAULT_VALUE_TEXT.to_string(),
            message: String::new(),
        }
    }

    /// Read one `check_list` entry. Anything but an object counts as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                status: CheckStatus::from_raw(map.get("status")),
                value: map.get("value").and_then(display_text).unwrap_or_default(),
                message: map
                    .get("msg")
                    .or_else(|| map.get("message"))
                    .and_then(display_text)
                    .unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// Per-criterion results keyed by criterion key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckList(BTreeMap<String, CheckResult>);

impl CheckList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the raw `check_list` value. Anything but an object is empty.
    pub fn from_value(value: &Value) -> Self {
        let entries = match value {
            Value::Object(map) => map
                .iter()
                .filter_map(|(k, v)| CheckResult::from_value(v).map(|r| (k.clone(), r)))
                .collect(),
            _ => BTreeMap::new(),
        };
        Self(entries)
    }

    pub fn insert(&mut self, key: impl Into<String>, result: CheckResult) {
        self.0.insert(key.into(), result);
    }

    pub fn get(&self, key: &str) -> Option<&CheckResult> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for CheckList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

/// Top-level score fields, kept as display text exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    #[serde(default, deserialize_with = "optional_text")]
    pub total_score: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub confidence: Option<String>,
}

/// Parsed body of a successful analyze call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub check_list: CheckList,
    #[serde(flatten)]
    pub summary: ScoreSummary,
}

/// Render a JSON scalar as display text. `null` has no text.
pub(crate) fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(display_text))
}

/// Errors raised while talking to the scoring service.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl TransportError {
    /// HTTP status code, when the failure was a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Errors raised while loading a site record document.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type.
pub type TransportResult<T> = Result<T, TransportError>;
