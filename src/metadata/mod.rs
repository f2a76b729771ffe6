// Sidecar JSON decoding
//
// Sidecars come from consumer export pipelines that are not consistent about
// key casing, so every string-ish field is resolved through an ordered list
// of accepted key synonyms (first present wins).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExifMirrorError, Result};
use crate::geo::GeoCoordinate;

const TITLE_KEYS: [&str; 2] = ["title", "Title"];
const DESCRIPTION_KEYS: [&str; 2] = ["description", "Description"];
const DATE_TIME_KEYS: [&str; 2] = ["dateTime", "DateTime"];
const MAKE_KEYS: [&str; 2] = ["make", "Make"];
const MODEL_KEYS: [&str; 2] = ["model", "Model"];

/// Normalized view of one sidecar payload. All fields are optional; an unset
/// field means "do not modify that tag". Built once per file, never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedMetadata {
    // Image-path fields
    pub taken_timestamp: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub people: Vec<String>,
    pub geo: Option<GeoCoordinate>,

    // Video-path fields, passed through to the external tool as literal text
    pub date_time: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub gps_latitude: Option<String>,
    pub gps_longitude: Option<String>,
}

impl NormalizedMetadata {
    /// People names joined for display/embedding, `None` when empty.
    pub fn joined_people(&self) -> Option<String> {
        if self.people.is_empty() {
            None
        } else {
            Some(self.people.join(", "))
        }
    }
}

/// Decode a sidecar file into a NormalizedMetadata record.
pub fn decode_sidecar(path: &Path) -> Result<NormalizedMetadata> {
    let bytes = fs::read(path)?;
    decode_bytes(&bytes).map_err(|e| match e {
        ExifMirrorError::Decode(msg) => {
            ExifMirrorError::Decode(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Decode raw sidecar bytes. The payload must be a JSON object.
pub fn decode_bytes(bytes: &[u8]) -> Result<NormalizedMetadata> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ExifMirrorError::Decode(format!("invalid JSON ({})", e)))?;

    let obj = value
        .as_object()
        .ok_or_else(|| ExifMirrorError::Decode("top-level value is not an object".to_string()))?;

    Ok(normalize(obj))
}

fn normalize(obj: &Map<String, Value>) -> NormalizedMetadata {
    NormalizedMetadata {
        taken_timestamp: obj
            .get("photoTakenTime")
            .and_then(|t| t.get("timestamp"))
            .and_then(parse_timestamp),
        title: first_string(obj, &TITLE_KEYS),
        description: first_string(obj, &DESCRIPTION_KEYS),
        people: obj.get("people").map(collect_people).unwrap_or_default(),
        geo: obj.get("geoData").and_then(parse_geo),
        date_time: first_string(obj, &DATE_TIME_KEYS),
        make: first_string(obj, &MAKE_KEYS),
        model: first_string(obj, &MODEL_KEYS),
        gps_latitude: obj.get("gpsLatitude").and_then(value_to_string),
        gps_longitude: obj.get("gpsLongitude").and_then(value_to_string),
    }
}

/// Resolve a logical field through its ordered key synonyms.
fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(value_to_string))
}

/// Convert a JSON value to tag text (handles both string and numeric values).
/// Empty strings count as absent.
fn value_to_string(val: &Value) -> Option<String> {
    match val {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Epoch seconds, accepted as a JSON number or a numeric string.
fn parse_timestamp(val: &Value) -> Option<i64> {
    match val {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Both coordinates must be present, non-null numbers.
fn parse_geo(val: &Value) -> Option<GeoCoordinate> {
    let latitude = val.get("latitude").and_then(Value::as_f64)?;
    let longitude = val.get("longitude").and_then(Value::as_f64)?;
    Some(GeoCoordinate {
        latitude,
        longitude,
    })
}

fn collect_people(val: &Value) -> Vec<String> {
    val.as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|p| p.get("name").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
