use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A locomotive record as delivered by the dashboard backend.
///
/// Field names follow the dashboard's JSON wire format. The `LastInspec`
/// and `DueInspec` fields arrive as `{}` when no inspection is recorded;
/// that deserializes to `None`, never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocoRecord {
    /// Stable internal identifier (24-char hex). Never shown to end users.
    #[serde(rename = "id")]
    pub asset_id: String,
    /// Human-facing display name (e.g., "4430 SD70M").
    pub name: String,
    /// Multiple-unit consist identifier, if the loco is coupled.
    #[serde(rename = "muId", default, skip_serializing_if = "Option::is_none")]
    pub mu_id: Option<String>,
    /// Human-facing locomotive number. May carry formatting whitespace.
    #[serde(rename = "locoNo")]
    pub loco_no: String,
    /// Operational state flags.
    #[serde(rename = "assetStates", default)]
    pub asset_states: AssetStates,
    /// Out-of-use credit accrual, if the loco has been out of use.
    #[serde(
        rename = "outOfUseCredit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub out_of_use_credit: Option<OutOfUseCredit>,
    /// Most recent completed inspection.
    #[serde(
        rename = "LastInspec",
        default,
        deserialize_with = "empty_object_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_inspection: Option<Inspection>,
    /// Next inspection coming due.
    #[serde(
        rename = "DueInspec",
        default,
        deserialize_with = "empty_object_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_inspection: Option<Inspection>,
}

impl LocoRecord {
    /// Loco number with formatting whitespace stripped.
    pub fn trimmed_loco_no(&self) -> &str {
        self.loco_no.trim()
    }
}

/// Operational state flags reported by the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssetStates {
    #[serde(rename = "inService", default)]
    pub in_service: bool,
    #[serde(rename = "outOfUse", default)]
    pub out_of_use: bool,
    #[serde(default)]
    pub stored: bool,
}

/// Accrued out-of-use credit for a locomotive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutOfUseCredit {
    #[serde(rename = "daysAccrued")]
    pub days_accrued: u32,
    #[serde(rename = "since", default, skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
}

/// An inspection entry (completed or due).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    #[serde(
        rename = "inspectionType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Deserialize `{}` or `null` as `None`, any populated object as `Some`.
fn empty_object_as_none<'de, D>(deserializer: D) -> Result<Option<Inspection>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
