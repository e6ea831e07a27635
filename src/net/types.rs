//! Wire types for the incident-reporter API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The service speaks camelCase JSON with Mongo-style `_id`/`_user`-shaped
//! reference fields and wraps payloads in a `{ success, data }` envelope.
//! Records coming off the wire are deserialized defensively: optional and
//! missing fields collapse to defaults instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope; list endpoints nest the collection in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Success marker sent by most routes.
    #[serde(default)]
    pub success: bool,
    /// The actual payload.
    pub data: T,
}

/// Account record as returned by login and the profile routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Mongo object id.
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    /// Account role: `investigator`, `admin`, or `user`.
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Avatar/image URL from the editable profile.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub developer_title: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub developer_stack: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub portfolio_link: Option<String>,
    #[serde(default)]
    pub cv_link: Option<String>,
}

/// Authenticated session: the bearer token plus the user fields, flat.
///
/// This is the one object persisted to local storage between visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

/// Latitude/longitude pair attached to incidents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Reported incident.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Free-form labels; the wire field is singular `tag`.
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub target_model: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,
}

/// Evidence item attached to an incident. Several fields arrive null on
/// older records, so everything searchable is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Content hash recorded at upload time.
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

/// Requesting user embedded in an audit row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditUser {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_type: String,
}

/// Product embedded in an audit row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub unit: String,
}

/// Stock audit entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_user", default)]
    pub user: Option<AuditUser>,
    #[serde(rename = "_product", default)]
    pub product: Option<AuditProduct>,
    /// Quantity is stored as a string upstream but arrives as a bare
    /// number on some records.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub quantity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Requesting user embedded in a report row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedBy {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_type: String,
}

/// Product line inside a report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProduct {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

/// Minimal incident fields present when a report reference is populated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncidentSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Report incident reference: the service returns either the populated
/// incident document or a bare object id depending on the route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IncidentRef {
    Embedded(IncidentSummary),
    Id(String),
}

impl IncidentRef {
    /// Title of the referenced incident, when populated and non-empty.
    pub fn title(&self) -> Option<&str> {
        match self {
            IncidentRef::Embedded(summary) if !summary.title.is_empty() => Some(&summary.title),
            _ => None,
        }
    }
}

/// Signed report. Rides the legacy order schema, hence the product lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_orderedBy", default)]
    pub ordered_by: Option<OrderedBy>,
    #[serde(default)]
    pub products: Vec<ReportProduct>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "_incident", default)]
    pub incident: Option<IncidentRef>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub signed: Option<String>,
    /// Signature scheme label, e.g. `SHA256`.
    #[serde(default)]
    pub signature: Option<String>,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Sign-up form payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub gender: String,
    pub user_type: String,
    pub password: String,
    pub password_confirm: String,
}

/// Editable profile fields sent to `set-profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub image: String,
    pub developer_title: String,
    pub years_of_experience: u32,
    pub developer_stack: Vec<String>,
    pub certifications: Vec<String>,
    pub portfolio_link: String,
    pub cv_link: String,
}

/// New-incident payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub location: GeoPoint,
    #[serde(rename = "tag")]
    pub tags: Vec<String>,
}

/// Incident edit payload; title is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentUpdate {
    pub description: String,
    pub location: GeoPoint,
    #[serde(rename = "tag")]
    pub tags: Vec<String>,
}

/// New-evidence payload; `_incident` is the owning incident's id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceDraft {
    #[serde(rename = "_incident")]
    pub incident_id: String,
    pub file_url: String,
    pub file_type: String,
    pub description: String,
    pub hash: String,
}

/// Evidence edit payload; only type and description are editable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceUpdate {
    pub file_type: String,
    pub description: String,
}

/// New-audit payload; `_product` is a product id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDraft {
    #[serde(rename = "_product")]
    pub product_id: String,
    pub quantity: String,
    pub location: String,
}

/// Audit edit payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditUpdate {
    pub quantity: String,
    pub location: String,
}

/// New-report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    #[serde(rename = "_incident")]
    pub incident_id: String,
    pub content: String,
    pub signed: String,
    pub signature: String,
}

/// Product line inside a report edit payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProductDraft {
    pub product_id: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// Report edit payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    pub note: String,
    pub status: String,
    pub products: Vec<ReportProductDraft>,
}

/// Accept a JSON string or bare number as a `String`.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}
