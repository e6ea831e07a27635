//! HTTP client for the incident-reporter API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app is a pure browser client; every operation here is a single
//! stateless round-trip to the hosted service. There is no retry, caching,
//! or request deduplication layer. Authenticated calls take the bearer
//! token as an explicit parameter so nothing in this module reads ambient
//! session state.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are normalized through [`crate::net::error`]; callers
//! receive an [`ApiError`] whose `Display` is already user-presentable.
//!
//! The endpoint table mirrors the service as deployed, quirks included:
//! updates AND deletes are PATCH calls (deletes are soft), and the report
//! list still rides the legacy `order` route.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::{ApiError, error_from_parts};
use crate::net::types::{
    Audit, AuditDraft, AuditUpdate, Envelope, Evidence, EvidenceDraft, EvidenceUpdate, Incident,
    IncidentDraft, IncidentUpdate, ProfileUpdate, Report, ReportDraft, ReportUpdate, Session,
    SignupRequest, User,
};

/// Base URL of the hosted service; fixed at compile time.
const BASE_URL: &str = "https://cloud-incident-reporter.onrender.com";

fn endpoint(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// ---------------------------------------------------------------------------
// Endpoint table
// ---------------------------------------------------------------------------

fn signup_endpoint() -> String {
    endpoint("/api/v1/auth/signup")
}

fn verify_endpoint() -> String {
    endpoint("/api/v1/auth/verify")
}

fn login_endpoint() -> String {
    endpoint("/api/v1/auth/login")
}

fn forgot_password_endpoint() -> String {
    endpoint("/api/v1/auth/forgotpassword")
}

fn reset_password_endpoint() -> String {
    endpoint("/api/v1/auth/resetpassword")
}

fn get_profile_endpoint() -> String {
    endpoint("/api/v1/profile/get-profile")
}

fn set_profile_endpoint() -> String {
    endpoint("/api/v1/profile/set-profile")
}

fn incidents_endpoint() -> String {
    endpoint("/api/v1/incident/get-incidents")
}

fn incident_create_endpoint() -> String {
    endpoint("/api/v1/incident/create-incident")
}

fn incident_update_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/incident/update-incident/{id}"))
}

fn incident_delete_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/incident/delete-incident/{id}"))
}

fn evidence_endpoint() -> String {
    endpoint("/api/v1/evidence/get-evidences")
}

fn evidence_create_endpoint() -> String {
    endpoint("/api/v1/evidence/create-evidence")
}

fn evidence_update_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/evidence/update-evidence/{id}"))
}

fn evidence_delete_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/evidence/delete-evidence/{id}"))
}

fn audits_endpoint() -> String {
    endpoint("/api/v1/audit/all-audits")
}

fn audit_create_endpoint() -> String {
    endpoint("/api/v1/audit/create-audit")
}

fn audit_update_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/audit/update-audit/{id}"))
}

fn audit_delete_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/audit/delete-audit/{id}"))
}

/// Reports predate the rename from "orders" upstream; the list route never
/// moved.
fn reports_endpoint() -> String {
    endpoint("/api/v1/order/all-orders")
}

fn report_create_endpoint() -> String {
    endpoint("/api/v1/report/create-report")
}

fn report_update_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/report/update-report/{id}"))
}

fn report_delete_endpoint(id: &str) -> String {
    endpoint(&format!("/api/v1/report/delete-report/{id}"))
}

// ---------------------------------------------------------------------------
// Request plumbing
// ---------------------------------------------------------------------------

async fn require_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_from_parts(status, &body))
}

async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<Envelope<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST an unauthenticated JSON body and decode the enveloped payload.
async fn post_public<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_data(require_ok(response).await?).await
}

/// POST an unauthenticated JSON body, keeping only the success/failure.
async fn post_public_ack<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    require_ok(response).await.map(|_| ())
}

/// GET with bearer auth, decoding the enveloped payload.
async fn get_authed<T: DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_data(require_ok(response).await?).await
}

/// Send an authed JSON body with the given builder, keeping only the
/// success/failure. Mutations are fire-and-refetch, so response bodies are
/// not decoded here.
async fn request_ack<B: Serialize>(
    builder: RequestBuilder,
    token: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = builder
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    require_ok(response).await.map(|_| ())
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Register a new account; the service follows up with an OTP email.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    post_public_ack(&signup_endpoint(), request).await
}

/// Confirm a signup with the emailed code. The route identifies the
/// pending account from the code alone.
pub async fn verify_otp(code: &str) -> Result<(), ApiError> {
    post_public_ack(&verify_endpoint(), &serde_json::json!({ "otpCode": code })).await
}

/// Exchange credentials for a bearer session.
pub async fn login(email: &str, password: &str) -> Result<Session, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let session: Session = post_public(&login_endpoint(), &payload).await?;
    log::debug!("login ok for {}", session.user.email);
    Ok(session)
}

/// Request a password-reset code for the given address.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    post_public_ack(&forgot_password_endpoint(), &serde_json::json!({ "email": email })).await
}

/// Set a new password using the emailed reset code.
pub async fn reset_password(
    code: &str,
    password: &str,
    password_confirm: &str,
) -> Result<(), ApiError> {
    let payload = serde_json::json!({
        "otpCode": code,
        "password": password,
        "passwordConfirm": password_confirm,
    });
    post_public_ack(&reset_password_endpoint(), &payload).await
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

pub async fn get_profile(token: &str) -> Result<User, ApiError> {
    get_authed(&get_profile_endpoint(), token).await
}

/// Update the editable profile fields; returns the stored profile.
pub async fn set_profile(token: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
    let response = Request::put(&set_profile_endpoint())
        .header("Authorization", &bearer(token))
        .json(update)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_data(require_ok(response).await?).await
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

pub async fn get_incidents(token: &str) -> Result<Vec<Incident>, ApiError> {
    let incidents: Vec<Incident> = get_authed(&incidents_endpoint(), token).await?;
    log::debug!("fetched {} incidents", incidents.len());
    Ok(incidents)
}

pub async fn create_incident(token: &str, draft: &IncidentDraft) -> Result<(), ApiError> {
    request_ack(Request::post(&incident_create_endpoint()), token, draft).await
}

pub async fn update_incident(
    token: &str,
    id: &str,
    update: &IncidentUpdate,
) -> Result<(), ApiError> {
    request_ack(Request::patch(&incident_update_endpoint(id)), token, update).await
}

/// Soft-delete; the service models this as a PATCH with an empty body.
pub async fn delete_incident(token: &str, id: &str) -> Result<(), ApiError> {
    request_ack(Request::patch(&incident_delete_endpoint(id)), token, &serde_json::json!({})).await
}

// ---------------------------------------------------------------------------
// Evidence
// ---------------------------------------------------------------------------

pub async fn get_evidence(token: &str) -> Result<Vec<Evidence>, ApiError> {
    let evidence: Vec<Evidence> = get_authed(&evidence_endpoint(), token).await?;
    log::debug!("fetched {} evidence items", evidence.len());
    Ok(evidence)
}

pub async fn create_evidence(token: &str, draft: &EvidenceDraft) -> Result<(), ApiError> {
    request_ack(Request::post(&evidence_create_endpoint()), token, draft).await
}

pub async fn update_evidence(
    token: &str,
    id: &str,
    update: &EvidenceUpdate,
) -> Result<(), ApiError> {
    request_ack(Request::patch(&evidence_update_endpoint(id)), token, update).await
}

pub async fn delete_evidence(token: &str, id: &str) -> Result<(), ApiError> {
    request_ack(Request::patch(&evidence_delete_endpoint(id)), token, &serde_json::json!({})).await
}

// ---------------------------------------------------------------------------
// Audits
// ---------------------------------------------------------------------------

pub async fn get_audits(token: &str) -> Result<Vec<Audit>, ApiError> {
    let audits: Vec<Audit> = get_authed(&audits_endpoint(), token).await?;
    log::debug!("fetched {} audits", audits.len());
    Ok(audits)
}

pub async fn create_audit(token: &str, draft: &AuditDraft) -> Result<(), ApiError> {
    request_ack(Request::post(&audit_create_endpoint()), token, draft).await
}

pub async fn update_audit(token: &str, id: &str, update: &AuditUpdate) -> Result<(), ApiError> {
    request_ack(Request::patch(&audit_update_endpoint(id)), token, update).await
}

pub async fn delete_audit(token: &str, id: &str) -> Result<(), ApiError> {
    request_ack(Request::patch(&audit_delete_endpoint(id)), token, &serde_json::json!({})).await
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

pub async fn get_reports(token: &str) -> Result<Vec<Report>, ApiError> {
    let reports: Vec<Report> = get_authed(&reports_endpoint(), token).await?;
    log::debug!("fetched {} reports", reports.len());
    Ok(reports)
}

pub async fn create_report(token: &str, draft: &ReportDraft) -> Result<(), ApiError> {
    request_ack(Request::post(&report_create_endpoint()), token, draft).await
}

pub async fn update_report(token: &str, id: &str, update: &ReportUpdate) -> Result<(), ApiError> {
    request_ack(Request::patch(&report_update_endpoint(id)), token, update).await
}

pub async fn delete_report(token: &str, id: &str) -> Result<(), ApiError> {
    request_ack(Request::patch(&report_delete_endpoint(id)), token, &serde_json::json!({})).await
}
