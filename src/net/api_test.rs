use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("jwt-abc"), "Bearer jwt-abc");
}

#[test]
fn auth_endpoints_point_at_the_hosted_service() {
    assert_eq!(
        signup_endpoint(),
        "https://cloud-incident-reporter.onrender.com/api/v1/auth/signup"
    );
    assert_eq!(
        verify_endpoint(),
        "https://cloud-incident-reporter.onrender.com/api/v1/auth/verify"
    );
    assert_eq!(
        login_endpoint(),
        "https://cloud-incident-reporter.onrender.com/api/v1/auth/login"
    );
    assert_eq!(
        forgot_password_endpoint(),
        "https://cloud-incident-reporter.onrender.com/api/v1/auth/forgotpassword"
    );
    assert_eq!(
        reset_password_endpoint(),
        "https://cloud-incident-reporter.onrender.com/api/v1/auth/resetpassword"
    );
}

#[test]
fn profile_endpoints_use_get_and_set_routes() {
    assert_eq!(get_profile_endpoint(), format!("{BASE_URL}/api/v1/profile/get-profile"));
    assert_eq!(set_profile_endpoint(), format!("{BASE_URL}/api/v1/profile/set-profile"));
}

#[test]
fn incident_endpoints_embed_the_record_id() {
    assert_eq!(incidents_endpoint(), format!("{BASE_URL}/api/v1/incident/get-incidents"));
    assert_eq!(
        incident_update_endpoint("abc123"),
        format!("{BASE_URL}/api/v1/incident/update-incident/abc123")
    );
    assert_eq!(
        incident_delete_endpoint("abc123"),
        format!("{BASE_URL}/api/v1/incident/delete-incident/abc123")
    );
}

#[test]
fn evidence_endpoints_use_plural_list_route() {
    assert_eq!(evidence_endpoint(), format!("{BASE_URL}/api/v1/evidence/get-evidences"));
    assert_eq!(
        evidence_create_endpoint(),
        format!("{BASE_URL}/api/v1/evidence/create-evidence")
    );
    assert_eq!(
        evidence_update_endpoint("e9"),
        format!("{BASE_URL}/api/v1/evidence/update-evidence/e9")
    );
    assert_eq!(
        evidence_delete_endpoint("e9"),
        format!("{BASE_URL}/api/v1/evidence/delete-evidence/e9")
    );
}

#[test]
fn audit_endpoints_cover_crud() {
    assert_eq!(audits_endpoint(), format!("{BASE_URL}/api/v1/audit/all-audits"));
    assert_eq!(audit_create_endpoint(), format!("{BASE_URL}/api/v1/audit/create-audit"));
    assert_eq!(
        audit_update_endpoint("a1"),
        format!("{BASE_URL}/api/v1/audit/update-audit/a1")
    );
    assert_eq!(
        audit_delete_endpoint("a1"),
        format!("{BASE_URL}/api/v1/audit/delete-audit/a1")
    );
}

#[test]
fn report_list_rides_the_legacy_order_route() {
    assert_eq!(reports_endpoint(), format!("{BASE_URL}/api/v1/order/all-orders"));
    assert_eq!(report_create_endpoint(), format!("{BASE_URL}/api/v1/report/create-report"));
    assert_eq!(
        report_update_endpoint("r2"),
        format!("{BASE_URL}/api/v1/report/update-report/r2")
    );
    assert_eq!(
        report_delete_endpoint("r2"),
        format!("{BASE_URL}/api/v1/report/delete-report/r2")
    );
}
