use super::*;

#[test]
fn session_round_trips_with_flat_user_fields() {
    let json = r#"{
        "token": "jwt-abc",
        "_id": "u1",
        "firstname": "Ada",
        "lastname": "Obi",
        "email": "ada@example.com",
        "userType": "investigator",
        "developerStack": ["rust", "sql"]
    }"#;
    let session: Session = serde_json::from_str(json).unwrap();
    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.id, "u1");
    assert_eq!(session.user.user_type.as_deref(), Some("investigator"));
    assert_eq!(session.user.developer_stack, vec!["rust", "sql"]);

    let encoded = serde_json::to_value(&session).unwrap();
    assert_eq!(encoded["token"], "jwt-abc");
    assert_eq!(encoded["_id"], "u1");
    assert_eq!(encoded["userType"], "investigator");
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let user: User = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
    assert_eq!(user.email, "x@y.z");
    assert_eq!(user.firstname, "");
    assert_eq!(user.gender, None);
    assert!(user.certifications.is_empty());
}

#[test]
fn incident_maps_tag_field_to_tags() {
    let json = r#"{
        "_id": "i1",
        "title": "Server room breach",
        "description": "Door forced open",
        "location": { "latitude": 6.5, "longitude": 3.4 },
        "tag": ["physical", "urgent"],
        "status": "open",
        "createdAt": "2025-05-03T10:00:00.000Z"
    }"#;
    let incident: Incident = serde_json::from_str(json).unwrap();
    assert_eq!(incident.tags, vec!["physical", "urgent"]);
    assert_eq!(incident.location.unwrap().latitude, 6.5);
    assert_eq!(incident.status, "open");
}

#[test]
fn evidence_accepts_null_searchable_fields() {
    let json = r#"{
        "_id": "e1",
        "fileUrl": null,
        "fileType": "image",
        "description": null,
        "hash": null,
        "status": "pending",
        "createdAt": "2025-05-03T10:00:00.000Z"
    }"#;
    let evidence: Evidence = serde_json::from_str(json).unwrap();
    assert_eq!(evidence.file_url, None);
    assert_eq!(evidence.file_type.as_deref(), Some("image"));
    assert_eq!(evidence.hash, None);
}

#[test]
fn audit_quantity_accepts_string_or_number() {
    let as_string: Audit =
        serde_json::from_str(r#"{"_id":"a1","quantity":"12"}"#).unwrap();
    assert_eq!(as_string.quantity, "12");

    let as_number: Audit =
        serde_json::from_str(r#"{"_id":"a2","quantity":12}"#).unwrap();
    assert_eq!(as_number.quantity, "12");

    let as_null: Audit = serde_json::from_str(r#"{"_id":"a3","quantity":null}"#).unwrap();
    assert_eq!(as_null.quantity, "");
}

#[test]
fn audit_embeds_user_and_product() {
    let json = r#"{
        "_id": "a1",
        "_user": { "firstname": "Ada", "lastname": "Obi", "email": "a@b.c", "userType": "admin" },
        "_product": { "name": "Cement", "description": "50kg bag", "category": "material", "price": 9500, "unit": "bag" },
        "quantity": "4",
        "location": "Lagos depot"
    }"#;
    let audit: Audit = serde_json::from_str(json).unwrap();
    assert_eq!(audit.product.as_ref().unwrap().name, "Cement");
    assert_eq!(audit.product.as_ref().unwrap().price, 9500.0);
    assert_eq!(audit.user.as_ref().unwrap().user_type, "admin");
}

#[test]
fn report_incident_ref_handles_embedded_and_bare_id() {
    let embedded: Report = serde_json::from_str(
        r#"{"_id":"r1","_incident":{"_id":"i1","title":"Breach"},"status":"pending"}"#,
    )
    .unwrap();
    assert_eq!(embedded.incident.as_ref().unwrap().title(), Some("Breach"));

    let bare: Report =
        serde_json::from_str(r#"{"_id":"r2","_incident":"i9","status":"completed"}"#).unwrap();
    assert_eq!(bare.incident.as_ref().unwrap().title(), None);

    let missing: Report = serde_json::from_str(r#"{"_id":"r3"}"#).unwrap();
    assert!(missing.incident.is_none());
}

#[test]
fn envelope_unwraps_nested_data() {
    let json = r#"{"success":true,"data":[{"_id":"i1"}]}"#;
    let envelope: Envelope<Vec<Incident>> = serde_json::from_str(json).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].id, "i1");
}

#[test]
fn drafts_serialize_with_wire_field_names() {
    let evidence = EvidenceDraft {
        incident_id: "i1".to_owned(),
        file_url: "https://files/x.png".to_owned(),
        file_type: "image".to_owned(),
        description: "door cam".to_owned(),
        hash: "abc123".to_owned(),
    };
    let value = serde_json::to_value(&evidence).unwrap();
    assert_eq!(value["_incident"], "i1");
    assert_eq!(value["fileUrl"], "https://files/x.png");
    assert_eq!(value["fileType"], "image");

    let incident = IncidentDraft {
        title: "t".to_owned(),
        description: "d".to_owned(),
        location: GeoPoint { latitude: 1.0, longitude: 2.0 },
        tags: vec!["a".to_owned()],
    };
    let value = serde_json::to_value(&incident).unwrap();
    assert_eq!(value["tag"][0], "a");
    assert_eq!(value["location"]["latitude"], 1.0);

    let audit = AuditDraft {
        product_id: "p1".to_owned(),
        quantity: "3".to_owned(),
        location: "Lagos".to_owned(),
    };
    assert_eq!(serde_json::to_value(&audit).unwrap()["_product"], "p1");

    let signup = SignupRequest {
        firstname: "Ada".to_owned(),
        lastname: "Obi".to_owned(),
        email: "ada@example.com".to_owned(),
        gender: "Female".to_owned(),
        user_type: "investigator".to_owned(),
        password: "secret1".to_owned(),
        password_confirm: "secret1".to_owned(),
    };
    let value = serde_json::to_value(&signup).unwrap();
    assert_eq!(value["passwordConfirm"], "secret1");
    assert_eq!(value["userType"], "investigator");
}
