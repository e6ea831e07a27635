use super::*;
use crate::net::types::{IncidentSummary, OrderedBy, ReportProduct};

fn sample_report() -> Report {
    Report {
        id: "rep-1".to_owned(),
        ordered_by: Some(OrderedBy {
            firstname: "Adaeze".to_owned(),
            lastname: "Obi".to_owned(),
            email: "adaeze@example.com".to_owned(),
            user_type: "admin".to_owned(),
        }),
        products: vec![ReportProduct {
            product_id: "prod-9".to_owned(),
            quantity: 2.0,
            unit_price: 1500.0,
            id: None,
        }],
        status: "pending".to_owned(),
        note: "awaiting sign-off".to_owned(),
        created_at: "2025-05-03T10:15:00.000Z".to_owned(),
        incident: Some(IncidentRef::Embedded(IncidentSummary {
            id: "inc-4".to_owned(),
            title: "Warehouse breach".to_owned(),
        })),
        content: Some("Initial findings attached".to_owned()),
        signed: Some("A. Obi".to_owned()),
        signature: Some("SHA256".to_owned()),
    }
}

fn bare_report() -> Report {
    Report {
        id: "rep-2".to_owned(),
        ordered_by: None,
        products: Vec::new(),
        status: String::new(),
        note: String::new(),
        created_at: String::new(),
        incident: None,
        content: None,
        signed: None,
        signature: None,
    }
}

#[test]
fn search_covers_content_incident_and_orderer() {
    let fields = search_fields(&sample_report());
    assert!(fields.contains(&"Initial findings attached".to_owned()));
    assert!(fields.contains(&"Warehouse breach".to_owned()));
    assert!(fields.contains(&"SHA256".to_owned()));
    assert!(fields.contains(&"Adaeze Obi".to_owned()));
}

#[test]
fn incident_label_handles_both_reference_shapes() {
    assert_eq!(incident_label(&sample_report()), "Warehouse breach");

    let mut by_id = bare_report();
    by_id.incident = Some(IncidentRef::Id("inc-77".to_owned()));
    assert_eq!(incident_label(&by_id), "inc-77");

    assert_eq!(incident_label(&bare_report()), "—");
}

#[test]
fn orderer_name_falls_back_to_dash() {
    assert_eq!(orderer_name(&sample_report()), "Adaeze Obi");
    assert_eq!(orderer_name(&bare_report()), "—");
}

#[test]
fn display_title_prefers_incident_then_content_then_id() {
    assert_eq!(display_title(&sample_report()), "Warehouse breach");

    let mut no_incident = sample_report();
    no_incident.incident = None;
    assert_eq!(display_title(&no_incident), "Initial findings attached");

    assert_eq!(display_title(&bare_report()), "rep-2");
}

#[test]
fn csv_rows_mirror_the_table_columns() {
    let rows = csv_rows(&[sample_report()]);
    assert_eq!(rows[0].len(), CSV_HEADER.len());
    assert_eq!(rows[0][0], "Warehouse breach");
    assert_eq!(rows[0][3], "SHA256");
    assert_eq!(rows[0][5], "May 3, 2025");
}
