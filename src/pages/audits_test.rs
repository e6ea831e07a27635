use super::*;
use crate::net::types::{AuditProduct, AuditUser};

fn sample_audit() -> Audit {
    Audit {
        id: "aud-1".to_owned(),
        user: Some(AuditUser {
            firstname: "Ngozi".to_owned(),
            lastname: "Chukwu".to_owned(),
            email: "ngozi@example.com".to_owned(),
            user_type: "investigator".to_owned(),
        }),
        product: Some(AuditProduct {
            name: "Rice".to_owned(),
            description: "Long grain".to_owned(),
            category: "grain".to_owned(),
            price: 9500.0,
            unit: "kg".to_owned(),
        }),
        quantity: "40".to_owned(),
        location: "Lagos warehouse".to_owned(),
        created_at: "2025-05-03T10:15:00.000Z".to_owned(),
        last_updated: None,
    }
}

fn bare_audit() -> Audit {
    Audit {
        id: "aud-2".to_owned(),
        user: None,
        product: None,
        quantity: String::new(),
        location: String::new(),
        created_at: String::new(),
        last_updated: None,
    }
}

#[test]
fn search_covers_product_location_and_supplier() {
    let fields = search_fields(&sample_audit());
    assert!(fields.contains(&"Rice".to_owned()));
    assert!(fields.contains(&"Long grain".to_owned()));
    assert!(fields.contains(&"Lagos warehouse".to_owned()));
    assert!(fields.contains(&"Ngozi Chukwu".to_owned()));
}

#[test]
fn supplier_name_falls_back_to_dash() {
    assert_eq!(supplier_name(&sample_audit()), "Ngozi Chukwu");
    assert_eq!(supplier_name(&bare_audit()), "—");
}

#[test]
fn quantity_label_appends_the_unit() {
    assert_eq!(quantity_label(&sample_audit()), "40 kg");

    let mut no_unit = sample_audit();
    no_unit.product = None;
    assert_eq!(quantity_label(&no_unit), "40");

    assert_eq!(quantity_label(&bare_audit()), "—");
}

#[test]
fn price_label_formats_naira() {
    assert_eq!(price_label(&sample_audit()), "₦9,500.00");
    assert_eq!(price_label(&bare_audit()), "—");
}

#[test]
fn display_title_prefers_product_then_location_then_id() {
    assert_eq!(display_title(&sample_audit()), "Rice");

    let mut no_product = sample_audit();
    no_product.product = None;
    assert_eq!(display_title(&no_product), "Lagos warehouse");

    assert_eq!(display_title(&bare_audit()), "aud-2");
}

#[test]
fn csv_rows_mirror_the_table_columns() {
    let rows = csv_rows(&[sample_audit()]);
    assert_eq!(rows[0].len(), CSV_HEADER.len());
    assert_eq!(rows[0][0], "Rice");
    assert_eq!(rows[0][2], "40 kg");
    assert_eq!(rows[0][3], "₦9,500.00");
    assert_eq!(rows[0][5], "May 3, 2025");
}
