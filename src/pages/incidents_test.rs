use super::*;

fn sample_incident() -> Incident {
    Incident {
        id: "inc-1".to_owned(),
        title: "Warehouse fire".to_owned(),
        description: "Fire broke out in the loading bay".to_owned(),
        location: Some(GeoPoint { latitude: 6.5244, longitude: 3.3792 }),
        tags: vec!["fire".to_owned(), "night-shift".to_owned()],
        status: "open".to_owned(),
        created_at: "2025-05-03T10:15:00.000Z".to_owned(),
        target_model: None,
        target_id: None,
    }
}

#[test]
fn search_covers_title_description_status_and_tags() {
    let fields = search_fields(&sample_incident());
    assert!(fields.contains(&"Warehouse fire".to_owned()));
    assert!(fields.contains(&"Fire broke out in the loading bay".to_owned()));
    assert!(fields.contains(&"open".to_owned()));
    assert!(fields.contains(&"night-shift".to_owned()));
}

#[test]
fn location_label_formats_coordinates() {
    let point = GeoPoint { latitude: 6.5244, longitude: 3.3792 };
    assert_eq!(location_label(Some(&point)), "6.5244, 3.3792");
    assert_eq!(location_label(None), "—");
}

#[test]
fn coordinates_parse_with_zero_fallback() {
    assert_eq!(parse_coordinate(" 6.5244 "), 6.5244);
    assert_eq!(parse_coordinate("-3.2"), -3.2);
    assert_eq!(parse_coordinate(""), 0.0);
    assert_eq!(parse_coordinate("north"), 0.0);
}

#[test]
fn csv_rows_mirror_the_table_columns() {
    let rows = csv_rows(&[sample_incident()]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), CSV_HEADER.len());
    assert_eq!(rows[0][0], "Warehouse fire");
    assert_eq!(rows[0][3], "fire; night-shift");
    assert_eq!(rows[0][5], "May 3, 2025");
}
