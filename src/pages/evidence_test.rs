use super::*;

fn sample_evidence() -> Evidence {
    Evidence {
        id: "ev-1".to_owned(),
        title: Some("CCTV still".to_owned()),
        file_url: Some("https://files.example.com/cctv-042.png".to_owned()),
        file_type: Some("image".to_owned()),
        description: Some("Frame from the loading-bay camera".to_owned()),
        hash: Some("9f86d081884c7d659a2feaa0c55ad015".to_owned()),
        status: "pending".to_owned(),
        created_at: "2025-01-07T08:00:00.000Z".to_owned(),
    }
}

#[test]
fn search_covers_all_optional_fields() {
    let fields = search_fields(&sample_evidence());
    assert!(fields.contains(&"CCTV still".to_owned()));
    assert!(fields.contains(&"image".to_owned()));
    assert!(fields.contains(&"https://files.example.com/cctv-042.png".to_owned()));
    assert!(fields.contains(&"9f86d081884c7d659a2feaa0c55ad015".to_owned()));
}

#[test]
fn search_tolerates_missing_fields() {
    let bare = Evidence {
        id: "ev-2".to_owned(),
        title: None,
        file_url: None,
        file_type: None,
        description: None,
        hash: None,
        status: String::new(),
        created_at: String::new(),
    };
    let fields = search_fields(&bare);
    assert_eq!(fields.len(), 5);
    assert!(fields.iter().all(String::is_empty));
}

#[test]
fn display_title_prefers_title_then_url() {
    let mut evidence = sample_evidence();
    assert_eq!(display_title(&evidence), "CCTV still");

    evidence.title = Some("   ".to_owned());
    assert_eq!(display_title(&evidence), "https://files.example.com/cctv-042.png");

    evidence.file_url = None;
    assert_eq!(display_title(&evidence), "Untitled evidence");
}

#[test]
fn csv_rows_are_null_safe() {
    let mut evidence = sample_evidence();
    evidence.hash = None;
    let rows = csv_rows(&[evidence]);
    assert_eq!(rows[0].len(), CSV_HEADER.len());
    assert_eq!(rows[0][3], "");
    assert_eq!(rows[0][5], "Jan 7, 2025");
}
