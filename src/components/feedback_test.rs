use super::*;

#[test]
fn good_statuses_map_to_good_tone() {
    for status in ["completed", "Resolved", "CLOSED", "verified", "active"] {
        assert_eq!(status_tone(status), "good", "status: {status}");
    }
}

#[test]
fn pending_statuses_map_to_warn_tone() {
    for status in ["pending", "Open", "in-progress", "Investigating"] {
        assert_eq!(status_tone(status), "warn", "status: {status}");
    }
}

#[test]
fn unknown_statuses_fall_back_to_muted() {
    assert_eq!(status_tone("archived"), "muted");
    assert_eq!(status_tone(""), "muted");
    assert_eq!(status_tone("  "), "muted");
}

#[test]
fn tone_ignores_surrounding_whitespace() {
    assert_eq!(status_tone("  pending  "), "warn");
}
