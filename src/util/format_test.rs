use super::*;

#[test]
fn format_date_renders_rfc3339_timestamps() {
    assert_eq!(format_date("2025-05-03T10:00:00.000Z"), "May 3, 2025");
    assert_eq!(format_date("2026-12-25T23:59:59+01:00"), "Dec 25, 2026");
}

#[test]
fn format_date_accepts_bare_dates() {
    assert_eq!(format_date("2025-01-07"), "Jan 7, 2025");
}

#[test]
fn format_date_passes_through_unparseable_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "—");
    assert_eq!(format_date("   "), "—");
}

#[test]
fn format_naira_groups_thousands() {
    assert_eq!(format_naira(0.0), "₦0.00");
    assert_eq!(format_naira(9500.0), "₦9,500.00");
    assert_eq!(format_naira(1_234_567.891), "₦1,234,567.89");
    assert_eq!(format_naira(999.999), "₦1,000.00");
}

#[test]
fn format_naira_keeps_the_sign_in_front() {
    assert_eq!(format_naira(-25.5), "-₦25.50");
}

#[test]
fn truncate_chars_only_shortens_long_values() {
    assert_eq!(truncate_chars("abc", 5), "abc");
    assert_eq!(truncate_chars("abcdef", 6), "abcdef");
    assert_eq!(truncate_chars("abcdefg", 6), "abcdef…");
}

#[test]
fn truncate_chars_respects_character_boundaries() {
    assert_eq!(truncate_chars("héllo wörld", 5), "héllo…");
}

#[test]
fn full_name_joins_and_falls_back() {
    assert_eq!(full_name("Ada", "Obi"), "Ada Obi");
    assert_eq!(full_name("Ada", ""), "Ada");
    assert_eq!(full_name("", " Obi "), "Obi");
    assert_eq!(full_name("", ""), "Unknown");
}
