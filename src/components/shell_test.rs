use super::*;

#[test]
fn initials_take_one_letter_from_each_name() {
    assert_eq!(initials("Ada", "Lovelace"), "AL");
}

#[test]
fn initials_uppercase_and_trim() {
    assert_eq!(initials("  ada ", "lovelace"), "AL");
    assert_eq!(initials("ada", ""), "A");
}

#[test]
fn missing_names_fall_back_to_a_question_mark() {
    assert_eq!(initials("", ""), "?");
    assert_eq!(initials("   ", "   "), "?");
}

#[test]
fn every_nav_item_has_a_distinct_path() {
    for (i, (_, path, _)) in NAV_ITEMS.iter().enumerate() {
        assert!(path.starts_with('/'));
        for (_, other, _) in &NAV_ITEMS[i + 1..] {
            assert_ne!(path, other);
        }
    }
}
