use super::*;
use leptos::reactive::owner::Owner;

fn rows(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("row-{i}")).collect()
}

// ============================================================
// Search
// ============================================================

#[test]
fn matches_search_is_case_insensitive_substring() {
    let fields = vec!["Server Room Breach".to_owned(), "open".to_owned()];
    assert!(matches_search(&fields, "breach"));
    assert!(matches_search(&fields, "ROOM"));
    assert!(matches_search(&fields, "  open "));
    assert!(!matches_search(&fields, "closed"));
}

#[test]
fn empty_term_matches_everything() {
    assert!(matches_search(&[], ""));
    assert!(matches_search(&["anything".to_owned()], "   "));
}

#[test]
fn filter_rows_uses_the_extracted_fields() {
    let items = vec!["Alpha".to_owned(), "beta".to_owned(), "Gamma".to_owned()];
    let hit = filter_rows(&items, "AL", |s| vec![s.clone()]);
    assert_eq!(hit, vec!["Alpha".to_owned()]);

    // Rows with no usable fields simply never match a non-empty term.
    let none = filter_rows(&items, "x", |_| Vec::new());
    assert!(none.is_empty());
    let all = filter_rows(&items, "", |_| Vec::new());
    assert_eq!(all.len(), 3);
}

// ============================================================
// Pagination
// ============================================================

#[test]
fn total_pages_is_ceiling_division() {
    assert_eq!(total_pages(0, PAGE_SIZE), 0);
    assert_eq!(total_pages(1, PAGE_SIZE), 1);
    assert_eq!(total_pages(3, PAGE_SIZE), 1);
    assert_eq!(total_pages(4, PAGE_SIZE), 2);
    assert_eq!(total_pages(10, PAGE_SIZE), 4);
}

#[test]
fn page_slice_bounds_are_exact_on_every_page() {
    let items = rows(7);
    assert_eq!(page_slice(&items, 1, PAGE_SIZE), rows(7)[0..3].to_vec());
    assert_eq!(page_slice(&items, 2, PAGE_SIZE), rows(7)[3..6].to_vec());
    assert_eq!(page_slice(&items, 3, PAGE_SIZE), rows(7)[6..].to_vec());
}

#[test]
fn page_slice_never_panics_out_of_range() {
    let items = rows(4);
    // Pages past the end fall back to the last page.
    assert_eq!(page_slice(&items, 99, PAGE_SIZE), vec!["row-4".to_owned()]);
    // Page zero is treated as page one.
    assert_eq!(page_slice(&items, 0, PAGE_SIZE), rows(4)[0..3].to_vec());
    // An empty collection yields an empty slice.
    assert!(page_slice(&Vec::<String>::new(), 1, PAGE_SIZE).is_empty());
}

#[test]
fn clamp_page_stays_within_one_and_total() {
    assert_eq!(clamp_page(0, 5), 1);
    assert_eq!(clamp_page(3, 5), 3);
    assert_eq!(clamp_page(9, 5), 5);
    // No pages at all still leaves the cursor on page one.
    assert_eq!(clamp_page(7, 0), 1);
}

// ============================================================
// Signal bundle
// ============================================================

#[test]
fn set_search_resets_to_the_first_page() {
    let owner = Owner::new();
    owner.set();

    let col = Collection::<String>::new();
    col.resolve(Ok(rows(9)));
    col.go_to_page(3, 3);
    assert_eq!(col.page.get_untracked(), 3);

    col.set_search("row".to_owned());
    assert_eq!(col.page.get_untracked(), 1);
    assert_eq!(col.search.get_untracked(), "row");
}

#[test]
fn resolve_clears_loading_and_keeps_stale_rows_on_error() {
    let owner = Owner::new();
    owner.set();

    let col = Collection::<String>::new();
    assert!(col.loading.get_untracked());

    col.resolve(Ok(rows(2)));
    assert!(!col.loading.get_untracked());
    assert_eq!(col.error.get_untracked(), None);

    col.begin_load();
    assert!(col.loading.get_untracked());
    col.resolve(Err("network error: offline".to_owned()));
    assert_eq!(col.error.get_untracked().as_deref(), Some("network error: offline"));
    // A failed refetch does not wipe the previously loaded rows.
    assert_eq!(col.items.get_untracked().len(), 2);
}
