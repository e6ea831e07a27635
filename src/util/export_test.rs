use super::*;

#[test]
fn csv_escape_leaves_plain_fields_alone() {
    assert_eq!(csv_escape("open"), "open");
    assert_eq!(csv_escape(""), "");
    assert_eq!(csv_escape("₦9,500.00"), "\"₦9,500.00\"");
}

#[test]
fn csv_escape_quotes_delimiters_and_doubles_quotes() {
    assert_eq!(csv_escape("a,b"), "\"a,b\"");
    assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
}

#[test]
fn csv_line_joins_escaped_fields() {
    let fields = vec!["a".to_owned(), "b,c".to_owned(), "d".to_owned()];
    assert_eq!(csv_line(&fields), "a,\"b,c\",d");
}

#[test]
fn csv_document_emits_header_then_rows_crlf() {
    let rows = vec![
        vec!["Breach".to_owned(), "open".to_owned()],
        vec!["Leak, minor".to_owned(), "closed".to_owned()],
    ];
    let doc = csv_document(&["Title", "Status"], &rows);
    assert_eq!(doc, "Title,Status\r\nBreach,open\r\n\"Leak, minor\",closed\r\n");
}

#[test]
fn csv_document_with_no_rows_is_just_the_header() {
    assert_eq!(csv_document(&["A", "B"], &[]), "A,B\r\n");
}
