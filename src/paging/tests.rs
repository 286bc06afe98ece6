//! Tests for the pagination module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn tag_fixture(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("tag{i}")).collect()
}

// ============================================================================
// parse_page_size
// ============================================================================

#[test]
fn test_page_size_absent_uses_default() {
    assert_eq!(parse_page_size(None, 100).unwrap(), 100);
    assert_eq!(parse_page_size(None, 5).unwrap(), 5);
}

#[test]
fn test_page_size_explicit() {
    assert_eq!(parse_page_size(Some("7"), 100).unwrap(), 7);
    assert_eq!(parse_page_size(Some("1"), 100).unwrap(), 1);
}

#[test_case("abc")]
#[test_case("0")]
#[test_case("-3")]
#[test_case("5.5")]
#[test_case("")]
fn test_page_size_malformed_is_rejected(raw: &str) {
    let err = parse_page_size(Some(raw), 100).unwrap_err();
    assert!(matches!(err, Error::InvalidPageSize { .. }));
}

// ============================================================================
// plan_page
// ============================================================================

#[test]
fn test_first_page_starts_at_beginning() {
    let set = tag_fixture(12);
    let plan = plan_page(&set, None, 5).unwrap();

    assert_eq!(plan.items, &set[0..5]);
    assert_eq!(plan.next_cursor, Some("tag5"));
}

#[test]
fn test_page_starts_after_cursor() {
    let set = tag_fixture(12);
    let plan = plan_page(&set, Some("tag5"), 5).unwrap();

    assert_eq!(plan.items, &set[5..10]);
    assert_eq!(plan.next_cursor, Some("tag10"));
}

#[test]
fn test_final_page_truncates_and_terminates() {
    let set = tag_fixture(12);
    let plan = plan_page(&set, Some("tag10"), 5).unwrap();

    assert_eq!(plan.items, &set[10..12]);
    assert_eq!(plan.next_cursor, None);
}

#[test]
fn test_exact_fit_final_page_has_no_continuation() {
    let set = tag_fixture(10);
    let plan = plan_page(&set, Some("tag5"), 5).unwrap();

    assert_eq!(plan.items, &set[5..10]);
    assert_eq!(plan.next_cursor, None);
}

#[test]
fn test_cursor_at_last_item_yields_empty_terminal_page() {
    let set = tag_fixture(12);
    let plan = plan_page(&set, Some("tag12"), 5).unwrap();

    assert!(plan.items.is_empty());
    assert_eq!(plan.next_cursor, None);
}

#[test]
fn test_empty_item_set_yields_empty_terminal_page() {
    let set: Vec<String> = vec![];
    let plan = plan_page(&set, None, 5).unwrap();

    assert!(plan.items.is_empty());
    assert_eq!(plan.next_cursor, None);
}

#[test]
fn test_huge_page_size_truncates_to_remaining() {
    let set = tag_fixture(12);
    let size = parse_page_size(Some("18446744073709551615"), 5).unwrap();
    assert_eq!(size, usize::MAX);

    let plan = plan_page(&set, Some("tag1"), size).unwrap();
    assert_eq!(plan.items, &set[1..12]);
    assert_eq!(plan.next_cursor, None);

    let plan = plan_page(&set, None, usize::MAX).unwrap();
    assert_eq!(plan.items, &set[..]);
    assert_eq!(plan.next_cursor, None);
}

#[test]
fn test_unknown_cursor_is_rejected() {
    let set = tag_fixture(12);
    let err = plan_page(&set, Some("tag99"), 5).unwrap_err();

    assert!(matches!(err, Error::InvalidCursor { ref cursor } if cursor == "tag99"));
}

/// Walking page plans by hand must reproduce the item set exactly.
#[test_case(12, 1)]
#[test_case(12, 5)]
#[test_case(12, 12)]
#[test_case(12, 50)]
#[test_case(17, 5)]
#[test_case(1, 5)]
fn test_pages_concatenate_to_full_set(total: usize, size: usize) {
    let set = tag_fixture(total);

    let mut collected: Vec<String> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;
    loop {
        let plan = plan_page(&set, cursor.as_deref(), size).unwrap();
        collected.extend(plan.items.iter().cloned());
        pages += 1;
        match plan.next_cursor {
            Some(next) => cursor = Some(next.to_string()),
            None => break,
        }
    }

    assert_eq!(collected, set);
    assert_eq!(pages, usize::max(1, total.div_ceil(size)));
}

#[test]
fn test_seventeen_items_paged_by_five_is_four_pages() {
    let set = tag_fixture(17);

    let p1 = plan_page(&set, None, 5).unwrap();
    let p2 = plan_page(&set, p1.next_cursor, 5).unwrap();
    let p3 = plan_page(&set, p2.next_cursor, 5).unwrap();
    let p4 = plan_page(&set, p3.next_cursor, 5).unwrap();

    assert_eq!(p1.items.len(), 5);
    assert_eq!(p2.items.len(), 5);
    assert_eq!(p3.items.len(), 5);
    assert_eq!(p4.items.len(), 2);
    assert_eq!(p4.next_cursor, None);
}

// ============================================================================
// Continuation links
// ============================================================================

#[test]
fn test_next_page_url_encodes_size_and_cursor() {
    let url = next_page_url("localhost:9999", "/v2/_catalog", 5, "image5").unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:9999/v2/_catalog?n=5&last=image5"
    );
}

#[test]
fn test_link_header_round_trip() {
    let url = next_page_url("localhost:9999", "/v2/example.com/image/tags/list", 5, "tag5")
        .unwrap();
    let header = format_link_header(&url);

    assert_eq!(
        header,
        "<http://localhost:9999/v2/example.com/image/tags/list?n=5&last=tag5>; \
         title=\"next page\"; rel=\"next\"; type=\"application/json\""
    );

    let parsed = parse_link_header(&header, "next").unwrap();
    assert_eq!(parsed, url.as_str());
}

#[test]
fn test_parse_link_header_picks_target_rel() {
    let header = "<http://host/v2/_catalog?n=5&last=a>; rel=\"next\", \
                  <http://host/v2/_catalog>; rel=\"prev\"";
    assert_eq!(
        parse_link_header(header, "next"),
        Some("http://host/v2/_catalog?n=5&last=a".to_string())
    );
    assert_eq!(
        parse_link_header(header, "prev"),
        Some("http://host/v2/_catalog".to_string())
    );
}

#[test]
fn test_parse_link_header_no_next() {
    assert_eq!(
        parse_link_header("<http://host/v2/_catalog>; rel=\"prev\"", "next"),
        None
    );
    assert_eq!(parse_link_header("", "next"), None);
}

#[test]
fn test_cursor_of_continuation_url() {
    let cursor = cursor_of("http://host/v2/_catalog?n=5&last=image5").unwrap();
    assert_eq!(cursor, Some("image5".to_string()));

    let cursor = cursor_of("http://host/v2/_catalog?n=5").unwrap();
    assert_eq!(cursor, None);
}

#[test]
fn test_cursor_of_rejects_relative_link() {
    let err = cursor_of("/v2/_catalog?n=5&last=image5").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ============================================================================
// Item sets with slash-bearing names (repository paths)
// ============================================================================

#[test]
fn test_cursor_with_repository_path_identifiers() {
    let set = items(&["a/one", "a/two", "b/one", "b/two"]);
    let plan = plan_page(&set, Some("a/two"), 2).unwrap();

    assert_eq!(plan.items, &set[2..4]);
    assert_eq!(plan.next_cursor, None);
}
