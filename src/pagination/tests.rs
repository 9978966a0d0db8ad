//! Tests for pagination module

use super::*;
use crate::urls::QueryUrl;
use test_case::test_case;

fn paginate(url: &str, per_page: u64) -> (Pagination, bool) {
    let mut pagination = Pagination::new();
    let known = pagination.set("page", per_page, Some(url)).unwrap();
    (pagination, known)
}

// ============================================================================
// Inactive State Tests
// ============================================================================

#[test]
fn test_inactive_defaults() {
    let pagination = Pagination::new();
    assert!(!pagination.is_active());
    assert_eq!(pagination.query_key(), None);
    assert_eq!(pagination.offset(), 0);
    assert_eq!(pagination.length(), None);
    assert_eq!(pagination.limit(), "");
    assert!(!pagination.is_last_page());
    assert_eq!(pagination.current_page(), 1);
    assert_eq!(pagination.total_pages(), 1);
    assert_eq!(pagination.previous_url(), None);
    assert_eq!(pagination.next_url(), None);
}

#[test]
fn test_set_total_before_set_is_noop() {
    let mut pagination = Pagination::new();
    pagination.set_total(500);
    assert_eq!(pagination.total_pages(), 1);
    assert!(!pagination.is_active());
}

#[test]
fn test_inactive_slice_returns_everything() {
    let records: Vec<u32> = (1..=25).collect();
    assert_eq!(Pagination::new().slice(&records).len(), 25);
}

// ============================================================================
// set() Tests
// ============================================================================

#[test]
fn test_set_without_param() {
    let (pagination, known) = paginate("/posts?sort=new", 10);
    assert!(!known);
    assert!(pagination.is_active());
    assert_eq!(pagination.current_page(), 1);
    assert_eq!(pagination.total_pages(), 1);
    assert_eq!(pagination.offset(), 0);
    assert_eq!(pagination.length(), Some(10));
    assert_eq!(pagination.limit(), " LIMIT 0, 10");
    assert!(pagination.is_last_page());
}

#[test]
fn test_set_round_trip_with_total() {
    let (pagination, known) = paginate("/posts?page=5of12", 10);
    assert!(known);
    assert_eq!(pagination.current_page(), 5);
    assert_eq!(pagination.total_pages(), 12);
    assert_eq!(pagination.offset(), 40);
    assert!(!pagination.is_last_page());
}

#[test_case("/posts?page=1" ; "plain first page")]
#[test_case("/posts?page=1of99" ; "first page with total")]
#[test_case("/posts?page=0" ; "zero")]
#[test_case("/posts?page=0of5" ; "zero with total")]
fn test_set_first_page_needs_total(url: &str) {
    let (pagination, known) = paginate(url, 10);
    assert!(!known);
    assert_eq!(pagination.current_page(), 1);
    assert_eq!(pagination.total_pages(), 1);
    assert_eq!(pagination.offset(), 0);
}

#[test_case("/posts?page=abc" ; "letters")]
#[test_case("/posts?page=-3" ; "negative")]
#[test_case("/posts?page=3of" ; "dangling of")]
#[test_case("/posts?page=" ; "empty")]
#[test_case("/posts?page=3.5" ; "fraction")]
fn test_set_malformed_value_falls_back_to_first_page(url: &str) {
    let (pagination, known) = paginate(url, 10);
    assert!(!known);
    assert!(pagination.is_active());
    assert_eq!(pagination.current_page(), 1);
    assert_eq!(pagination.offset(), 0);
}

#[test]
fn test_set_without_total_keeps_parsed_page() {
    let (pagination, known) = paginate("/posts?page=4", 10);
    assert!(!known);
    assert_eq!(pagination.current_page(), 4);
    assert_eq!(pagination.offset(), 30);
    // Provisional total until set_total is called
    assert_eq!(pagination.total_pages(), 1);
}

#[test_case("/posts?page=12of12" ; "last page")]
#[test_case("/posts?page=15of12" ; "beyond last page")]
fn test_set_last_page_needs_total(url: &str) {
    let (pagination, known) = paginate(url, 10);
    assert!(!known);
    assert_eq!(pagination.total_pages(), 1);
    assert!(pagination.current_page() >= 12);
}

#[test]
fn test_set_is_not_cumulative() {
    let mut pagination = Pagination::new();
    assert!(pagination.set("page", 10, Some("/a?page=5of12")).unwrap());
    assert!(!pagination.set("page", 10, Some("/a")).unwrap());
    assert_eq!(pagination.current_page(), 1);
    assert_eq!(pagination.total_pages(), 1);
    assert_eq!(pagination.offset(), 0);
}

#[test]
fn test_set_custom_key() {
    let mut pagination = Pagination::new();
    let known = pagination
        .set("comments", 25, Some("/post/7?page=9&comments=3of4"))
        .unwrap();
    assert!(known);
    assert_eq!(pagination.query_key(), Some("comments"));
    assert_eq!(pagination.current_page(), 3);
    assert_eq!(pagination.offset(), 50);
}

#[test]
fn test_set_uses_current_url() {
    let mut pagination = Pagination::with_editor(QueryUrl::new("/feed?page=2of3"));
    assert!(pagination.set_default().unwrap());
    assert_eq!(pagination.url(), "/feed?page=2of3");
    assert_eq!(pagination.current_page(), 2);
    assert_eq!(pagination.length(), Some(10));
}

#[test]
fn test_set_rejects_bad_arguments_without_touching_state() {
    let (mut pagination, _) = paginate("/posts?page=5of12", 10);

    let err = pagination.set("page", 0, Some("/other")).unwrap_err();
    assert!(err.is_caller_error());
    let err = pagination.set("", 10, Some("/other")).unwrap_err();
    assert!(err.to_string().contains("query_key"));

    assert_eq!(pagination.url(), "/posts?page=5of12");
    assert_eq!(pagination.current_page(), 5);
    assert_eq!(pagination.total_pages(), 12);
}

#[test]
fn test_set_offset_overflow_is_malformed() {
    let (pagination, known) = paginate("/posts?page=18446744073709551615", 10);
    assert!(!known);
    assert_eq!(pagination.current_page(), 1);
    assert_eq!(pagination.offset(), 0);
}

// ============================================================================
// set_total() Tests
// ============================================================================

#[test_case(0, 10, 1)]
#[test_case(1, 10, 1)]
#[test_case(10, 10, 1)]
#[test_case(11, 10, 2)]
#[test_case(100, 10, 10)]
#[test_case(101, 10, 11)]
#[test_case(7, 1, 7)]
fn test_set_total(count: u64, per_page: u64, expected: u64) {
    let (mut pagination, _) = paginate("/posts", per_page);
    pagination.set_total(count);
    assert_eq!(pagination.total_pages(), expected);
}

#[test]
fn test_set_total_matches_formula() {
    for per_page in 1..=12u64 {
        for count in 0..=150u64 {
            let (mut pagination, _) = paginate("/posts", per_page);
            pagination.set_total(count);
            let expected = if count <= per_page {
                1
            } else {
                count.div_ceil(per_page)
            };
            assert_eq!(pagination.total_pages(), expected, "{count}/{per_page}");
            assert!(pagination.total_pages() >= 1);
        }
    }
}

#[test]
fn test_set_total_overwrites_url_total() {
    let (mut pagination, known) = paginate("/posts?page=4of10", 10);
    assert!(known);
    pagination.set_total(1000);
    assert_eq!(pagination.total_pages(), 100);
}

#[test]
fn test_current_page_beyond_total_is_not_clamped() {
    let (mut pagination, _) = paginate("/posts?page=9", 10);
    pagination.set_total(30);
    assert_eq!(pagination.total_pages(), 3);
    assert_eq!(pagination.current_page(), 9);
    assert!(!pagination.is_last_page());
    assert_eq!(pagination.next_url(), None);
    assert_eq!(pagination.previous_url(), Some("/posts?page=8of3".to_string()));
}

#[test]
fn test_page_four_of_ten() {
    let (mut pagination, known) = paginate("/posts?page=4of10", 10);
    assert!(known);
    pagination.set_total(100);
    assert_eq!(pagination.total_pages(), 10);
    assert_eq!(pagination.current_page(), 4);
    assert_eq!(pagination.offset(), 30);
    assert_eq!(pagination.limit(), " LIMIT 30, 10");
    assert!(!pagination.is_last_page());
}

// ============================================================================
// URL Tests
// ============================================================================

#[test]
fn test_page_urls() {
    let (mut pagination, _) = paginate("https://example.com/posts?page=2&sort=new", 10);
    pagination.set_total(45);

    assert_eq!(
        pagination.page_url(1),
        "https://example.com/posts?sort=new"
    );
    assert_eq!(
        pagination.page_url(3),
        "https://example.com/posts?page=3of5&sort=new"
    );
    assert_eq!(
        pagination.previous_url(),
        Some("https://example.com/posts?sort=new".to_string())
    );
    assert_eq!(
        pagination.next_url(),
        Some("https://example.com/posts?page=3of5&sort=new".to_string())
    );
}

#[test]
fn test_first_and_last_page_urls() {
    let (mut pagination, _) = paginate("/posts", 10);
    pagination.set_total(30);
    assert_eq!(pagination.previous_url(), None);
    assert_eq!(pagination.next_url(), Some("/posts?page=2of3".to_string()));

    let (mut pagination, _) = paginate("/posts?page=3", 10);
    pagination.set_total(30);
    assert!(pagination.is_last_page());
    assert_eq!(pagination.next_url(), None);
    assert_eq!(pagination.previous_url(), Some("/posts?page=2of3".to_string()));
}

#[test]
fn test_scheme_relative_urls_keep_host() {
    let (pagination, known) = paginate("//example.com/posts?page=2of5", 10);
    assert!(known);
    assert_eq!(
        pagination.previous_url().as_deref(),
        Some("//example.com/posts")
    );
    assert_eq!(
        pagination.next_url().as_deref(),
        Some("//example.com/posts?page=3of5")
    );
}

#[test]
fn test_page_urls_keep_value_less_params() {
    let (mut pagination, _) = paginate("/posts?flag&page=2", 10);
    pagination.set_total(50);
    assert_eq!(
        pagination.next_url().as_deref(),
        Some("/posts?flag&page=3of5")
    );
    assert_eq!(pagination.previous_url().as_deref(), Some("/posts?flag"));
}

#[test]
fn test_page_value() {
    assert_eq!(Pagination::new().page_value(), None);

    let (pagination, _) = paginate("/posts?page=4of9", 10);
    assert_eq!(pagination.page_value().as_deref(), Some("4of9"));

    let (pagination, _) = paginate("/posts?page=junk", 10);
    assert_eq!(pagination.page_value().as_deref(), Some("junk"));

    let (pagination, _) = paginate("/posts", 10);
    assert_eq!(pagination.page_value(), None);
}

#[test]
fn test_page_url_inactive_returns_base() {
    let pagination = Pagination::new();
    assert_eq!(pagination.page_url(4), "");
}

// ============================================================================
// info() and slice() Tests
// ============================================================================

#[test]
fn test_info_snapshot() {
    let (pagination, _) = paginate("/posts?page=2of3", 5);
    let info = pagination.info();
    assert_eq!(
        info,
        PageInfo {
            offset: 5,
            length: Some(5),
            limit: " LIMIT 5, 5".to_string(),
            last_page: false,
            current_page: 2,
            number_pages: 3,
            previous_url: Some("/posts".to_string()),
            next_url: Some("/posts?page=3of3".to_string()),
        }
    );

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["number_pages"], 3);
    assert_eq!(json["previous_url"], "/posts");
}

#[test]
fn test_slice_pages() {
    let records: Vec<u32> = (1..=100).collect();

    let (mut pagination, _) = paginate("/posts", 10);
    pagination.set_total(records.len() as u64);
    assert_eq!(pagination.slice(&records), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    let (pagination, _) = paginate("/posts?page=10of10", 10);
    assert_eq!(pagination.slice(&records), &records[90..]);

    let (pagination, _) = paginate("/posts?page=3", 40);
    assert_eq!(pagination.slice(&records), &records[80..]);
}

#[test]
fn test_slice_past_the_end_is_empty() {
    let records = [1, 2, 3];
    let (pagination, _) = paginate("/posts?page=5", 10);
    assert!(pagination.slice(&records).is_empty());
}
