use esglens_client::NewsQuery;
use esglens_client::client::{filter_query, news_query};
use esglens_client::config::normalize_base;
use esglens_core::filter::RecordFilter;

#[test]
fn absent_filter_fields_are_omitted() {
    assert!(filter_query(&RecordFilter::default()).is_empty());

    let pairs = filter_query(&RecordFilter::years(2022, 2024));
    assert_eq!(
        pairs,
        vec![
            ("fromYear".to_string(), "2022".to_string()),
            ("toYear".to_string(), "2024".to_string()),
        ]
    );
}

#[test]
fn full_filter_produces_all_three_pairs() {
    let pairs = filter_query(&RecordFilter::years(2020, 2024).with_organization(7));
    assert_eq!(
        pairs,
        vec![
            ("orgId".to_string(), "7".to_string()),
            ("fromYear".to_string(), "2020".to_string()),
            ("toYear".to_string(), "2024".to_string()),
        ]
    );
}

#[test]
fn news_query_always_paginates() {
    let pairs = news_query(&NewsQuery::page(0, 10));
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "0".to_string()),
            ("size".to_string(), "10".to_string()),
        ]
    );
}

#[test]
fn news_query_includes_optional_filters() {
    let query = NewsQuery {
        page: 2,
        size: 10,
        year: Some(2024),
        category: Some("기부".to_string()),
    };
    let pairs = news_query(&query);
    assert!(pairs.contains(&("year".to_string(), "2024".to_string())));
    assert!(pairs.contains(&("category".to_string(), "기부".to_string())));
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    assert_eq!(normalize_base("http://localhost:8080/"), "http://localhost:8080");
    assert_eq!(normalize_base("  http://api.example.com  "), "http://api.example.com");
    assert_eq!(normalize_base("http://localhost:8080"), "http://localhost:8080");
}
