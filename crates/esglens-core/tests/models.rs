use esglens_core::filter::{Filterable, RecordFilter};
use esglens_core::models::emission::EmissionRecord;
use esglens_core::models::employment::EmploymentRecord;
use esglens_core::models::news::{NewsItem, Page};
use esglens_core::models::verification::VerificationStatus;

#[test]
fn emission_numeric_fields_coerce_to_zero() {
    let json = r#"{
        "id": 1,
        "organizationName": "테스트 기업 A",
        "year": 2024,
        "scope1": null,
        "scope2": "not a number",
        "totalEmissions": "1200.5"
    }"#;

    let record: EmissionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.scope1, 0.0);
    assert_eq!(record.scope2, 0.0);
    assert_eq!(record.scope3, 0.0); // missing entirely
    assert_eq!(record.total_emissions, 1200.5); // numeric string
}

#[test]
fn employment_counts_coerce_and_truncate() {
    let json = r#"{
        "id": 7,
        "organizationName": "삼성전자",
        "year": 2023,
        "totalEmployees": "52000",
        "femaleEmployees": 13000.9,
        "maleEmployees": null,
        "turnoverRate": "8.4"
    }"#;

    let record: EmploymentRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.total_employees, 52_000);
    assert_eq!(record.female_employees, 13_000);
    assert_eq!(record.male_employees, 0);
    assert_eq!(record.new_hires, 0);
    assert_eq!(record.turnover_rate, 8.4);
}

#[test]
fn only_the_verified_label_counts_as_verified() {
    assert!(VerificationStatus::from(VerificationStatus::VERIFIED).is_verified());
    assert!(!VerificationStatus::from(VerificationStatus::IN_REVIEW).is_verified());
    assert!(!VerificationStatus::from(VerificationStatus::AUTO_COLLECTED).is_verified());
    assert!(!VerificationStatus::from("완료").is_verified());
    assert!(!VerificationStatus::default().is_verified());
}

#[test]
fn org_label_resolution_order() {
    let json = r#"{
        "id": 1,
        "year": 2024,
        "organization": { "id": 3, "name": "중첩 이름" },
        "organizationName": "평면 이름"
    }"#;
    let nested: EmissionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(nested.org_label(), "중첩 이름");
    assert_eq!(nested.org_id(), Some(3));

    let json = r#"{ "id": 2, "year": 2024, "organizationName": "평면 이름" }"#;
    let flat: EmissionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(flat.org_label(), "평면 이름");

    let json = r#"{ "id": 3, "year": 2024, "organizationId": 9 }"#;
    let id_only: EmissionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(id_only.org_label(), "#9");

    let json = r#"{ "id": 4, "year": 2024 }"#;
    let bare: EmissionRecord = serde_json::from_str(json).unwrap();
    assert_eq!(bare.org_label(), "-");
}

struct Row {
    year: i16,
    org: Option<u64>,
}

impl Filterable for Row {
    fn year(&self) -> i16 {
        self.year
    }

    fn organization_id(&self) -> Option<u64> {
        self.org
    }
}

#[test]
fn filter_matches_org_and_year_range() {
    let filter = RecordFilter::years(2022, 2024).with_organization(1);

    assert!(filter.matches(&Row { year: 2023, org: Some(1) }));
    assert!(!filter.matches(&Row { year: 2021, org: Some(1) }));
    assert!(!filter.matches(&Row { year: 2025, org: Some(1) }));
    assert!(!filter.matches(&Row { year: 2023, org: Some(2) }));
    // An org-scoped filter excludes records that carry no org id.
    assert!(!filter.matches(&Row { year: 2023, org: None }));
}

#[test]
fn default_filter_matches_everything() {
    let filter = RecordFilter::default();
    assert!(filter.matches(&Row { year: 1999, org: None }));
    assert!(filter.matches(&Row { year: 2050, org: Some(42) }));
}

#[test]
fn filter_apply_preserves_order() {
    let rows = vec![
        Row { year: 2024, org: None },
        Row { year: 2020, org: None },
        Row { year: 2022, org: None },
    ];
    let kept = RecordFilter::years(2021, 2024).apply(rows);
    let years: Vec<i16> = kept.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2024, 2022]);
}

#[test]
fn news_page_deserializes_spring_shape() {
    let json = r#"{
        "content": [{
            "id": 1,
            "organizationName": "테스트 기업 A",
            "title": "기부 소식",
            "url": "https://news.example.com/1",
            "publishedDate": "2024-06-01",
            "category": "기부"
        }],
        "totalPages": 3,
        "totalElements": 25
    }"#;

    let page: Page<NewsItem> = serde_json::from_str(json).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_elements, 25);
    assert_eq!(page.content[0].description, ""); // defaulted
}
