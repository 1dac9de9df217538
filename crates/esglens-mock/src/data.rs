use esglens_core::filter::RecordFilter;
use esglens_core::models::donation::DonationRecord;
use esglens_core::models::emission::EmissionRecord;
use esglens_core::models::employment::EmploymentRecord;
use esglens_core::models::organization::{OrgRef, Organization};
use esglens_core::models::verification::VerificationStatus;

use crate::current_year;

pub fn organizations() -> Vec<Organization> {
    vec![
        Organization {
            id: 1,
            name: "테스트 기업 A".to_string(),
            org_type: Some("상장사".to_string()),
            created_at: None,
        },
        Organization {
            id: 2,
            name: "테스트 기업 B".to_string(),
            org_type: Some("상장사".to_string()),
            created_at: None,
        },
    ]
}

/// Fixed emission rows: three years for organization 1, the current year
/// for organization 2, filtered by the caller's predicate.
pub fn emissions(filter: &RecordFilter) -> Vec<EmissionRecord> {
    let year = current_year();
    let rows = vec![
        emission_row(1, 1, year - 2, 100.0, 200.0, 700.0, VerificationStatus::VERIFIED),
        emission_row(2, 1, year - 1, 120.0, 210.0, 680.0, VerificationStatus::VERIFIED),
        emission_row(3, 1, year, 90.0, 190.0, 660.0, VerificationStatus::IN_REVIEW),
        emission_row(4, 2, year, 50.0, 80.0, 220.0, VerificationStatus::AUTO_COLLECTED),
    ];
    filter.apply(rows)
}

fn emission_row(
    id: u64,
    org_id: u64,
    year: i16,
    scope1: f64,
    scope2: f64,
    scope3: f64,
    status: &str,
) -> EmissionRecord {
    let name = org_name(org_id);
    EmissionRecord {
        id,
        organization_id: Some(org_id),
        organization_name: Some(name.clone()),
        organization: Some(OrgRef {
            id: org_id,
            name: Some(name),
        }),
        year,
        scope1,
        scope2,
        scope3,
        total_emissions: scope1 + scope2 + scope3,
        verification_status: Some(status.into()),
        data_source: Some("DEMO".to_string()),
        industry: if org_id == 1 {
            Some("전자".to_string())
        } else {
            None
        },
    }
}

fn org_name(org_id: u64) -> String {
    match org_id {
        1 => "테스트 기업 A".to_string(),
        _ => "테스트 기업 B".to_string(),
    }
}

const EMPLOYERS: [(&str, u32); 10] = [
    ("삼성전자", 52_000),
    ("SK하이닉스", 31_000),
    ("현대자동차", 48_000),
    ("LG전자", 29_000),
    ("네이버", 14_000),
    ("카카오", 12_000),
    ("POSCO", 26_000),
    ("한화", 18_000),
    ("롯데", 22_000),
    ("CJ", 16_000),
];

/// Four years of workforce rows per employer, derived arithmetically from
/// a per-company base head-count so repeated calls agree exactly.
pub fn employments(filter: &RecordFilter) -> Vec<EmploymentRecord> {
    let latest = current_year();
    let mut rows = Vec::with_capacity(EMPLOYERS.len() * 4);
    let mut id = 0u64;

    for offset in (0..4i16).rev() {
        let year = latest - offset;
        for (rank, (name, base)) in EMPLOYERS.iter().enumerate() {
            id += 1;
            rows.push(employment_row(id, name, rank, year, *base, offset));
        }
    }
    filter.apply(rows)
}

fn employment_row(
    id: u64,
    name: &str,
    rank: usize,
    year: i16,
    base: u32,
    years_back: i16,
) -> EmploymentRecord {
    // Head-count shrinks 2% per year going back; ratios vary by rank so
    // the companies are distinguishable in charts.
    let total = base - (base / 50) * years_back as u32;
    let female = total * (25 + rank as u32) / 100;
    let regular = total * 88 / 100;
    let new_hires = total / 10;
    let resigned = total / 12;

    EmploymentRecord {
        id,
        organization_name: name.to_string(),
        stock_code: Some(format!("00{rank}000")),
        year,
        total_employees: total,
        male_employees: total - female,
        female_employees: female,
        regular_employees: regular,
        contract_employees: total - regular,
        average_service_years: 5.0 + rank as f64 * 0.7,
        new_hires,
        resigned,
        turnover_rate: resigned as f64 / total as f64 * 100.0,
        verification_status: Some(VerificationStatus::AUTO_COLLECTED.into()),
        data_source: Some("DART_API".to_string()),
    }
}

/// Distinct employment years, newest first, matching the live
/// `/api/employments/years` ordering.
pub fn employment_years() -> Vec<i16> {
    let latest = current_year();
    (0..4i16).map(|offset| latest - offset).collect()
}

pub fn donations(filter: &RecordFilter) -> Vec<DonationRecord> {
    let year = current_year();
    let rows = vec![
        donation_row(1, 1, year - 2, 120_000_000.0, Some("기부"), VerificationStatus::VERIFIED),
        donation_row(2, 1, year - 1, 150_000_000.0, Some("교육"), VerificationStatus::VERIFIED),
        donation_row(3, 1, year, 90_000_000.0, Some("지역사회"), VerificationStatus::IN_REVIEW),
        donation_row(4, 2, year - 1, 40_000_000.0, None, VerificationStatus::AUTO_COLLECTED),
        donation_row(5, 2, year, 55_000_000.0, Some("기부"), VerificationStatus::AUTO_COLLECTED),
    ];
    filter.apply(rows)
}

fn donation_row(
    id: u64,
    org_id: u64,
    year: i16,
    amount: f64,
    category: Option<&str>,
    status: &str,
) -> DonationRecord {
    DonationRecord {
        id,
        organization_id: Some(org_id),
        organization_name: org_name(org_id),
        year,
        amount,
        category: category.map(str::to_string),
        verification_status: Some(status.into()),
    }
}
