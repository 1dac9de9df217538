use esglens_core::models::emission::EmissionRecord;
use esglens_core::models::verification::VerificationStatus;
use esglens_export::csv::UTF8_BOM;
use esglens_export::{emissions_csv, export_filename};

fn record(name: &str, year: i16, total: f64) -> EmissionRecord {
    EmissionRecord {
        id: 0,
        organization_id: None,
        organization_name: Some(name.to_string()),
        organization: None,
        year,
        scope1: 0.0,
        scope2: 0.0,
        scope3: 0.0,
        total_emissions: total,
        verification_status: Some(VerificationStatus::VERIFIED.into()),
        data_source: None,
        industry: None,
    }
}

#[test]
fn n_records_export_n_plus_one_lines() {
    let records = vec![
        record("테스트 기업 A", 2023, 1000.0),
        record("테스트 기업 B", 2024, 350.0),
    ];

    let text = emissions_csv(&records).to_text();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "조직명,연도,총배출량,검증상태");
    assert_eq!(lines[1], "테스트 기업 A,2023,1000,검증완료");
}

#[test]
fn bytes_start_with_utf8_bom() {
    let bytes = emissions_csv(&[record("테스트 기업 A", 2024, 1.0)]).to_bytes();
    assert!(bytes.starts_with(UTF8_BOM.as_bytes()));
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
}

#[test]
fn embedded_comma_does_not_shear_columns() {
    let records = vec![record("주식회사 A,B", 2024, 500.0)];

    let text = emissions_csv(&records).to_text();
    let row = text.split('\n').nth(1).unwrap();
    assert_eq!(row, "\"주식회사 A,B\",2024,500,검증완료");

    // Column count survives the embedded comma: quoted field is one cell.
    let header_cols = text.split('\n').next().unwrap().split(',').count();
    assert_eq!(header_cols, 4);
    assert!(row.starts_with('"'));
}

#[test]
fn embedded_quote_is_doubled() {
    let records = vec![record("\"따옴표\" 기업", 2024, 10.0)];
    let text = emissions_csv(&records).to_text();
    assert!(text.contains("\"\"\"따옴표\"\" 기업\""));
}

#[test]
fn fractional_totals_are_rounded() {
    let text = emissions_csv(&[record("테스트 기업 A", 2024, 1200.6)]).to_text();
    assert!(text.contains(",1201,"));
}

#[test]
fn filename_carries_the_date() {
    let date = "2026-08-26T09:00:00+09:00[Asia/Seoul]"
        .parse::<jiff::Zoned>()
        .unwrap();
    assert_eq!(export_filename("emissions", &date), "emissions_2026-08-26.csv");
}
