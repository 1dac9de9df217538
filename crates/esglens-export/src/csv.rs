use std::borrow::Cow;
use std::path::Path;

use tracing::info;

use esglens_core::models::donation::DonationRecord;
use esglens_core::models::emission::EmissionRecord;
use esglens_core::models::employment::EmploymentRecord;

use crate::error::ExportError;

/// Byte-order mark Excel needs to recognize UTF-8 CSV.
pub const UTF8_BOM: &str = "\u{feff}";

/// A header row plus data rows, not yet serialized.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Serialize to comma-delimited text: header line plus one line per
    /// row, `\n` separators, no trailing newline.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(join_line(&self.headers));
        for row in &self.rows {
            lines.push(join_line(row));
        }
        lines.join("\n")
    }

    /// BOM-prefixed bytes ready to hand to a download or file write.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::from(UTF8_BOM.as_bytes());
        bytes.extend_from_slice(self.to_text().as_bytes());
        bytes
    }
}

fn join_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// RFC-4180 quoting for fields carrying the delimiter, quotes, or
/// newlines. Organization names with embedded commas used to shear the
/// column grid; they are quoted now.
fn escape_field(raw: &str) -> Cow<'_, str> {
    if raw.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}

/// `{prefix}_{YYYY-MM-DD}.csv` from the current local date.
pub fn export_filename(prefix: &str, now: &jiff::Zoned) -> String {
    format!("{prefix}_{}.csv", now.strftime("%Y-%m-%d"))
}

pub fn write_csv(path: &Path, document: &CsvDocument) -> Result<(), ExportError> {
    std::fs::write(path, document.to_bytes())?;
    info!(path = %path.display(), rows = document.rows.len(), "CSV exported");
    Ok(())
}

fn round_str(value: f64) -> String {
    format!("{}", value.round() as i64)
}

fn status_label(status: Option<&esglens_core::models::verification::VerificationStatus>) -> String {
    status.map(|s| s.label().to_string()).unwrap_or_default()
}

/// The emission table's export columns.
pub fn emissions_csv(records: &[EmissionRecord]) -> CsvDocument {
    let mut doc = CsvDocument::new(&["조직명", "연도", "총배출량", "검증상태"]);
    for record in records {
        doc.push_row(vec![
            record.org_label(),
            record.year.to_string(),
            round_str(record.total_emissions),
            status_label(record.verification_status.as_ref()),
        ]);
    }
    doc
}

/// The employment table's export columns.
pub fn employments_csv(records: &[EmploymentRecord]) -> CsvDocument {
    let mut doc = CsvDocument::new(&[
        "조직명",
        "연도",
        "총직원수",
        "남성",
        "여성",
        "정규직",
        "계약직",
        "신규채용",
        "퇴직",
        "이직률",
        "검증상태",
    ]);
    for record in records {
        doc.push_row(vec![
            record.organization_name.clone(),
            record.year.to_string(),
            record.total_employees.to_string(),
            record.male_employees.to_string(),
            record.female_employees.to_string(),
            record.regular_employees.to_string(),
            record.contract_employees.to_string(),
            record.new_hires.to_string(),
            record.resigned.to_string(),
            format!("{:.1}", record.turnover_rate),
            status_label(record.verification_status.as_ref()),
        ]);
    }
    doc
}

/// The donation table's export columns.
pub fn donations_csv(records: &[DonationRecord]) -> CsvDocument {
    let mut doc = CsvDocument::new(&["조직명", "연도", "기부금액", "카테고리", "검증상태"]);
    for record in records {
        doc.push_row(vec![
            record.organization_name.clone(),
            record.year.to_string(),
            round_str(record.amount),
            record.category.clone().unwrap_or_default(),
            status_label(record.verification_status.as_ref()),
        ]);
    }
    doc
}
