//! Date helpers: lenient edit-date parsing and the "last updated" table cell.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const CELL_OPEN: &str = r#"<td class="govuk-table__cell">"#;
const CELL_CLOSE: &str = "</td>";
const NOT_APPLICABLE: &str = "Not applicable";

/// Parse a stored edit date.
///
/// Accepts RFC 3339 timestamps, naive ISO timestamps (taken as UTC) and bare
/// `YYYY-MM-DD` dates (midnight UTC). Returns `None` for anything else.
pub fn parse_edit_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::default())))
}

/// How often a dataset is republished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
    NotApplicable,
}

impl UpdateFrequency {
    /// Case-insensitive; unknown values map to `NotApplicable`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => UpdateFrequency::Daily,
            "weekly" => UpdateFrequency::Weekly,
            "monthly" => UpdateFrequency::Monthly,
            "quarterly" => UpdateFrequency::Quarterly,
            "annually" | "annual" | "yearly" => UpdateFrequency::Annually,
            _ => UpdateFrequency::NotApplicable,
        }
    }
}

/// Year, month and day substrings of an ISO-like date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
}

impl<'a> DateParts<'a> {
    /// Slice `YYYY-MM-DD...` into its parts without validating the calendar.
    pub fn slice(raw: &'a str) -> Option<Self> {
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        let year = raw.get(0..4).filter(|s| digits(*s))?;
        let month = raw.get(5..7).filter(|s| digits(*s))?;
        let day = raw.get(8..10).filter(|s| digits(*s))?;

        Some(Self { year, month, day })
    }
}

/// Render the "last updated" table cell at the granularity the update
/// frequency calls for.
pub fn update_frequency_cell(raw_date: &str, frequency: &str) -> String {
    let frequency = UpdateFrequency::parse(frequency);

    let content = match (DateParts::slice(raw_date.trim()), frequency) {
        (Some(p), UpdateFrequency::Daily | UpdateFrequency::Weekly) => {
            format!("{}/{}/{}", p.day, p.month, p.year)
        }
        (Some(p), UpdateFrequency::Monthly | UpdateFrequency::Quarterly) => {
            format!("{}/{}", p.month, p.year)
        }
        (Some(p), UpdateFrequency::Annually) => p.year.to_string(),
        (_, UpdateFrequency::NotApplicable) => NOT_APPLICABLE.to_string(),
        (None, _) => {
            tracing::debug!("Cannot slice date {:?}, rendering not applicable", raw_date);
            NOT_APPLICABLE.to_string()
        }
    };

    format!("{CELL_OPEN}{content}{CELL_CLOSE}")
}
