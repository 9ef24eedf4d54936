// Record shape handed to the filters by the page templates
//
// Fields arrive from stored JSON, so optional values are modelled explicitly
// and malformed dates degrade to `None` instead of failing the whole record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::common::utils::parse_edit_date;
use crate::error::Result;

/// A dataset record as seen by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Long-form free text describing the dataset
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub notes: String,
    /// Authored short description, trusted only for recently edited records
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(
        default,
        alias = "lastEditDate",
        deserialize_with = "deserialize_lenient_date"
    )]
    pub last_edit_date: Option<DateTime<Utc>>,
}

impl Record {
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_last_edit_date(mut self, date: DateTime<Utc>) -> Self {
        self.last_edit_date = Some(date);
        self
    }

    /// Decode either a single record object or an array of records.
    pub fn many_from_json(input: &str) -> Result<Vec<Record>> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let records = match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)?,
            other => vec![serde_json::from_value(other)?],
        };
        Ok(records)
    }
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let parsed = match raw {
        Some(serde_json::Value::String(s)) => {
            let parsed = parse_edit_date(&s);
            if parsed.is_none() {
                tracing::debug!("Unparseable last_edit_date {:?}, treating as absent", s);
            }
            parsed
        }
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            tracing::debug!("Non-string last_edit_date {}, treating as absent", other);
            None
        }
    };
    Ok(parsed)
}
