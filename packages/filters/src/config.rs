use chrono::NaiveDate;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use crate::error::{FilterError, Result};

/// Characters treated as the end of a sentence-like unit.
pub const DEFAULT_BOUNDARY_CHARS: [char; 5] = ['.', '!', '?', ',', '\n'];

/// Character index around which a summary boundary is sought.
pub const DEFAULT_PIVOT: usize = 160;

/// Search radius either side of the pivot.
pub const DEFAULT_WINDOW: usize = 30;

/// Configuration for summary extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Records edited strictly after this date carry an authored summary.
    ///
    /// Older records predate summary authoring, so their summary is derived
    /// from the notes. Default: 2017-04-01.
    pub cutover_date: NaiveDate,

    /// Target length of a derived summary, in characters. Default: 160.
    pub pivot: usize,

    /// How far before and after the pivot to look for a boundary. Default: 30.
    pub window: usize,

    /// Characters a derived summary may be cut at.
    pub boundary_chars: Vec<char>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            cutover_date: default_cutover_date(),
            pivot: DEFAULT_PIVOT,
            window: DEFAULT_WINDOW,
            boundary_chars: DEFAULT_BOUNDARY_CHARS.to_vec(),
        }
    }
}

fn default_cutover_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 4, 1).unwrap_or_default()
}

impl SummaryConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Reads `SUMMARY_CUTOVER_DATE` (YYYY-MM-DD), `SUMMARY_PIVOT` and
    /// `SUMMARY_WINDOW`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            cutover_date: env_or("SUMMARY_CUTOVER_DATE", defaults.cutover_date, |raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| e.to_string())
            })?,
            pivot: env_or("SUMMARY_PIVOT", defaults.pivot, parse_number)?,
            window: env_or("SUMMARY_WINDOW", defaults.window, parse_number)?,
            boundary_chars: defaults.boundary_chars,
        })
    }

    /// Set the cutover date.
    pub fn with_cutover_date(mut self, date: NaiveDate) -> Self {
        self.cutover_date = date;
        self
    }

    /// Set the pivot index.
    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set the search window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Replace the boundary characters.
    pub fn with_boundary_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.boundary_chars = chars.into_iter().collect();
        self
    }

    pub fn is_boundary(&self, c: char) -> bool {
        self.boundary_chars.contains(&c)
    }
}

fn parse_number(raw: &str) -> std::result::Result<usize, String> {
    usize::from_str(raw.trim()).map_err(|e| e.to_string())
}

fn env_or<T>(
    key: &str,
    default: T,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<T> {
    match env::var(key) {
        Ok(raw) => parse(&raw).map_err(|reason| FilterError::InvalidConfig {
            key: key.to_string(),
            reason,
        }),
        Err(_) => Ok(default),
    }
}
