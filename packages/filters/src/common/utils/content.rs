//! Pure utility functions for content manipulation
//!
//! These functions contain NO side effects - they take a record and return a
//! display string without touching storage or performing I/O.
//! This makes them easy to test and reason about.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use crate::common::types::Record;
use crate::config::SummaryConfig;

/// Which rule produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPhase {
    /// Record edited after the cutover; authored summary returned as is
    Authored,
    /// Notes already short enough, or the pivot sits on a boundary
    FullNotes,
    /// Boundary found in the window before the pivot
    Backward,
    /// Boundary found in the window after the pivot
    Forward,
    /// Boundary found anywhere before the pivot
    FullBackward,
    /// No boundary at all; cut at the pivot
    HardTruncation,
}

impl SummaryPhase {
    /// Stable snake_case name, used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryPhase::Authored => "authored",
            SummaryPhase::FullNotes => "full_notes",
            SummaryPhase::Backward => "backward",
            SummaryPhase::Forward => "forward",
            SummaryPhase::FullBackward => "full_backward",
            SummaryPhase::HardTruncation => "hard_truncation",
        }
    }
}

/// Derives display summaries from dataset records.
///
/// Indices are counted in `char`s, so multi-byte text is never split inside
/// a character.
#[derive(Debug, Clone, Default)]
pub struct SummaryExtractor {
    config: SummaryConfig,
}

impl SummaryExtractor {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Summary to display for `record`.
    pub fn extract(&self, record: &Record) -> String {
        self.extract_with_phase(record).0
    }

    /// Like [`extract`](Self::extract), also reporting which rule applied.
    pub fn extract_with_phase(&self, record: &Record) -> (String, SummaryPhase) {
        if self.has_authored_summary(record) {
            tracing::trace!(phase = "authored", "Using authored summary");
            return (
                record.summary.clone().unwrap_or_default(),
                SummaryPhase::Authored,
            );
        }

        let (text, phase) = self.truncate_notes(&record.notes);
        tracing::trace!(phase = phase.as_str(), chars = text.chars().count(), "Derived summary");
        (text.to_string(), phase)
    }

    /// True when the record was edited strictly after the cutover date.
    ///
    /// A missing edit date never counts as fresh.
    pub fn has_authored_summary(&self, record: &Record) -> bool {
        let cutover: DateTime<Utc> =
            Utc.from_utc_datetime(&self.config.cutover_date.and_time(NaiveTime::default()));
        matches!(record.last_edit_date, Some(edited) if edited > cutover)
    }

    /// Cut `notes` at a sentence-like boundary near the pivot.
    pub fn truncate_notes<'a>(&self, notes: &'a str) -> (&'a str, SummaryPhase) {
        let chars: Vec<(usize, char)> = notes.char_indices().collect();
        let pivot = self.config.pivot;
        let window = self.config.window;
        let is_boundary = |c: char| self.config.is_boundary(c);

        match chars.get(pivot) {
            None => return (notes, SummaryPhase::FullNotes),
            Some(&(_, c)) if is_boundary(c) => return (notes, SummaryPhase::FullNotes),
            Some(_) => {}
        }

        let (cut, phase) = search_backward(&chars, pivot, pivot.saturating_sub(window), is_boundary)
            .map(|i| (i, SummaryPhase::Backward))
            .or_else(|| {
                search_forward(&chars, pivot, pivot.saturating_add(window), is_boundary)
                    .map(|i| (i, SummaryPhase::Forward))
            })
            .or_else(|| {
                search_backward(&chars, pivot, 0, is_boundary).map(|i| (i, SummaryPhase::FullBackward))
            })
            .unwrap_or((pivot, SummaryPhase::HardTruncation));

        let byte_end = chars.get(cut).map_or(notes.len(), |&(offset, _)| offset);
        (&notes[..byte_end], phase)
    }
}

/// Summary for `record` using the default configuration.
pub fn generate_summary(record: &Record) -> String {
    SummaryExtractor::default().extract(record)
}

/// First boundary scanning down from `from` to `to` (both inclusive).
fn search_backward(
    chars: &[(usize, char)],
    from: usize,
    to: usize,
    is_boundary: impl Fn(char) -> bool,
) -> Option<usize> {
    if chars.is_empty() || to > from {
        return None;
    }
    let from = from.min(chars.len() - 1);
    (to..=from).rev().find(|&i| is_boundary(chars[i].1))
}

/// First boundary scanning up from `from` to `to` (both inclusive),
/// clamped to the end of the text.
fn search_forward(
    chars: &[(usize, char)],
    from: usize,
    to: usize,
    is_boundary: impl Fn(char) -> bool,
) -> Option<usize> {
    if chars.is_empty() || from >= chars.len() {
        return None;
    }
    let to = to.min(chars.len() - 1);
    (from..=to).find(|&i| is_boundary(chars[i].1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn old_record(notes: impl Into<String>) -> Record {
        Record::new(notes).with_last_edit_date(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap())
    }

    fn chars(text: &str) -> Vec<(usize, char)> {
        text.char_indices().collect()
    }

    fn is_stop(c: char) -> bool {
        SummaryConfig::default().is_boundary(c)
    }

    #[test]
    fn test_generate_summary_short_notes() {
        let record = old_record("Short description");
        assert_eq!(generate_summary(&record), "Short description");
    }

    #[test]
    fn test_generate_summary_exact_pivot_length() {
        let notes = "a".repeat(160);
        assert_eq!(generate_summary(&old_record(notes.clone())), notes);
    }

    #[test]
    fn test_generate_summary_pivot_on_boundary() {
        let notes = format!("{}.{}", "a".repeat(160), "b".repeat(40));
        assert_eq!(generate_summary(&old_record(notes.clone())), notes);
    }

    #[test]
    fn test_authored_summary_after_cutover() {
        let record = Record::new("a".repeat(300))
            .with_summary("Short blurb")
            .with_last_edit_date(Utc.with_ymd_and_hms(2018, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(
            SummaryExtractor::default().extract_with_phase(&record),
            ("Short blurb".to_string(), SummaryPhase::Authored)
        );
    }

    #[test]
    fn test_authored_summary_missing_is_empty() {
        let record = Record::new("notes that are ignored")
            .with_last_edit_date(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(generate_summary(&record), "");
    }

    #[test]
    fn test_whitespace_summary_returned_unchanged() {
        let record = Record::new("notes")
            .with_summary("   ")
            .with_last_edit_date(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(generate_summary(&record), "   ");
    }

    #[test]
    fn test_cutover_date_itself_is_not_fresh() {
        let record = Record::new("From the notes")
            .with_summary("From the summary")
            .with_last_edit_date(Utc.with_ymd_and_hms(2017, 4, 1, 0, 0, 0).unwrap());
        assert_eq!(generate_summary(&record), "From the notes");
    }

    #[test]
    fn test_later_on_cutover_day_is_fresh() {
        let record = Record::new("From the notes")
            .with_summary("From the summary")
            .with_last_edit_date(Utc.with_ymd_and_hms(2017, 4, 1, 9, 0, 0).unwrap());
        assert_eq!(generate_summary(&record), "From the summary");
    }

    #[test]
    fn test_missing_date_derives_from_notes() {
        let record = Record::new("Just notes").with_summary("Ignored");
        assert_eq!(generate_summary(&record), "Just notes");
    }

    #[test]
    fn test_empty_notes() {
        assert_eq!(generate_summary(&old_record("")), "");
    }

    #[test]
    fn test_backward_phase() {
        let notes = format!("{}.{}", "a".repeat(150), "b".repeat(49));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "a".repeat(150));
        assert_eq!(phase, SummaryPhase::Backward);
    }

    #[test]
    fn test_forward_phase() {
        let notes = format!("{},{}", "a".repeat(175), "b".repeat(40));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "a".repeat(175));
        assert_eq!(phase, SummaryPhase::Forward);
    }

    #[test]
    fn test_full_backward_phase() {
        let notes = format!("{}!{}", "a".repeat(50), "b".repeat(200));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "a".repeat(50));
        assert_eq!(phase, SummaryPhase::FullBackward);
    }

    #[test]
    fn test_hard_truncation_phase() {
        let notes = "x".repeat(200);
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "x".repeat(160));
        assert_eq!(phase, SummaryPhase::HardTruncation);
    }

    #[test]
    fn test_boundary_at_window_start_is_backward() {
        let notes = format!("{}.{}", "a".repeat(130), "b".repeat(69));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text.len(), 130);
        assert_eq!(phase, SummaryPhase::Backward);
    }

    #[test]
    fn test_boundary_just_before_window_is_full_backward() {
        let notes = format!("{}.{}", "a".repeat(129), "b".repeat(70));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text.len(), 129);
        assert_eq!(phase, SummaryPhase::FullBackward);
    }

    #[test]
    fn test_boundary_at_window_end_is_forward() {
        let notes = format!("{},{}", "a".repeat(190), "b".repeat(20));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text.len(), 190);
        assert_eq!(phase, SummaryPhase::Forward);
    }

    #[test]
    fn test_boundary_just_past_window_is_hard_truncation() {
        let notes = format!("{},{}", "a".repeat(191), "b".repeat(20));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text.len(), 160);
        assert_eq!(phase, SummaryPhase::HardTruncation);
    }

    #[test]
    fn test_tie_prefers_earlier_boundary() {
        // Boundaries 5 before and 5 after the pivot
        let notes = format!("{}.{}?{}", "a".repeat(155), "b".repeat(9), "c".repeat(40));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "a".repeat(155));
        assert_eq!(phase, SummaryPhase::Backward);
    }

    #[test]
    fn test_backward_prefers_boundary_nearest_pivot() {
        let notes = format!("{}.{}.{}", "a".repeat(135), "b".repeat(20), "c".repeat(60));
        let (text, _) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, format!("{}.{}", "a".repeat(135), "b".repeat(20)));
    }

    #[test]
    fn test_newline_is_a_boundary() {
        let notes = format!("{}\n{}", "a".repeat(170), "b".repeat(40));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "a".repeat(170));
        assert_eq!(phase, SummaryPhase::Forward);
    }

    #[test]
    fn test_forward_scan_clamped_to_end_of_text() {
        // Text ends a few chars past the pivot with no boundary
        let notes = format!("{}.{}", "a".repeat(10), "b".repeat(155));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "a".repeat(10));
        assert_eq!(phase, SummaryPhase::FullBackward);
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundaries() {
        let notes = format!("{}.{}", "é".repeat(150), "ü".repeat(49));
        let (text, phase) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text, "é".repeat(150));
        assert_eq!(phase, SummaryPhase::Backward);

        let notes = "ß".repeat(200);
        let (text, _) = SummaryExtractor::default().truncate_notes(&notes);
        assert_eq!(text.chars().count(), 160);
    }

    #[test]
    fn test_custom_config() {
        let extractor = SummaryExtractor::new(SummaryConfig::new().with_pivot(10).with_window(3));
        let (text, phase) = extractor.truncate_notes("Hello, wonderful world");
        assert_eq!(text, "Hello");
        assert_eq!(phase, SummaryPhase::FullBackward);
    }

    #[test]
    fn test_window_larger_than_pivot() {
        let extractor = SummaryExtractor::new(SummaryConfig::new().with_pivot(5).with_window(30));
        let (text, phase) = extractor.truncate_notes("a.bcdefghijk");
        assert_eq!(text, "a");
        assert_eq!(phase, SummaryPhase::Backward);
    }

    #[test]
    fn test_search_backward_clamps() {
        let text = chars("ab.cd");
        assert_eq!(search_backward(&text, 10, 0, is_stop), Some(2));
        assert_eq!(search_backward(&text, 1, 0, is_stop), None);
        assert_eq!(search_backward(&text, 1, 3, is_stop), None);
        assert_eq!(search_backward(&[], 5, 0, is_stop), None);
    }

    #[test]
    fn test_search_forward_clamps() {
        let text = chars("abcd!");
        assert_eq!(search_forward(&text, 0, 100, is_stop), Some(4));
        assert_eq!(search_forward(&text, 0, 3, is_stop), None);
        assert_eq!(search_forward(&text, 9, 20, is_stop), None);
        assert_eq!(search_forward(&[], 0, 5, is_stop), None);
    }

    #[test]
    fn test_idempotent() {
        let record = old_record(format!("{}, and then {}", "word ".repeat(30), "more ".repeat(20)));
        assert_eq!(generate_summary(&record), generate_summary(&record));
    }
}
