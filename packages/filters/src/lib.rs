// Dataset presentation filters - Core
//
// Pure formatting helpers used by the page templates to turn raw dataset
// records into display-ready strings and HTML fragments. The rendering layer
// owns escaping and wiring; this crate only computes values.

pub mod common;
pub mod config;
pub mod error;

pub use common::utils::{
    format_file_size, generate_summary, org_type_display, parse_edit_date, sorted_by_display,
    update_frequency_cell, DateParts, OrganisationType, SortOrder, SummaryExtractor, SummaryPhase,
    UpdateFrequency,
};
pub use common::Record;
pub use config::SummaryConfig;
pub use error::{FilterError, Result};
