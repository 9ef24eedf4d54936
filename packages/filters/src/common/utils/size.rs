// Human-readable download sizes for the resource list

const UNITS: [&str; 5] = ["b", "Kb", "Mb", "Gb", "Tb"];

/// Format tag for web pages, which have no download size
const HTML_FORMAT: &str = "html";

/// Format a byte count as `(1.2Mb)`.
///
/// Scales by 1024 and rounds to one decimal place, dropping a trailing `.0`.
/// Returns an empty string for zero-size files and HTML resources.
pub fn format_file_size(bytes: u64, format: &str) -> String {
    if bytes == 0 || format.trim().eq_ignore_ascii_case(HTML_FORMAT) {
        return String::new();
    }

    let mut value = bytes as f64;
    let mut idx = 0usize;

    while value >= 1024.0 && idx < UNITS.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }

    let mut rounded = (value * 10.0).round() / 10.0;
    // 1023.95Kb rounds up to a whole unit
    if rounded >= 1024.0 && idx < UNITS.len() - 1 {
        rounded = (rounded / 1024.0 * 10.0).round() / 10.0;
        idx += 1;
    }
    let number = if rounded.fract() == 0.0 {
        format!("{}", rounded as u64)
    } else {
        format!("{:.1}", rounded)
    };

    format!("({}{})", number, UNITS[idx])
}
