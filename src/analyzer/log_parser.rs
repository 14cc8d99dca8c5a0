//! Parse individual log lines and extract SNR and throughput records.
//!
//! Supports the two line formats the simulation emits:
//!
//! ```text
//! 34.9783s: SNR = 32.3951 dB
//! 3.01s: Throughput = 97.4802 Mbps
//! ```
//!
//! Keyword casing is ignored and the tokens after the time may be separated
//! by arbitrary runs of whitespace. Both patterns are anchored to the whole
//! trimmed line, so trailing content after the unit rejects the line.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{Record, RecordKind};

/// Matches `<time>s: SNR = <value> dB`. Numbers require at least one digit
/// before an optional fractional part.
static SNR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)s\s*:\s*snr\s*=\s*([0-9]+(?:\.[0-9]+)?)\s*db$")
        .expect("invalid SNR line pattern")
});

/// Matches `<time>s: Throughput = <value> Mbps`. Unlike the SNR pattern,
/// numbers here may also start with a bare decimal point (`.5s`). The
/// asymmetry is inherited from the log producer and kept on purpose.
static THROUGHPUT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]*\.?[0-9]+)s\s*:\s*throughput\s*=\s*([0-9]*\.?[0-9]+)\s*mbps$")
        .expect("invalid throughput line pattern")
});

/// Parse a log line as one record of the requested kind.
///
/// # Returns
///
/// `Some(Record)` if the trimmed line matches the kind's pattern, `None` for
/// empty lines, lines of the other kind, and anything else that does not
/// match. Non-matching lines are not an error and produce no diagnostic.
pub fn parse_line(kind: RecordKind, line: &str) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let pattern = match kind {
        RecordKind::Snr => &SNR_LINE,
        RecordKind::Throughput => &THROUGHPUT_LINE,
    };

    let captures = pattern.captures(line)?;
    let time_s = captures[1].parse().ok()?;
    let value = captures[2].parse().ok()?;

    Some(Record { time_s, value })
}
