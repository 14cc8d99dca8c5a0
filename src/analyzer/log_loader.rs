//! File ingestion for simulation logs.
//!
//! Reads a log file line by line and accumulates the records matching one
//! `RecordKind` into a `Series`. Loading is best-effort: a file that cannot
//! be opened or read yields an empty series and a logged diagnostic, never
//! an error value, so the caller always receives two equal-length sequences.

use log::{debug, error};
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::log_parser::parse_line;
use super::types::{ChannelData, ChannelModel, RecordKind, Series};

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Load all records of one kind from a log file, in file order.
///
/// Lines of the other kind and otherwise malformed lines simply fail to
/// match and are skipped. A mid-read I/O failure discards everything
/// gathered so far; partial results are never returned.
pub fn load_series(path: &str, kind: RecordKind) -> Series {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!("Cannot open log file '{}': {}", path, err);
            return Series::default();
        }
    };

    let reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut series = Series::default();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                if let Some(record) = parse_line(kind, &line) {
                    series.push(record);
                }
            }
            Err(err) => {
                error!("Error reading log file '{}': {}", path, err);
                return Series::default();
            }
        }
    }

    series
}

/// Load both record kinds from one channel model's log file.
pub fn load_channel(model: ChannelModel, path: &str) -> ChannelData {
    let snr = load_series(path, RecordKind::Snr);
    let throughput = load_series(path, RecordKind::Throughput);

    debug!(
        "{}: loaded {} SNR and {} throughput records from '{}'",
        model.label(),
        snr.len(),
        throughput.len(),
        path
    );

    ChannelData { model, snr, throughput }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    /// Write a fixture log under the system temp directory.
    fn write_fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("channel-chart-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).expect("failed to create fixture file");
        file.write_all(content.as_bytes()).expect("failed to write fixture file");
        path
    }

    #[test]
    fn test_load_snr_series_in_file_order() {
        let path = write_fixture("order.log", "0s: SNR = 30 dB\n10s: SNR = 20 dB\n");
        let series = load_series(path.to_str().unwrap(), RecordKind::Snr);
        std::fs::remove_file(&path).ok();

        assert_eq!(series.distances, vec![5.0, 25.0]);
        assert_eq!(series.values, vec![30.0, 20.0]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let path = write_fixture("blanks.log", "\n0s: SNR = 30 dB\n\n   \n10s: SNR = 20 dB\n\n");
        let series = load_series(path.to_str().unwrap(), RecordKind::Snr);
        std::fs::remove_file(&path).ok();

        assert_eq!(series.len(), 2);
        assert_eq!(series.values, vec![30.0, 20.0]);
    }

    #[test]
    fn test_interleaved_kinds_are_separated() {
        let content = "0s: SNR = 30 dB\n1s: Throughput = 90 Mbps\n2s: SNR = 28 dB\n3s: Throughput = 85 Mbps\n";
        let path = write_fixture("interleaved.log", content);

        let snr = load_series(path.to_str().unwrap(), RecordKind::Snr);
        let throughput = load_series(path.to_str().unwrap(), RecordKind::Throughput);
        std::fs::remove_file(&path).ok();

        assert_eq!(snr.values, vec![30.0, 28.0]);
        assert_eq!(throughput.values, vec![90.0, 85.0]);
    }

    #[test]
    fn test_only_other_kind_yields_empty() {
        let path = write_fixture("other-kind.log", "1s: Throughput = 90 Mbps\n2s: Throughput = 85 Mbps\n");
        let series = load_series(path.to_str().unwrap(), RecordKind::Snr);
        std::fs::remove_file(&path).ok();

        assert!(series.is_empty());
        assert_eq!(series.distances.len(), series.values.len());
    }

    #[test]
    fn test_missing_file_yields_empty_series() {
        let series = load_series("/nonexistent/channel-chart.log", RecordKind::Snr);
        assert!(series.is_empty());
        assert_eq!(series.distances.len(), series.values.len());
    }

    #[test]
    fn test_load_channel_reads_both_kinds() {
        let content = "0s: SNR = 30 dB\n1s: Throughput = 90 Mbps\n";
        let path = write_fixture("channel.log", content);
        let data = load_channel(ChannelModel::Friis, path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        assert_eq!(data.model, ChannelModel::Friis);
        assert_eq!(data.snr.values, vec![30.0]);
        assert_eq!(data.throughput.values, vec![90.0]);
    }
}
