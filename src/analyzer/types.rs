//! Type definitions specific to the analyzer module.

use egui::Color32;

/// Distance (in meters) between transmitter and receiver at simulation start.
const DISTANCE_OFFSET_M: f64 = 5.0;

/// Speed (in meters per simulated second) the receiver moves away with.
const DISTANCE_SLOPE_M_PER_S: f64 = 2.0;

/// Which record pattern a parse run extracts from a log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `<time>s: SNR = <value> dB` lines.
    Snr,
    /// `<time>s: Throughput = <value> Mbps` lines.
    Throughput,
}

/// One successfully matched log line: simulated time and measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub time_s: f64,
    pub value: f64,
}

/// Propagation model identity for one input file.
///
/// The identity only distinguishes the three inputs; it fixes the legend
/// label and the series color used on both charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelModel {
    Friis,
    TwoRayGround,
    LogNormal,
}

impl ChannelModel {
    pub fn label(self) -> &'static str {
        match self {
            ChannelModel::Friis => "Friis",
            ChannelModel::TwoRayGround => "TwoRayGround",
            ChannelModel::LogNormal => "LogNormal",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            ChannelModel::Friis => Color32::BLUE,
            ChannelModel::TwoRayGround => Color32::GREEN,
            ChannelModel::LogNormal => Color32::RED,
        }
    }
}

/// Convert simulated time to receiver distance.
///
/// The receiver starts 5 m from the transmitter and moves away at 2 m/s, so
/// `distance = 5 + 2 * time`.
pub fn distance_for_time(time_s: f64) -> f64 {
    DISTANCE_OFFSET_M + DISTANCE_SLOPE_M_PER_S * time_s
}

/// Parallel distance/value sequences in input-file line order.
///
/// Invariant: `distances` and `values` are always equal in length and
/// index-aligned (`distances[i]` pairs with `values[i]`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub distances: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    /// Append one record, converting its time to distance.
    pub fn push(&mut self, record: Record) {
        self.distances.push(distance_for_time(record.time_s));
        self.values.push(record.value);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Plot points in the `[x, y]` layout egui_plot consumes.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.distances
            .iter()
            .zip(self.values.iter())
            .map(|(&distance, &value)| [distance, value])
            .collect()
    }
}

/// Everything parsed from one channel model's log file.
#[derive(Debug, Clone)]
pub struct ChannelData {
    pub model: ChannelModel,
    pub snr: Series,
    pub throughput: Series,
}
