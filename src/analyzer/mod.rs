//! Analyzer module for simulation log ingestion.
//!
//! Provides functionality for:
//! - Parsing SNR and throughput records out of plain-text simulation logs
//! - Converting simulated time to receiver distance
//! - Collecting the per-channel-model series the charts are drawn from

pub mod log_loader;
pub mod log_parser;
pub mod types;

pub use log_loader::load_channel;
pub use types::{ChannelData, ChannelModel, Series};
