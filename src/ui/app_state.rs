//! Application state management.
//!
//! Implements the central `AppState` struct holding the parsed channel data
//! and the two chart frames. It implements the `eframe::App` trait: each
//! frame it rebuilds the two chart windows from the (immutable) series in
//! the immediate-mode paradigm.

use eframe::egui;
use egui::Color32;

use super::chart::ChartFrame;
use crate::analyzer::{ChannelData, Series};

/// Central application state: the three channels and the two chart frames.
pub struct AppState {
    channels: [ChannelData; 3],
    snr_frame: ChartFrame,
    throughput_frame: ChartFrame,
}

impl AppState {
    pub fn new(channels: [ChannelData; 3]) -> Self {
        Self {
            channels,
            snr_frame: ChartFrame::snr(),
            throughput_frame: ChartFrame::throughput(),
        }
    }

    /// Series list for the SNR chart, one entry per channel model.
    fn snr_series(&self) -> Vec<(Color32, &'static str, &Series)> {
        self.channels
            .iter()
            .map(|channel| (channel.model.color(), channel.model.label(), &channel.snr))
            .collect()
    }

    /// Series list for the throughput chart, one entry per channel model.
    fn throughput_series(&self) -> Vec<(Color32, &'static str, &Series)> {
        self.channels
            .iter()
            .map(|channel| (channel.model.color(), channel.model.label(), &channel.throughput))
            .collect()
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |_ui| {});

        // Both windows carry the same generic title, so they need distinct ids.
        egui::Window::new(self.snr_frame.title)
            .id(egui::Id::new(self.snr_frame.id))
            .default_pos([20.0, 20.0])
            .default_size([500.0, 320.0])
            .show(ctx, |ui| {
                self.snr_frame.show(ui, &self.snr_series());
            });

        egui::Window::new(self.throughput_frame.title)
            .id(egui::Id::new(self.throughput_frame.id))
            .default_pos([560.0, 20.0])
            .default_size([500.0, 320.0])
            .show(ctx, |ui| {
                self.throughput_frame.show(ui, &self.throughput_series());
            });
    }
}
