//! Chart frame configuration and series rendering.

use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, MarkerShape, Plot, Points};

use crate::analyzer::Series;

/// Stroke width of the series lines.
const LINE_WIDTH: f32 = 2.0;

/// Radius of the circular point markers drawn on each series.
const MARKER_RADIUS: f32 = 1.5;

/// Fixed visual frame for one chart: title, axis labels and axis bounds.
///
/// The frame is an explicit object handed to the renderer instead of an
/// ambient "current figure", so drawing carries no hidden state.
pub struct ChartFrame {
    pub title: &'static str,
    pub id: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
}

impl ChartFrame {
    /// SNR comparison chart: distance on [0, 80], snr on [0, 60].
    pub fn snr() -> Self {
        Self {
            title: "Figure",
            id: "snr_chart",
            x_label: "distance",
            y_label: "snr",
            x_bounds: (0.0, 80.0),
            y_bounds: (0.0, 60.0),
        }
    }

    /// Throughput comparison chart: distance on [0, 80], throughputs on [0, 120].
    pub fn throughput() -> Self {
        Self {
            title: "Figure",
            id: "throughput_chart",
            x_label: "distance",
            y_label: "throughputs",
            x_bounds: (0.0, 80.0),
            y_bounds: (0.0, 120.0),
        }
    }

    /// Draw all series into this frame.
    ///
    /// Each series renders as a connected line with small circular point
    /// markers, colored and legend-named per entry. Legend placement is left
    /// to egui_plot.
    pub fn show(&self, ui: &mut egui::Ui, series_list: &[(Color32, &'static str, &Series)]) {
        Plot::new(self.id)
            .x_axis_label(self.x_label)
            .y_axis_label(self.y_label)
            .include_x(self.x_bounds.0)
            .include_x(self.x_bounds.1)
            .include_y(self.y_bounds.0)
            .include_y(self.y_bounds.1)
            .show_grid(true)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (color, label, series) in series_list {
                    let points = series.points();
                    plot_ui.line(Line::new(*label, points.clone()).color(*color).width(LINE_WIDTH));
                    plot_ui.points(
                        Points::new(*label, points)
                            .color(*color)
                            .shape(MarkerShape::Circle)
                            .radius(MARKER_RADIUS),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Series;
    use crate::analyzer::types::Record;

    #[test]
    fn test_frame_axes_are_fixed() {
        let snr = ChartFrame::snr();
        assert_eq!(snr.title, "Figure");
        assert_eq!((snr.x_label, snr.y_label), ("distance", "snr"));
        assert_eq!(snr.x_bounds, (0.0, 80.0));
        assert_eq!(snr.y_bounds, (0.0, 60.0));

        let throughput = ChartFrame::throughput();
        assert_eq!(throughput.title, "Figure");
        assert_eq!((throughput.x_label, throughput.y_label), ("distance", "throughputs"));
        assert_eq!(throughput.x_bounds, (0.0, 80.0));
        assert_eq!(throughput.y_bounds, (0.0, 120.0));
    }

    #[test]
    fn test_series_feed_named_plot_items() {
        let mut series = Series::default();
        series.push(Record { time_s: 0.0, value: 30.0 });
        series.push(Record { time_s: 10.0, value: 20.0 });

        let points = series.points();
        let line = Line::new("Friis", points.clone()).color(Color32::BLUE).width(LINE_WIDTH);
        let points_item = Points::new("Friis", points)
            .color(Color32::BLUE)
            .shape(MarkerShape::Circle)
            .radius(MARKER_RADIUS);

        use egui_plot::PlotItem;
        assert_eq!(PlotItem::name(&line), "Friis");
        assert_eq!(PlotItem::name(&points_item), "Friis");
    }
}
