//! Chart construction for the viewer windows

use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints};
use mindflex_analysis::BandPowerFrame;

/// Bar colors, one entry per band in band table order
pub const BAND_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(74, 151, 255),  // Low Delta
    egui::Color32::from_rgb(74, 151, 255),  // High Delta
    egui::Color32::from_rgb(255, 200, 83),  // Theta
    egui::Color32::from_rgb(29, 188, 0),    // Alpha
    egui::Color32::from_rgb(255, 85, 34),   // Beta
    egui::Color32::from_rgb(164, 97, 177),  // Gamma
];

/// Map a sample window to line-chart points, index on x.
///
/// Purely derived from the window contents, so redrawing without new
/// samples yields identical chart data.
pub fn line_points(samples: &[f32]) -> Vec<[f64; 2]> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &uv)| [i as f64, uv as f64])
        .collect()
}

/// Draw the rolling raw-signal line chart with fixed axes:
/// x in [0, window length], y in [-(max_uV + 10), max_uV + 10].
pub fn raw_signal_plot(ui: &mut egui::Ui, samples: &[f32], max_microvolts: f32) {
    ui.label("EEG Signal Over Time");

    let y_limit = (max_microvolts + 10.0) as f64;
    let points: PlotPoints = line_points(samples).into();

    Plot::new("raw_signal_plot")
        .height(ui.available_height())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_x(0.0)
        .include_x(samples.len() as f64)
        .include_y(-y_limit)
        .include_y(y_limit)
        .x_axis_label("t (~ms)")
        .y_axis_label("µV")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).color(egui::Color32::from_rgb(31, 119, 180)));
        });
}

/// Draw the per-band FFT magnitude bar chart.
///
/// Bands keep their declared order on the x axis; before the first
/// analysis tick there is no frame and the plot stays empty.
pub fn band_power_plot(ui: &mut egui::Ui, frame: Option<&BandPowerFrame>) {
    ui.label("EEG Power Bands");

    let plot = Plot::new("band_power_plot")
        .height(ui.available_height())
        .legend(Legend::default().position(Corner::RightTop))
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_x(-0.5)
        .include_x(5.5)
        .include_y(0.0)
        .x_axis_label("frequency band")
        .y_axis_label("FFT magnitude");

    plot.show(ui, |plot_ui| {
        let Some(frame) = frame else {
            return;
        };

        for (i, power) in frame.powers.iter().enumerate() {
            let color = BAND_COLORS[i % BAND_COLORS.len()];
            let bar = Bar::new(i as f64, power.magnitude as f64)
                .width(0.7)
                .fill(color);

            plot_ui.bar_chart(
                BarChart::new(vec![bar])
                    .color(color)
                    .name(power.band.name),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points_index_on_x() {
        let points = line_points(&[1.0, -2.5, 3.0]);
        assert_eq!(points, vec![[0.0, 1.0], [1.0, -2.5], [2.0, 3.0]]);
    }

    #[test]
    fn test_line_points_are_idempotent() {
        let samples = vec![0.5, 0.25, -0.75, 12.0];
        assert_eq!(line_points(&samples), line_points(&samples));
    }

    #[test]
    fn test_one_color_per_band() {
        assert_eq!(BAND_COLORS.len(), mindflex_core::EEG_BANDS.len());
    }
}
