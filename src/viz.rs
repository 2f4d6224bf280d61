//! Spectral curve plotting
//!
//! Renders the curves behind a worksheet run (observer function, LED
//! emission, detector response) into a single PNG so the spectral overlap
//! driving the numbers can be eyeballed.

use plotters::prelude::*;

use crate::photometry::SpectralResponse;

/// Colors cycled through for successive curves
const SERIES_COLORS: [RGBColor; 5] = [BLUE, RED, GREEN, MAGENTA, BLACK];

/// Plot a set of labelled spectral curves, normalized to unit peak
///
/// Curves are sampled at 1nm over 380-800nm, which covers the observer grid
/// and the red edge of the emitter tables.
///
/// # Arguments
///
/// * `save_path` - Output PNG path
/// * `curves` - Labelled curves to draw, in legend order
///
/// # Returns
///
/// Ok on success or the underlying drawing error
pub fn plot_spectral_curves(
    save_path: &str,
    curves: &[(&str, &SpectralResponse)],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(save_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.margin(20, 20, 20, 20);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Spectral curves (normalized)",
            ("sans-serif", 28).into_font().color(&BLACK),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(380.0..800.0, 0.0..1.05)?;

    chart
        .configure_mesh()
        .x_desc("Wavelength (nm)")
        .y_desc("Relative response")
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 14))
        .draw()?;

    for (index, (label, curve)) in curves.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let normalized = curve.normalized_to_peak();

        chart
            .draw_series(LineSeries::new(
                (380..=800).map(|nm| (nm as f64, normalized.fraction_at(nm as f64))),
                color,
            ))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
