//! Convergence chart rendering (requires the `plot` feature).
//!
//! Purely presentational: draws the best and average fitness history of
//! a finished run as line series over the generation axis.

use plotters::prelude::*;

/// Renders the best/average fitness history to a PNG at `path`.
///
/// # Errors
/// Returns the underlying drawing error when the backend cannot write
/// the file.
pub fn render_convergence(
    path: &str,
    best_history: &[u64],
    avg_history: &[f64],
) -> Result<(), Box<dyn std::error::Error>> {
    let generations = best_history.len().max(1);
    let y_max = best_history.iter().copied().max().unwrap_or(0) as f64;
    let padding = (y_max * 0.05).max(1.0);

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Genetic Algorithm Evolution - Knapsack Problem", ("sans-serif", 30))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .margin(10)
        .build_cartesian_2d(0..generations, 0.0..(y_max + padding))?;

    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Fitness")
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            best_history.iter().enumerate().map(|(x, &y)| (x, y as f64)),
            RED.stroke_width(2),
        ))?
        .label("Best Fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            avg_history.iter().enumerate().map(|(x, &y)| (x, y)),
            BLUE.stroke_width(2),
        ))?
        .label("Average Fitness")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE)
        .draw()?;

    root.present()?;
    Ok(())
}
