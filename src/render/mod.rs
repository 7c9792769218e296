//! Scene rendering
//!
//! Draws the current session state onto any plotters backend: the filled
//! probability gradient, the zero-level decision boundary, the ±1 margin
//! contours, the training points colored by label, and the support vectors
//! as hollow gold rings. Everything is rebuilt from scratch per frame, so
//! stale artifacts cannot accumulate.

use crate::core::LabeledPoint;
use crate::session::{AnimationDriver, SessionController};
use crate::surface::DecisionSurface;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Gold ring color for support vectors
const GOLD: RGBColor = RGBColor(255, 191, 0);

/// How a frame is drawn
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Draw status/readout text and axis labels. Requires a registered
    /// font (see `text::set_farsi_font`); off by default so headless runs
    /// without fonts still render.
    pub draw_labels: bool,
    /// Status line, usually `AnimationDriver::status_line()`
    pub status: Option<String>,
    /// Decision readout under the pointer, blank when None
    pub readout: Option<f64>,
}

/// Render one frame of the session
///
/// `alpha` scales the decision surface toward its converged shape; the
/// trainer passes 1.0, the circles animation sweeps it per frame.
pub fn render_scene<DB>(
    session: &SessionController,
    alpha: f64,
    options: &RenderOptions,
    area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    area.fill(&WHITE)?;

    let grid = session.grid();
    let mut builder = ChartBuilder::on(area);
    builder.margin(20);
    if options.draw_labels {
        builder.set_all_label_area_size(40);
    }
    let mut chart =
        builder.build_cartesian_2d(grid.x_min..grid.x_max, grid.y_min..grid.y_max)?;

    if options.draw_labels {
        chart
            .configure_mesh()
            .x_labels(10)
            .x_desc("X1")
            .y_labels(10)
            .y_desc("X2")
            .draw()?;
    }

    let scaled;
    let surface = match session.surface() {
        Some(s) if alpha < 1.0 => {
            scaled = s.scaled(alpha);
            Some(&scaled)
        }
        other => other,
    };

    if let Some(surface) = surface {
        draw_gradient(&mut chart, surface)?;
        draw_contours(&mut chart, surface)?;
    }

    draw_points(&mut chart, session.points())?;
    if let Some(model) = session.model() {
        draw_support_vectors(&mut chart, model.support_vectors())?;
    }

    if options.draw_labels {
        let style = TextStyle::from(("sans-serif", 16)).color(&BLACK);
        if let Some(status) = &options.status {
            area.draw(&Text::new(status.clone(), (30, 10), style.clone()))?;
        }
        let readout = match options.readout {
            Some(value) => format!("Decision: {value:.2}"),
            None => String::new(),
        };
        area.draw(&Text::new(readout, (30, 30), style))?;
    }

    area.present()?;
    Ok(())
}

/// Render a frame of the session straight to a PNG file
pub fn render_frame_to_png<P: AsRef<Path>>(
    session: &SessionController,
    driver: &AnimationDriver,
    options: &RenderOptions,
    path: P,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let area = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    render_scene(session, driver.alpha(), options, &area)
}

type Chart<'a, DB> = ChartContext<
    'a,
    DB,
    Cartesian2d<
        plotters::coord::types::RangedCoordf64,
        plotters::coord::types::RangedCoordf64,
    >,
>;

/// Filled probability gradient, one rectangle per grid cell
fn draw_gradient<DB>(
    chart: &mut Chart<DB>,
    surface: &DecisionSurface,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let spec = surface.spec();
    let n = spec.resolution;

    chart.draw_series((0..n - 1).flat_map(|j| {
        (0..n - 1).map(move |i| {
            let a = spec.point_at(i, j);
            let b = spec.point_at(i + 1, j + 1);
            let color = diverging_color(surface.probability_at(i, j)).mix(0.3);
            Rectangle::new([(a.x, a.y), (b.x, b.y)], color.filled())
        })
    }))?;

    Ok(())
}

/// Zero-level boundary (solid black) and ±1 margins (dashed blue/green)
fn draw_contours<DB>(
    chart: &mut Chart<DB>,
    surface: &DecisionSurface,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    for seg in surface.contour_lines(0.0) {
        chart.draw_series(LineSeries::new(
            [(seg.a.x, seg.a.y), (seg.b.x, seg.b.y)],
            BLACK.stroke_width(2),
        ))?;
    }

    // Margin contours; skipping every other cell segment approximates the
    // dashed linestyle without ordering the segments into polylines.
    for (level, color) in [(-1.0, BLUE), (1.0, GREEN)] {
        for seg in surface.contour_lines(level).into_iter().step_by(2) {
            chart.draw_series(LineSeries::new(
                [(seg.a.x, seg.a.y), (seg.b.x, seg.b.y)],
                color.stroke_width(1),
            ))?;
        }
    }

    Ok(())
}

/// Training points, red for class one, blue for class zero, dark edge
fn draw_points<DB>(
    chart: &mut Chart<DB>,
    points: &[LabeledPoint],
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    chart.draw_series(points.iter().map(|p| {
        let fill = match p.label {
            crate::core::Label::One => RED,
            crate::core::Label::Zero => BLUE,
        };
        EmptyElement::at((p.point.x, p.point.y))
            + Circle::new((0, 0), 5, fill.filled())
            + Circle::new((0, 0), 5, BLACK.stroke_width(1))
    }))?;

    Ok(())
}

/// Hollow gold rings around the support vectors
fn draw_support_vectors<DB>(
    chart: &mut Chart<DB>,
    support: &[LabeledPoint],
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    chart.draw_series(support.iter().map(|sv| {
        Circle::new((sv.point.x, sv.point.y), 9, GOLD.stroke_width(2))
    }))?;

    Ok(())
}

/// Diverging blue-white-red map over a [0, 1] score
fn diverging_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let (lo, hi, s) = if t < 0.5 {
        (RGBColor(59, 76, 192), RGBColor(221, 221, 221), t * 2.0)
    } else {
        (RGBColor(221, 221, 221), RGBColor(180, 4, 38), (t - 0.5) * 2.0)
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * s).round() as u8;
    RGBColor(lerp(lo.0, hi.0), lerp(lo.1, hi.1), lerp(lo.2, hi.2))
}
