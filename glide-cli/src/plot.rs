use std::{ffi::OsStr, io::Write, ops::Range, path::Path};

use anyhow::bail;
use plotters::{coord::Shift, prelude::*};

#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points: points.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Option<Range<f64>>,
    pub y_range: Option<Range<f64>>,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn axis(mut self, x_range: Range<f64>, y_range: Range<f64>) -> Self {
        self.x_range = Some(x_range);
        self.y_range = Some(y_range);
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Explicit axis ranges, falling back to the extent of all finite points.
    pub fn bounds(&self) -> anyhow::Result<(Range<f64>, Range<f64>)> {
        let points = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let mut x_extent: Option<(f64, f64)> = None;
        let mut y_extent: Option<(f64, f64)> = None;
        for &(x, y) in points {
            x_extent = Some(extend(x_extent, x));
            y_extent = Some(extend(y_extent, y));
        }

        let (Some(x_extent), Some(y_extent)) = (x_extent, y_extent) else {
            bail!("figure \"{}\" has no points to plot", self.title);
        };

        let x_range = self.x_range.clone().unwrap_or_else(|| widen(x_extent));
        let y_range = self.y_range.clone().unwrap_or_else(|| widen(y_extent));

        Ok((x_range, y_range))
    }
}

fn extend(extent: Option<(f64, f64)>, v: f64) -> (f64, f64) {
    match extent {
        Some((min, max)) => (min.min(v), max.max(v)),
        None => (v, v),
    }
}

fn widen((min, max): (f64, f64)) -> Range<f64> {
    if min < max {
        min..max
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.5 };
        (min - pad)..(max + pad)
    }
}

/// Renders as SVG for a `.svg` path, as a bitmap otherwise.
pub fn render(figure: &Figure, path: &Path, size: (u32, u32)) -> anyhow::Result<()> {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => {
            draw(figure, SVGBackend::new(path, size).into_drawing_area())
        }
        _ => draw(figure, BitMapBackend::new(path, size).into_drawing_area()),
    }
}

fn draw<DB>(figure: &Figure, root: DrawingArea<DB, Shift>) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = figure.bounds()?;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .draw()?;

    for (n, series) in figure.series.iter().enumerate() {
        let style = Palette99::pick(n).stroke_width(2);

        chart
            .draw_series(LineSeries::new(series.points.iter().copied(), style))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    if figure.series.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;

    Ok(())
}

/// One `x<TAB>y` line per point, series after series.
pub fn write_points(figure: &Figure, mut out: impl Write) -> std::io::Result<()> {
    for series in &figure.series {
        writeln!(out, "# {}", series.label)?;
        for (x, y) in &series.points {
            writeln!(out, "{x}\t{y}")?;
        }
    }

    Ok(())
}
