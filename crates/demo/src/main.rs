// File: crates/demo/src/main.rs
// Summary: Demo loads uneven series columns from CSV, stacks them and renders grid + points to SVG.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use svgchart_core::options::quantity;
use svgchart_core::{
    create_axis_grid, create_chart_rect, create_grid_background, create_svg, serial_map, sum,
    ChartOptions, ChartRect, Element, GridAxis, SvgElement,
};
use svgchart_plugins::{install_all, BackgroundFill, DrawEmitter, GridAccent};

fn main() -> Result<()> {
    env_logger::init();

    // Usage: svgchart-demo <series.csv> [options.json]
    let mut args = std::env::args().skip(1);
    let csv_path = PathBuf::from(args.next().unwrap_or_else(|| "series.csv".to_string()));
    let opts = match args.next() {
        Some(p) => {
            let raw = std::fs::read_to_string(&p).with_context(|| format!("reading options '{p}'"))?;
            ChartOptions::from_json_str(&raw).with_context(|| format!("parsing options '{p}'"))?
        }
        None => ChartOptions { show_grid_background: true, ..ChartOptions::default() },
    };

    let (names, series) = load_series_csv(&csv_path)
        .with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    info!("Loaded {} series from {}", series.len(), csv_path.display());
    if series.iter().all(|s| s.is_empty()) {
        anyhow::bail!("no values loaded, check the CSV headers/delimiter");
    }
    for (name, s) in names.iter().zip(&series) {
        info!("  {name}: {} values", s.len());
    }

    // Stack: one total per index, missing values count as zero.
    let totals = serial_map(&series, |row: &[Option<&f64>]| row.iter().map(|v| v.copied()).fold(0.0, sum));
    let max_total = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max).max(1e-9);

    let width_css = opts.width.clone().unwrap_or_else(|| "800px".to_string());
    let height_css = opts.height.clone().unwrap_or_else(|| "480px".to_string());
    let width = quantity(&width_css).unwrap_or(800.0);
    let height = quantity(&height_css).unwrap_or(480.0);

    let container = SvgElement::new("div");
    let svg = create_svg(&container, &width_css, &height_css, &opts.class_names.chart);
    let rect = create_chart_rect(width, height, &opts);

    let events = DrawEmitter::new();
    let accent = GridAccent::new(5, "ct-major");
    let fill = BackgroundFill::new("#f4f4f8");
    install_all(&[&accent, &fill], &events);

    let grids = SvgElement::new("g");
    grids.add_class(&opts.class_names.grid_group);
    svg.append_child(&grids);

    if opts.show_grid_background {
        create_grid_background(&grids, &rect, &opts.class_names.grid_background, &events);
    }
    if opts.axis_x.map_or(false, |a| a.show_grid) {
        let xs = linspace(rect.x1, rect.x2, totals.len().max(2));
        create_axis_grid(&xs, &GridAxis::x(), &rect, &grids, &opts.class_names, &events);
    }
    if opts.axis_y.map_or(false, |a| a.show_grid) {
        let ys = linspace(rect.y2, rect.y1, 6);
        create_axis_grid(&ys, &GridAxis::y(), &rect, &grids, &opts.class_names, &events);
    }

    let points = SvgElement::new("g");
    points.add_class("ct-series");
    svg.append_child(&points);
    for (i, total) in totals.iter().enumerate() {
        let (cx, cy) = project(&rect, i, totals.len(), *total / max_total);
        let dot = SvgElement::new("circle");
        dot.set_num("cx", cx);
        dot.set_num("cy", cy);
        dot.set_num("r", 3.0);
        dot.add_class("ct-point");
        points.append_child(&dot);
    }

    let out = out_name_with(&csv_path, "stacked");
    std::fs::write(&out, svg.to_markup()?).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Index/fraction to pixel position inside the plot rectangle.
fn project(rect: &ChartRect, index: usize, count: usize, frac: f64) -> (f64, f64) {
    let span = (count.max(2) - 1) as f64;
    let x = rect.x1 + rect.width() * index as f64 / span;
    let y = rect.y1 - rect.height() * frac;
    (x, y)
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    if stem.is_empty() {
        out.push(format!("chart_{}.svg", suffix));
    } else {
        out.push(format!("chart_{}_{}.svg", stem, suffix));
    }
    out
}

/// Load one series per CSV column. Columns may have different lengths: a
/// column ends at its first blank cell.
fn load_series_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<f64>>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let names = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    let mut series: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut ended = vec![false; names.len()];

    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        for (col, values) in series.iter_mut().enumerate() {
            if ended[col] { continue; }
            let cell = rec.get(col).map(str::trim).unwrap_or("");
            if cell.is_empty() {
                ended[col] = true;
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    warn!("row {}: column '{}' ends at non-numeric '{}'", line + 2, names[col], cell);
                    ended[col] = true;
                }
            }
        }
    }
    Ok((names, series))
}
