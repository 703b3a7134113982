// File: crates/svgchart-examples/src/bin/grid.rs
// Summary: Minimal example that renders a grid with background into an SVG file.

use anyhow::Result;
use log::info;
use svgchart_core::{
    create_axis_grid, create_chart_rect, create_grid_background, create_svg, ChartOptions,
    DrawEvent, Element, EventEmitter, GridAxis, SvgElement, DRAW,
};

fn main() -> Result<()> {
    env_logger::init();

    let opts = ChartOptions { show_grid_background: true, ..ChartOptions::default() };
    let (width, height) = (640.0, 360.0);

    let container = SvgElement::new("div");
    let svg = create_svg(&container, "640", "360", &opts.class_names.chart);
    let rect = create_chart_rect(width, height, &opts);

    let events = EventEmitter::new();
    events.on(DRAW, |e: &DrawEvent<SvgElement>| {
        e.element().set_attr("stroke", "#ccc");
    });

    let grids = SvgElement::new("g");
    grids.add_class(&opts.class_names.grid_group);
    svg.append_child(&grids);

    if opts.show_grid_background {
        create_grid_background(&grids, &rect, &opts.class_names.grid_background, &events);
    }
    let xs: Vec<f64> = (0..=8).map(|i| rect.x1 + rect.width() * i as f64 / 8.0).collect();
    let ys: Vec<f64> = (0..=4).map(|i| rect.y2 + rect.height() * i as f64 / 4.0).collect();
    create_axis_grid(&xs, &GridAxis::x(), &rect, &grids, &opts.class_names, &events);
    create_axis_grid(&ys, &GridAxis::y(), &rect, &grids, &opts.class_names, &events);

    let out = std::path::PathBuf::from("target/out/example_grid.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, svg.to_markup()?)?;
    info!("{} grid lines", xs.len() + ys.len());
    println!("Wrote {}", out.display());
    Ok(())
}
