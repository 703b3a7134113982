// File: crates/svgchart-plugins/src/lib.rs
// Summary: Draw-event plugins that restyle grid primitives as they are emitted.

use log::debug;
use svgchart_core::{Coord, DrawEvent, Element, EventEmitter, HandlerId, SvgElement, DRAW};

pub type DrawEmitter = EventEmitter<DrawEvent<SvgElement>>;

/// A plugin hooks into the `"draw"` channel of a chart's emitter.
pub trait DrawPlugin {
    fn name(&self) -> &'static str;
    /// Register handlers; returns their ids so the caller can uninstall them.
    fn install(&self, events: &DrawEmitter) -> Vec<HandlerId>;
}

/// Install every plugin in order.
pub fn install_all(plugins: &[&dyn DrawPlugin], events: &DrawEmitter) -> Vec<HandlerId> {
    plugins
        .iter()
        .flat_map(|p| {
            debug!("installing plugin {}", p.name());
            p.install(events)
        })
        .collect()
}

/// Adds `class` to every `every`-th grid line, optionally only for one axis.
pub struct GridAccent {
    pub every: usize,
    pub class: String,
    pub axis: Option<Coord>,
}

impl GridAccent {
    pub fn new(every: usize, class: impl Into<String>) -> Self {
        Self { every: every.max(1), class: class.into(), axis: None }
    }

    pub fn on_axis(mut self, axis: Coord) -> Self {
        self.axis = Some(axis);
        self
    }
}

impl DrawPlugin for GridAccent {
    fn name(&self) -> &'static str { "grid-accent" }

    fn install(&self, events: &DrawEmitter) -> Vec<HandlerId> {
        let every = self.every;
        let class = self.class.clone();
        let only = self.axis;
        let id = events.on(DRAW, move |event| {
            if let DrawEvent::Grid(grid) = event {
                let wanted = only.map_or(true, |c| c == grid.axis.units.pos);
                if wanted && grid.index % every == 0 {
                    grid.element.add_class(&class);
                }
            }
        });
        vec![id]
    }
}

/// Sets fill and opacity on the grid background rectangle.
pub struct BackgroundFill {
    pub fill: String,
    pub opacity: f64,
}

impl BackgroundFill {
    pub fn new(fill: impl Into<String>) -> Self {
        Self { fill: fill.into(), opacity: 1.0 }
    }
}

impl DrawPlugin for BackgroundFill {
    fn name(&self) -> &'static str { "background-fill" }

    fn install(&self, events: &DrawEmitter) -> Vec<HandlerId> {
        let fill = self.fill.clone();
        let opacity = self.opacity;
        let id = events.on(DRAW, move |event| {
            if let DrawEvent::GridBackground(bg) = event {
                bg.element.set_attr("fill", &fill);
                bg.element.set_num("fill-opacity", opacity);
            }
        });
        vec![id]
    }
}
