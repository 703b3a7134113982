// File: crates/svgchart-core/src/creation.rs
// Summary: Surface lifecycle (create/replace the root svg) and grid/background emission.

use log::{debug, trace};

use crate::axis::{Coord, GridAxis};
use crate::dom::{Element, Selector, SVG_NS};
use crate::event::{DrawEvent, EventSink, GridBackgroundEvent, GridEvent, DRAW};
use crate::geometry::ChartRect;
use crate::options::{AxisPosition, ChartOptions, ClassNames};
use crate::types::normalize_padding;

/// Class carried by every surface this crate creates. Only svg elements with
/// this class are ever evicted from a container.
pub const SURFACE_CLASS: &str = "ct-surface";

/// Create the chart surface inside `container`, replacing the one created by a previous call.
///
/// Svg elements placed in the container by anyone else are left as they are.
pub fn create_svg<E: Element>(container: &E, width: &str, height: &str, class_names: &str) -> E {
    let owned = container.query_all(&Selector::tag("svg").with_class(SURFACE_CLASS));
    if !owned.is_empty() {
        debug!("evicting {} previous surface(s)", owned.len());
    }
    for svg in owned {
        svg.remove();
    }

    let svg = E::new("svg");
    svg.set_attr("xmlns", SVG_NS);
    svg.set_attr("width", width);
    svg.set_attr("height", height);
    svg.set_attr("style", &format!("width: {width}; height: {height};"));
    svg.add_classes(class_names);
    svg.add_class(SURFACE_CLASS);
    container.append_child(&svg);
    debug!("created surface {width}x{height} classes='{class_names}'");
    svg
}

/// Derive the plot rectangle for a surface of `width` x `height` pixels.
///
/// Padding comes from `options.chart_padding` (absent sides are 0). Axis offsets
/// are subtracted on the side given by each axis position.
pub fn create_chart_rect(width: f64, height: f64, options: &ChartOptions) -> ChartRect {
    let padding = normalize_padding(options.chart_padding, 0.0);
    let x_offset = options.axis_x.map_or(0.0, |a| a.offset);
    let y_offset = options.axis_y.map_or(0.0, |a| a.offset);

    let width = width.max(y_offset + padding.hsum());
    let height = height.max(x_offset + padding.vsum());

    let mut rect = ChartRect { padding, ..ChartRect::default() };
    if options.has_axis() {
        let x_start = options.axis_x.is_some_and(|a| a.position == AxisPosition::Start);
        let y_start = options.axis_y.is_some_and(|a| a.position == AxisPosition::Start);
        if x_start {
            rect.y2 = padding.top + x_offset;
            rect.y1 = (height - padding.bottom).max(rect.y2 + 1.0);
        } else {
            rect.y2 = padding.top;
            rect.y1 = (height - padding.bottom - x_offset).max(rect.y2 + 1.0);
        }
        if y_start {
            rect.x1 = padding.left + y_offset;
            rect.x2 = (width - padding.right).max(rect.x1 + 1.0);
        } else {
            rect.x1 = padding.left;
            rect.x2 = (width - padding.right - y_offset).max(rect.x1 + 1.0);
        }
    } else {
        rect.x1 = padding.left;
        rect.x2 = (width - padding.right).max(rect.x1);
        rect.y2 = padding.top;
        rect.y1 = (height - padding.bottom).max(rect.y2);
    }
    rect
}

/// Emit one grid line at `position` on the primary coordinate of `axis`,
/// spanning `offset..offset + length` on the counter coordinate.
///
/// The line is appended to `group` before the `"draw"` event fires, so
/// listeners can restyle it in place.
#[allow(clippy::too_many_arguments)]
pub fn create_grid<E: Element>(
    position: f64,
    index: usize,
    axis: &GridAxis,
    offset: f64,
    length: f64,
    group: &E,
    class_names: &[&str],
    events: &impl EventSink<DrawEvent<E>>,
) {
    let (mut x, mut y) = ((0.0, 0.0), (0.0, 0.0));
    {
        let mut assign = |coord: Coord, span: (f64, f64)| match coord {
            Coord::X => x = span,
            Coord::Y => y = span,
        };
        assign(axis.units.pos, (position, position));
        assign(axis.counter_units.pos, (offset, offset + length));
    }

    let line = E::new("line");
    line.set_num("x1", x.0);
    line.set_num("y1", y.0);
    line.set_num("x2", x.1);
    line.set_num("y2", y.1);
    for class in class_names {
        line.add_classes(class);
    }
    group.append_child(&line);

    trace!("grid {index} on {}: ({}, {}) -> ({}, {})", axis.units.pos, x.0, y.0, x.1, y.1);
    events.emit(
        DRAW,
        &DrawEvent::Grid(GridEvent {
            element: line,
            group: group.clone(),
            axis: *axis,
            index,
            x1: x.0,
            y1: y.0,
            x2: x.1,
            y2: y.1,
        }),
    );
}

/// Emit the rectangle behind the grid. Its origin is `(x1, y2)`: the top-left
/// corner of the plot area in SVG coordinates.
pub fn create_grid_background<E: Element>(
    group: &E,
    chart_rect: &ChartRect,
    class_name: &str,
    events: &impl EventSink<DrawEvent<E>>,
) {
    let rect = E::new("rect");
    rect.set_num("x", chart_rect.x1);
    rect.set_num("y", chart_rect.y2);
    rect.set_num("width", chart_rect.width());
    rect.set_num("height", chart_rect.height());
    rect.add_classes(class_name);
    group.append_child(&rect);

    trace!("grid background at ({}, {}) {}x{}", chart_rect.x1, chart_rect.y2, chart_rect.width(), chart_rect.height());
    events.emit(
        DRAW,
        &DrawEvent::GridBackground(GridBackgroundEvent { element: rect, group: group.clone() }),
    );
}

/// Emit one grid line per already projected pixel position, spanning the
/// counter extent of `chart_rect`. Lines get the grid class plus the class for
/// the axis direction.
pub fn create_axis_grid<E: Element>(
    positions: &[f64],
    axis: &GridAxis,
    chart_rect: &ChartRect,
    group: &E,
    class_names: &ClassNames,
    events: &impl EventSink<DrawEvent<E>>,
) {
    let offset = chart_rect.bound(axis.counter_units.rect_start);
    let length = chart_rect.extent(axis.counter_units.len);
    let classes = [class_names.grid.as_str(), class_names.for_direction(axis.units.dir)];
    for (index, &position) in positions.iter().enumerate() {
        create_grid(position, index, axis, offset, length, group, &classes, events);
    }
}
