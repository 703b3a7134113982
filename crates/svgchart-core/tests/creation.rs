// File: crates/svgchart-core/tests/creation.rs
// Purpose: Surface replacement, grid line geometry and grid background emission.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use svgchart_core::{
    create_grid, create_grid_background, create_svg, ChartRect, Coord, DrawEvent, Element,
    EventEmitter, GridAxis, SvgElement, DRAW, SURFACE_CLASS,
};

fn container_with_foreign_svgs() -> SvgElement {
    let container = SvgElement::new("div");
    container.set_attr("id", "chart-container");
    let foo = SvgElement::new("svg");
    foo.set_attr("id", "foo");
    container.append_child(&foo);
    let wrapper = SvgElement::new("div");
    let bar = SvgElement::new("svg");
    bar.set_attr("id", "bar");
    wrapper.append_child(&bar);
    container.append_child(&wrapper);
    container
}

#[test]
fn create_svg_keeps_foreign_svg_elements() {
    let container = container_with_foreign_svgs();
    let foo = container.query_selector("#foo").unwrap().expect("foo present");
    let foo_markup = foo.to_markup().unwrap();

    let svg = create_svg(&container, "500px", "400px", "ct-fish-bar");

    assert!(svg.has_class("ct-fish-bar"));
    assert!(svg.has_class(SURFACE_CLASS));
    assert_eq!(svg.attr("width").as_deref(), Some("500px"));
    assert_eq!(svg.attr("height").as_deref(), Some("400px"));
    assert!(container.query_selector("#foo").unwrap().is_some());
    assert!(container.query_selector("#bar").unwrap().is_some());
    assert_eq!(foo.to_markup().unwrap(), foo_markup);

    // A second render still leaves the foreign ones alone.
    create_svg(&container, "500px", "400px", "ct-fish-bar");
    assert_eq!(container.query_selector_all("svg").unwrap().len(), 3);
}

#[test]
fn create_svg_keeps_foreign_svg_with_same_class() {
    let container = SvgElement::new("div");
    let foreign = SvgElement::new("svg");
    foreign.set_attr("id", "foreign");
    foreign.add_class("ct-fish-bar");
    container.append_child(&foreign);
    let foreign_markup = foreign.to_markup().unwrap();

    create_svg(&container, "500px", "400px", "ct-fish-bar");
    let svg = create_svg(&container, "500px", "400px", "ct-fish-bar");

    assert_eq!(foreign.parent(), Some(container.clone()));
    assert_eq!(foreign.to_markup().unwrap(), foreign_markup);
    assert!(!foreign.has_class(SURFACE_CLASS));
    let surfaces = container.query_selector_all("svg.ct-fish-bar").unwrap();
    assert_eq!(surfaces.len(), 2);
    assert_eq!(surfaces, vec![foreign, svg]);
}

#[test]
fn create_svg_replaces_previous_surface() {
    let container = SvgElement::new("div");
    let svg1 = create_svg(&container, "500px", "400px", "ct-fish-bar");
    let svg2 = create_svg(&container, "800px", "200px", "ct-snake-bar");

    assert!(svg1.has_class("ct-fish-bar"));
    assert!(svg2.has_class("ct-snake-bar"));
    assert!(container.query_selector(".ct-fish-bar").unwrap().is_none());
    assert!(container.query_selector(".ct-snake-bar").unwrap().is_some());
    assert_eq!(container.query_selector_all(&format!("svg.{SURFACE_CLASS}")).unwrap().len(), 1);
    assert!(svg1.parent().is_none());
    assert_eq!(svg2.parent(), Some(container.clone()));
}

#[test]
fn create_svg_evicts_nested_owned_surface() {
    let container = SvgElement::new("div");
    let inner = SvgElement::new("div");
    container.append_child(&inner);
    let old = create_svg(&inner, "10px", "10px", "ct-old");

    create_svg(&container, "20px", "20px", "ct-new");

    assert!(!container.contains(&old));
    assert!(inner.children().is_empty());
    assert_eq!(container.query_selector_all("svg").unwrap().len(), 1);
}

#[test]
fn create_svg_splits_class_list() {
    let container = SvgElement::new("div");
    let svg = create_svg(&container, "100%", "300px", "ct-chart-line  ct-golden");
    assert_eq!(svg.classes(), vec!["ct-chart-line", "ct-golden", SURFACE_CLASS]);
    assert_eq!(svg.attr("style").as_deref(), Some("width: 100%; height: 300px;"));
}

fn grid_on(axis: GridAxis) -> (SvgElement, Rc<RefCell<Vec<DrawEvent<SvgElement>>>>) {
    let events = EventEmitter::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    events.on(DRAW, move |e: &DrawEvent<SvgElement>| sink.borrow_mut().push(e.clone()));
    let group = SvgElement::new("g");
    create_grid(10.0, 1, &axis, 20.0, 100.0, &group, &[], &events);
    (group, seen)
}

#[test]
fn create_grid_adds_single_line() {
    let (group, seen) = grid_on(GridAxis::x());
    assert_eq!(group.query_selector_all("line").unwrap().len(), 1);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn create_grid_draws_vertical_line() {
    let (group, _) = grid_on(GridAxis::x());
    let line = group.query_selector("line").unwrap().unwrap();
    assert_eq!(line.attr("x1").as_deref(), Some("10"));
    assert_eq!(line.attr("x2").as_deref(), Some("10"));
    assert_eq!(line.attr("y1").as_deref(), Some("20"));
    assert_eq!(line.attr("y2").as_deref(), Some("120"));
}

#[test]
fn create_grid_draws_horizontal_line() {
    let (group, _) = grid_on(GridAxis::y());
    let line = group.query_selector("line").unwrap().unwrap();
    assert_eq!(line.attr("y1").as_deref(), Some("10"));
    assert_eq!(line.attr("y2").as_deref(), Some("10"));
    assert_eq!(line.attr("x1").as_deref(), Some("20"));
    assert_eq!(line.attr("x2").as_deref(), Some("120"));
}

#[test]
fn create_grid_event_carries_geometry() {
    let (group, seen) = grid_on(GridAxis::y());
    let seen = seen.borrow();
    let DrawEvent::Grid(ev) = &seen[0] else { panic!("expected grid event") };
    assert_eq!(seen[0].kind(), "grid");
    assert_eq!(ev.axis.units.pos, Coord::Y);
    assert_eq!(ev.axis.counter_units.pos, Coord::X);
    assert_eq!(ev.index, 1);
    assert_eq!((ev.x1, ev.y1, ev.x2, ev.y2), (20.0, 10.0, 120.0, 10.0));
    assert_eq!(ev.group, group);
    assert_eq!(Some(ev.element.clone()), group.query_selector("line").unwrap());
}

#[test]
fn create_grid_applies_classes() {
    let events = EventEmitter::new();
    let group = SvgElement::new("g");
    create_grid(0.0, 0, &GridAxis::x(), 0.0, 10.0, &group, &["ct-grid", "ct-horizontal"], &events);
    let line = group.query_selector("line.ct-grid.ct-horizontal").unwrap();
    assert!(line.is_some());
}

#[test]
fn listener_mutation_is_visible_after_return() {
    let events = EventEmitter::new();
    events.on(DRAW, |e: &DrawEvent<SvgElement>| {
        e.element().add_class("ct-accent");
        e.element().set_attr("stroke", "red");
    });
    let group = SvgElement::new("g");
    create_grid(5.0, 0, &GridAxis::x(), 0.0, 50.0, &group, &["ct-grid"], &events);

    let line = group.query_selector("line").unwrap().unwrap();
    assert!(line.has_class("ct-grid"));
    assert!(line.has_class("ct-accent"));
    assert_eq!(line.attr("stroke").as_deref(), Some("red"));
}

#[test]
fn listener_sees_line_already_attached() {
    let events = EventEmitter::new();
    let attached = Rc::new(Cell::new(false));
    let flag = attached.clone();
    events.on(DRAW, move |e: &DrawEvent<SvgElement>| {
        flag.set(e.element().parent().as_ref() == Some(e.group()));
    });
    let group = SvgElement::new("g");
    create_grid(5.0, 0, &GridAxis::y(), 0.0, 50.0, &group, &[], &events);
    assert!(attached.get());
}

#[test]
fn draw_events_follow_call_order() {
    let events = EventEmitter::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let log = order.clone();
    events.on(DRAW, move |e: &DrawEvent<SvgElement>| {
        let tag = match e {
            DrawEvent::Grid(g) => format!("grid{}", g.index),
            DrawEvent::GridBackground(_) => "background".to_string(),
        };
        log.borrow_mut().push(tag);
    });
    let group = SvgElement::new("g");
    let rect = ChartRect::from_bounds(0.0, 100.0, 50.0, 0.0);
    create_grid_background(&group, &rect, "ct-grid-background", &events);
    for i in 0..3 {
        create_grid(i as f64 * 10.0, i, &GridAxis::x(), 0.0, 50.0, &group, &[], &events);
    }
    assert_eq!(*order.borrow(), vec!["background", "grid0", "grid1", "grid2"]);
}

fn test_rect() -> ChartRect {
    // x1 = 5, y2 = 10, width 100, height 50
    ChartRect::from_bounds(5.0, 105.0, 60.0, 10.0)
}

#[test]
fn create_grid_background_adds_rect() {
    let events = EventEmitter::new();
    let group = SvgElement::new("g");
    create_grid_background(&group, &test_rect(), "ct-test", &events);

    let rects = group.query_selector_all("rect").unwrap();
    assert_eq!(rects.len(), 1);
    let rect = &rects[0];
    assert_eq!(rect.attr("x").as_deref(), Some("5"));
    assert_eq!(rect.attr("y").as_deref(), Some("10"));
    assert_eq!(rect.attr("width").as_deref(), Some("100"));
    assert_eq!(rect.attr("height").as_deref(), Some("50"));
    assert_eq!(rect.classes(), vec!["ct-test"]);
}

#[test]
fn create_grid_background_passes_rect_to_event() {
    let events = EventEmitter::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    events.on(DRAW, move |e: &DrawEvent<SvgElement>| *sink.borrow_mut() = Some(e.clone()));
    let group = SvgElement::new("g");
    create_grid_background(&group, &test_rect(), "ct-test", &events);

    let event = seen.borrow_mut().take().expect("draw event published");
    assert_eq!(event.kind(), "gridBackground");
    assert!(event.axis().is_none());
    let rect = event.element();
    assert_eq!(rect.attr("x").as_deref(), Some("5"));
    assert_eq!(rect.attr("y").as_deref(), Some("10"));
    assert_eq!(Some(rect.clone()), group.query_selector("rect").unwrap());
}
