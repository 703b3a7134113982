// File: crates/svgchart-core/src/event.rs
// Summary: Synchronous event sink/emitter and the draw-event payloads published during creation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::axis::GridAxis;

/// Event type published once per created primitive.
pub const DRAW: &str = "draw";
/// Wildcard event type; handlers registered under it receive every event.
pub const ANY: &str = "*";

/// Producer side of an event bus. Delivery is synchronous: every handler has
/// returned by the time `emit` does.
pub trait EventSink<P> {
    fn emit(&self, event: &str, payload: &P);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler<P> = Rc<dyn Fn(&str, &P)>;

struct Registration<P> {
    event: String,
    id: HandlerId,
    handler: Handler<P>,
}

/// Single-threaded publish/subscribe bus keyed by event type.
pub struct EventEmitter<P> {
    handlers: RefCell<Vec<Registration<P>>>,
    next_id: Cell<u64>,
}

impl<P> Default for EventEmitter<P> {
    fn default() -> Self {
        Self { handlers: RefCell::new(Vec::new()), next_id: Cell::new(0) }
    }
}

impl<P: 'static> EventEmitter<P> {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self, event: &str, handler: Handler<P>) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push(Registration { event: event.to_string(), id, handler });
        id
    }

    /// Register `handler` for `event`.
    pub fn on(&self, event: &str, handler: impl Fn(&P) + 'static) -> HandlerId {
        self.register(event, Rc::new(move |_: &str, payload: &P| handler(payload)))
    }

    /// Register a handler for every event type; it also receives the type name.
    pub fn on_any(&self, handler: impl Fn(&str, &P) + 'static) -> HandlerId {
        self.register(ANY, Rc::new(handler))
    }

    /// Remove one handler. Returns false when the id is unknown.
    pub fn off(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|r| r.id != id);
        handlers.len() != before
    }

    /// Remove every handler registered for `event`.
    pub fn off_all(&self, event: &str) {
        self.handlers.borrow_mut().retain(|r| r.event != event);
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.borrow().iter().filter(|r| r.event == event).count()
    }
}

impl<P> EventSink<P> for EventEmitter<P> {
    fn emit(&self, event: &str, payload: &P) {
        // Snapshot so handlers may (un)register while being dispatched.
        let (typed, wildcard): (Vec<_>, Vec<_>) = {
            let handlers = self.handlers.borrow();
            let typed = handlers
                .iter()
                .filter(|r| r.event == event && event != ANY)
                .map(|r| r.handler.clone())
                .collect();
            let wildcard = handlers
                .iter()
                .filter(|r| r.event == ANY)
                .map(|r| r.handler.clone())
                .collect();
            (typed, wildcard)
        };
        for handler in typed.iter().chain(wildcard.iter()) {
            (**handler)(event, payload);
        }
    }
}

/// Payload of a `"draw"` event for a grid line.
#[derive(Clone, Debug)]
pub struct GridEvent<E> {
    pub element: E,
    pub group: E,
    pub axis: GridAxis,
    pub index: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Payload of a `"draw"` event for the grid background.
#[derive(Clone, Debug)]
pub struct GridBackgroundEvent<E> {
    pub element: E,
    pub group: E,
}

/// Everything published on the `"draw"` channel. `element` is a handle to the
/// already attached primitive, so mutations made by listeners are kept.
#[derive(Clone, Debug)]
pub enum DrawEvent<E> {
    Grid(GridEvent<E>),
    GridBackground(GridBackgroundEvent<E>),
}

impl<E> DrawEvent<E> {
    /// Role name: `"grid"` or `"gridBackground"`.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawEvent::Grid(_) => "grid",
            DrawEvent::GridBackground(_) => "gridBackground",
        }
    }

    pub fn element(&self) -> &E {
        match self {
            DrawEvent::Grid(e) => &e.element,
            DrawEvent::GridBackground(e) => &e.element,
        }
    }

    pub fn group(&self) -> &E {
        match self {
            DrawEvent::Grid(e) => &e.group,
            DrawEvent::GridBackground(e) => &e.group,
        }
    }

    pub fn axis(&self) -> Option<&GridAxis> {
        match self {
            DrawEvent::Grid(e) => Some(&e.axis),
            DrawEvent::GridBackground(_) => None,
        }
    }
}
