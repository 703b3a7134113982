// File: crates/svgchart-core/src/lib.rs
// Summary: Core library entry point; exports surface creation, grid emission and layout helpers.

pub mod axis;
pub mod creation;
pub mod dom;
pub mod error;
pub mod event;
pub mod functional;
pub mod geometry;
pub mod options;
pub mod types;

pub use axis::{AxisUnits, Coord, Extent, GridAxis};
pub use creation::{
    create_axis_grid, create_chart_rect, create_grid, create_grid_background, create_svg,
    SURFACE_CLASS,
};
pub use dom::{Element, Selector, SvgElement};
pub use error::{ChartError, Result};
pub use event::{DrawEvent, EventEmitter, EventSink, GridBackgroundEvent, GridEvent, HandlerId, DRAW};
pub use functional::{serial_map, sum, times};
pub use geometry::{Bound, ChartRect};
pub use options::{AxisOptions, AxisPosition, ChartOptions, ClassNames};
pub use types::{normalize_padding, Padding, PaddingSpec, PartialPadding};
